use areakit_core::AreaErrorKind;
use areakit_designer::editor::AreaEditor;
use areakit_designer::model::{Point, Provenance};
use areakit_designer::viewport::ViewConfig;
use areakit_settings::Config;

// Workspace [-100, 100] x [-50, 50] mm
fn editor() -> AreaEditor {
    AreaEditor::new(ViewConfig::new(200.0, 100.0, 400.0, 200.0)).unwrap()
}

#[test]
fn test_create_area_centered_on_point() {
    let mut editor = editor();
    let id = editor
        .create_area("Desk", "(0,0)", Some(20.0), Some(10.0))
        .unwrap();

    let area = editor.store.get(id).unwrap();
    assert_eq!(area.label(), "Desk");
    assert_eq!(area.provenance(), Provenance::Single);
    assert_eq!(editor.selected_id(), Some(id));
    assert_eq!(editor.document_text(), "Desk,(-10,-5),(-10,5),(10,5),(10,-5)");
}

#[test]
fn test_create_area_clamps_to_workspace() {
    let mut editor = editor();
    let id = editor
        .create_area("Edge", "(95, 0)", Some(20.0), Some(10.0))
        .unwrap();

    assert_eq!(
        editor.store.get(id).unwrap().points(),
        [
            Point::new(85.0, -5.0),
            Point::new(85.0, 5.0),
            Point::new(100.0, 5.0),
            Point::new(100.0, -5.0),
        ]
        .as_slice()
    );
}

#[test]
fn test_create_area_uses_default_label() {
    let mut editor = editor();
    let id = editor
        .create_area("   ", "(0,0)", Some(10.0), Some(10.0))
        .unwrap();
    assert_eq!(editor.store.get(id).unwrap().label(), "AREA");
}

#[test]
fn test_create_area_requires_dimensions() {
    let mut editor = editor();

    for (width, height) in [
        (None, Some(10.0)),
        (Some(10.0), None),
        (Some(0.0), Some(10.0)),
        (Some(10.0), Some(-1.0)),
        (Some(f64::INFINITY), Some(10.0)),
    ] {
        let err = editor.create_area("A", "(0,0)", width, height).unwrap_err();
        assert_eq!(err.kind(), AreaErrorKind::InvalidDimension);
    }
    assert!(editor.store.is_empty());
}

#[test]
fn test_create_area_rejects_bad_coordinates() {
    let mut editor = editor();
    let err = editor
        .create_area("A", "here", Some(10.0), Some(10.0))
        .unwrap_err();

    assert_eq!(err.kind(), AreaErrorKind::InvalidNumericFormat);
    assert!(editor.store.is_empty());
    assert_eq!(editor.selected_id(), None);
}

#[test]
fn test_creation_form_uses_configured_defaults() {
    let mut config = Config::default();
    config.areas.default_label = "Zone".to_string();
    config.areas.default_width_mm = 40.0;
    config.areas.default_height_mm = 20.0;
    let mut editor = AreaEditor::from_config(&config).unwrap();

    let form = editor.creation_form();
    assert_eq!(form.label, "Zone");
    assert_eq!(form.xy_text, "(0,0)");
    assert_eq!(form.width_text, "40");
    assert_eq!(form.height_text, "20");

    let id = editor.submit_creation_form(&form).unwrap();
    let area = editor.store.get(id).unwrap();
    assert_eq!(area.label(), "Zone");
    assert_eq!(area.points()[2], Point::new(20.0, 10.0));

    // Blank label falls back to the configured default
    let id = editor
        .create_area("", "(100,100)", Some(10.0), Some(10.0))
        .unwrap();
    assert_eq!(editor.store.get(id).unwrap().label(), "Zone");
}

#[test]
fn test_creation_form_rejects_bad_dimension_text() {
    let mut editor = editor();
    let mut form = editor.creation_form();
    form.width_text = "   ".to_string();

    let err = editor.submit_creation_form(&form).unwrap_err();
    assert_eq!(err.kind(), AreaErrorKind::InvalidDimension);

    form.width_text = "10".to_string();
    form.height_text = "-3".to_string();
    let err = editor.submit_creation_form(&form).unwrap_err();
    assert_eq!(err.kind(), AreaErrorKind::InvalidDimension);
    assert!(editor.store.is_empty());
}
