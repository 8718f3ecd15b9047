use areakit_core::AreaErrorKind;
use areakit_designer::editor::AreaEditor;
use areakit_designer::model::{AreaId, Point};
use areakit_designer::viewport::ViewConfig;

// 2 px/mm, mm origin at px (200, 100)
fn editor_with_box() -> (AreaEditor, AreaId) {
    let mut editor = AreaEditor::new(ViewConfig::new(200.0, 100.0, 400.0, 200.0)).unwrap();
    editor.set_document_text("Box,(0,0),(10,0),(10,10),(0,10)");
    editor.apply_document().unwrap();
    let id = editor.store.areas()[0].id();
    (editor, id)
}

#[test]
fn test_pointer_drag_moves_area() {
    let (mut editor, id) = editor_with_box();

    // mm (5, 5) is px (210, 90)
    assert_eq!(editor.pointer_down((210.0, 90.0)), Some(id));
    assert_eq!(editor.selected_id(), Some(id));

    assert!(editor.pointer_move((220.0, 90.0)).unwrap());
    assert!(editor.pointer_move((230.0, 90.0)).unwrap());
    editor.pointer_up();

    assert!(!editor.session.is_dragging());
    assert_eq!(editor.document_text(), "Box,(10,0),(20,0),(20,10),(10,10)");
}

#[test]
fn test_pointer_down_on_empty_space_clears_selection() {
    let (mut editor, id) = editor_with_box();
    editor.select(id).unwrap();

    assert_eq!(editor.pointer_down((390.0, 10.0)), None);
    assert_eq!(editor.selected_id(), None);
    assert!(!editor.pointer_move((395.0, 10.0)).unwrap());
}

#[test]
fn test_pointer_cancel_keeps_last_position() {
    let (mut editor, id) = editor_with_box();
    editor.pointer_down((210.0, 90.0));
    editor.pointer_move((210.0, 70.0)).unwrap();
    editor.pointer_cancel();

    assert_eq!(
        editor.store.get(id).unwrap().points()[0],
        Point::new(0.0, 10.0)
    );
    assert_eq!(editor.document_text(), "Box,(0,10),(10,10),(10,20),(0,20)");
}

#[test]
fn test_hit_test_prefers_topmost() {
    let (mut editor, bottom) = editor_with_box();
    let top = editor
        .create_area("Top", "(5,5)", Some(4.0), Some(4.0))
        .unwrap();

    assert_eq!(editor.hit_test((210.0, 90.0)), Some(top));
    // mm (1, 1) only hits the bottom box
    assert_eq!(editor.hit_test((202.0, 98.0)), Some(bottom));
    assert_eq!(editor.hit_test((0.0, 0.0)), None);
}

#[test]
fn test_geometry_bundle() {
    let (mut editor, id) = editor_with_box();
    editor.select(id).unwrap();

    let bundles = editor.geometry();
    assert_eq!(bundles.len(), 1);
    let bundle = &bundles[0];

    assert_eq!(bundle.id, id);
    assert_eq!(bundle.label, "Box");
    assert_eq!(
        bundle.polygon_px,
        vec![(200.0, 100.0), (220.0, 100.0), (220.0, 80.0), (200.0, 80.0)]
    );
    assert_eq!(bundle.interior_px, (210.0, 90.0));
    assert_eq!(bundle.top_left_anchor_px, (200.0, 80.0));
    assert_eq!(bundle.summary_mm, (5, 5));
    assert!(bundle.selected);
}

#[test]
fn test_scroll_changes_labels_not_geometry() {
    let (mut editor, _) = editor_with_box();
    editor.viewport.set_zoom(4.0);
    editor.grid.step_mm = 50.0;
    let labels_before = editor.axis_labels();

    editor.set_scroll(600.0, 300.0);

    // Surface pixels stay put; the visible window moves
    assert_eq!(editor.geometry()[0].interior_px, (840.0, 360.0));
    assert_ne!(editor.axis_labels(), labels_before);
}

#[test]
fn test_click_without_movement_is_not_an_edit() {
    let (mut editor, id) = editor_with_box();
    editor.set_document_text("typed");

    assert_eq!(editor.pointer_down((210.0, 90.0)), Some(id));
    editor.pointer_up();
    assert_eq!(editor.document_text(), "typed");

    editor.pointer_down((210.0, 90.0));
    editor.pointer_move((212.0, 90.0)).unwrap();
    editor.pointer_up();
    assert_eq!(editor.document_text(), "Box,(1,0),(11,0),(11,10),(1,10)");
}

#[test]
fn test_context_menu_and_edit() {
    let (mut editor, id) = editor_with_box();

    let menu = editor.context_menu(id).unwrap();
    assert_eq!(menu.label, "Box");
    assert_eq!(menu.summary_text, "(5,5)");
    assert_eq!(editor.selected_id(), Some(id));

    let outcome = editor.apply_menu_edit(id, "Crate", "(-20,-10)").unwrap();
    assert_eq!(outcome.delta, (-25.0, -15.0));
    assert_eq!(editor.context_menu(id).unwrap().summary_text, "(-20,-10)");
    assert_eq!(editor.store.get(id).unwrap().label(), "Crate");
}

#[test]
fn test_menu_edit_snaps_with_grid() {
    let (mut editor, id) = editor_with_box();
    editor.grid.snap_enabled = true;
    editor.grid.step_mm = 10.0;

    let outcome = editor.apply_menu_edit(id, "Box", "(52,23)").unwrap();
    assert_eq!(outcome.delta, (50.0, 20.0));
}

#[test]
fn test_delete_area() {
    let (mut editor, id) = editor_with_box();
    editor.select(id).unwrap();

    editor.delete_area(id).unwrap();
    assert!(editor.store.is_empty());
    assert_eq!(editor.selected_id(), None);
    assert_eq!(editor.document_text(), "");

    let err = editor.delete_area(id).unwrap_err();
    assert_eq!(err.kind(), AreaErrorKind::AreaNotFound);
    assert_eq!(
        editor.context_menu(id).unwrap_err().kind(),
        AreaErrorKind::AreaNotFound
    );
}

#[test]
fn test_select_and_clear() {
    let (mut editor, id) = editor_with_box();
    assert_eq!(
        editor.select(AreaId::new()).unwrap_err().kind(),
        AreaErrorKind::AreaNotFound
    );

    editor.select(id).unwrap();
    editor.clear_selection();
    assert_eq!(editor.selected_id(), None);
}
