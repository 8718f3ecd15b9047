use areakit_designer::grid::{axis_labels, axis_lines, grid_lines, visible_workspace, Axis};
use areakit_designer::renderer::workspace_outline;
use areakit_designer::viewport::{ViewConfig, Viewport};

// Workspace [-100, 100] x [-50, 50] mm at 2 px/mm
fn viewport() -> Viewport {
    Viewport::new(ViewConfig::new(200.0, 100.0, 400.0, 200.0)).unwrap()
}

#[test]
fn test_grid_lines_cover_visible_workspace() {
    let vp = viewport();
    let lines = grid_lines(&vp, 50.0);

    let xs: Vec<f64> = lines
        .iter()
        .filter(|l| l.axis == Axis::X)
        .map(|l| l.value_mm)
        .collect();
    let ys: Vec<f64> = lines
        .iter()
        .filter(|l| l.axis == Axis::Y)
        .map(|l| l.value_mm)
        .collect();
    assert_eq!(xs, vec![-100.0, -50.0, 0.0, 50.0, 100.0]);
    assert_eq!(ys, vec![-50.0, 0.0, 50.0]);

    let x50 = lines
        .iter()
        .find(|l| l.axis == Axis::X && l.value_mm == 50.0)
        .unwrap();
    assert_eq!(x50.position_px, 300.0);
}

#[test]
fn test_grid_follows_zoom() {
    let mut vp = viewport();
    vp.set_zoom(2.0);
    vp.center_scroll();
    let lines = grid_lines(&vp, 50.0);

    // Visible rect is [-50, 50] x [-25, 25]
    assert_eq!(lines.iter().filter(|l| l.axis == Axis::X).count(), 3);
    assert_eq!(lines.iter().filter(|l| l.axis == Axis::Y).count(), 1);
}

#[test]
fn test_non_positive_step_has_no_grid() {
    let vp = viewport();
    assert!(grid_lines(&vp, 0.0).is_empty());
    assert!(axis_labels(&vp, -10.0).is_empty());
}

#[test]
fn test_axis_lines_at_origin() {
    let vp = viewport();
    let axes = axis_lines(&vp);
    assert_eq!(axes.horizontal_px, Some(100.0));
    assert_eq!(axes.vertical_px, Some(200.0));
}

#[test]
fn test_workspace_panned_out_of_view() {
    let mut vp = viewport();
    vp.set_pan(10_000.0, 0.0);

    assert!(visible_workspace(&vp).is_none());
    assert!(grid_lines(&vp, 50.0).is_empty());
    let axes = axis_lines(&vp);
    assert_eq!(axes.horizontal_px, None);
    assert_eq!(axes.vertical_px, None);
}

#[test]
fn test_axis_labels_along_bottom_and_left() {
    let vp = viewport();
    let labels = axis_labels(&vp, 50.0);
    assert_eq!(labels.len(), 8);

    let first_x = labels.iter().find(|l| l.axis == Axis::X).unwrap();
    assert_eq!(first_x.text, "-100");
    assert_eq!(first_x.position_px, (0.0, 200.0));

    let first_y = labels.iter().find(|l| l.axis == Axis::Y).unwrap();
    assert_eq!(first_y.text, "-50");
    assert_eq!(first_y.position_px, (0.0, 200.0));
}

#[test]
fn test_axis_labels_follow_scroll() {
    let mut vp = viewport();
    vp.set_zoom(4.0);

    let texts = |vp: &Viewport, axis: Axis| -> Vec<String> {
        axis_labels(vp, 50.0)
            .into_iter()
            .filter(|l| l.axis == axis)
            .map(|l| l.text)
            .collect()
    };

    // Visible rect [-100, -50] x [25, 50]
    assert_eq!(texts(&vp, Axis::X), vec!["-100", "-50"]);
    assert_eq!(texts(&vp, Axis::Y), vec!["50"]);

    // Visible rect [-25, 25] x [-12.5, 12.5]
    vp.center_scroll();
    assert_eq!(texts(&vp, Axis::X), vec!["0"]);
    assert_eq!(texts(&vp, Axis::Y), vec!["0"]);

    let origin_label = axis_labels(&vp, 50.0)
        .into_iter()
        .find(|l| l.axis == Axis::X)
        .unwrap();
    assert_eq!(origin_label.position_px, (800.0, 500.0));
}

#[test]
fn test_workspace_outline() {
    let outline = workspace_outline(&viewport());
    assert_eq!(outline.top_left_px, (0.0, 0.0));
    assert_eq!(outline.bottom_right_px, (400.0, 200.0));
}
