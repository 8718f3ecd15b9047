use areakit_core::AreaErrorKind;
use areakit_designer::area_store::AreaStore;
use areakit_designer::edit_session::{DragState, EditSession, SnapSettings};
use areakit_designer::model::{AreaId, Point};
use areakit_designer::viewport::{ViewConfig, Viewport};

// 2 px/mm, mm origin at px (200, 100)
fn viewport() -> Viewport {
    Viewport::new(ViewConfig::new(200.0, 100.0, 400.0, 200.0)).unwrap()
}

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn store_with_square() -> (AreaStore, AreaId) {
    let mut store = AreaStore::new();
    let id = store
        .add_single("Box", pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]))
        .unwrap();
    (store, id)
}

#[test]
fn test_drag_lifecycle() {
    let (mut store, id) = store_with_square();
    let vp = viewport();
    let mut session = EditSession::new();
    assert_eq!(session.state(), &DragState::Idle);

    session.begin_drag(&store, id, (200.0, 100.0)).unwrap();
    assert!(session.is_dragging());
    assert_eq!(session.drag_target(), Some(id));
    assert_eq!(session.selected_id(), Some(id));

    let delta = session
        .update_drag(&mut store, &vp, (210.0, 90.0), SnapSettings::disabled())
        .unwrap();
    assert_eq!(delta, (5.0, 5.0));
    assert_eq!(
        store.get(id).unwrap().points(),
        pts(&[(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)]).as_slice()
    );

    session.end_drag();
    assert_eq!(session.state(), &DragState::Idle);
    // Ending keeps the last position and the selection
    assert_eq!(store.get(id).unwrap().points()[0], Point::new(5.0, 5.0));
    assert_eq!(session.selected_id(), Some(id));
}

#[test]
fn test_drag_updates_do_not_accumulate() {
    let (mut store, id) = store_with_square();
    let vp = viewport();
    let mut session = EditSession::new();
    session.begin_drag(&store, id, (200.0, 100.0)).unwrap();

    for step in 1..=20 {
        let offset = f64::from(step);
        session
            .update_drag(
                &mut store,
                &vp,
                (200.0 + offset, 100.0 - offset),
                SnapSettings::disabled(),
            )
            .unwrap();
    }

    // Net pointer travel (20, -20) px = (10, 10) mm from the start position
    assert_eq!(
        store.get(id).unwrap().points(),
        pts(&[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0)]).as_slice()
    );
}

#[test]
fn test_drag_delta_scales_with_zoom() {
    let (mut store, id) = store_with_square();
    let mut vp = viewport();
    vp.set_zoom(4.0);
    let mut session = EditSession::new();
    session.begin_drag(&store, id, (0.0, 0.0)).unwrap();

    let delta = session
        .update_drag(&mut store, &vp, (16.0, 8.0), SnapSettings::disabled())
        .unwrap();
    assert_eq!(delta, (2.0, -1.0));
}

#[test]
fn test_drag_snaps_to_grid() {
    let (mut store, id) = store_with_square();
    let vp = viewport();
    let snap = SnapSettings::new(true, 10.0);
    let mut session = EditSession::new();
    session.begin_drag(&store, id, (200.0, 100.0)).unwrap();

    // 3.5 mm snaps back to 0
    let delta = session.update_drag(&mut store, &vp, (207.0, 100.0), snap).unwrap();
    assert_eq!(delta, (0.0, 0.0));
    assert_eq!(store.get(id).unwrap().points()[0], Point::new(0.0, 0.0));

    // 6 mm snaps to 10
    let delta = session.update_drag(&mut store, &vp, (212.0, 100.0), snap).unwrap();
    assert_eq!(delta, (10.0, 0.0));
    assert_eq!(store.get(id).unwrap().points()[0], Point::new(10.0, 0.0));
}

#[test]
fn test_drag_clamps_to_workspace() {
    let (mut store, id) = store_with_square();
    let vp = viewport();
    let mut session = EditSession::new();
    session.begin_drag(&store, id, (200.0, 100.0)).unwrap();

    session
        .update_drag(&mut store, &vp, (1000.0, 100.0), SnapSettings::disabled())
        .unwrap();
    assert!(store.get(id).unwrap().points().iter().all(|p| p.x == 100.0));

    // Dragging back restores the shape from the snapshot
    session
        .update_drag(&mut store, &vp, (200.0, 100.0), SnapSettings::disabled())
        .unwrap();
    assert_eq!(
        store.get(id).unwrap().points(),
        pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).as_slice()
    );
}

#[test]
fn test_invalid_transitions() {
    let (mut store, id) = store_with_square();
    let vp = viewport();
    let mut session = EditSession::new();

    let err = session
        .update_drag(&mut store, &vp, (0.0, 0.0), SnapSettings::disabled())
        .unwrap_err();
    assert_eq!(err.kind(), AreaErrorKind::InvalidStateTransition);

    session.begin_drag(&store, id, (0.0, 0.0)).unwrap();
    let err = session.begin_drag(&store, id, (0.0, 0.0)).unwrap_err();
    assert_eq!(err.kind(), AreaErrorKind::InvalidStateTransition);

    session.end_drag();
    session.end_drag();
    assert!(!session.is_dragging());
}

#[test]
fn test_begin_drag_on_missing_area() {
    let (store, _) = store_with_square();
    let mut session = EditSession::new();

    let err = session.begin_drag(&store, AreaId::new(), (0.0, 0.0)).unwrap_err();
    assert_eq!(err.kind(), AreaErrorKind::AreaNotFound);
    assert!(!session.is_dragging());
}

#[test]
fn test_prune_cancels_gesture_on_deleted_area() {
    let (mut store, id) = store_with_square();
    let mut session = EditSession::new();
    session.begin_drag(&store, id, (0.0, 0.0)).unwrap();

    store.delete(id).unwrap();
    session.prune(&store);

    assert!(!session.is_dragging());
    assert_eq!(session.selected_id(), None);
}

#[test]
fn test_menu_edit_with_current_summary_is_noop() {
    let (mut store, id) = store_with_square();
    let bounds = viewport().bounds();
    let mut session = EditSession::new();

    let outcome = session
        .apply_menu_edit(&mut store, id, "Box", "(5,5)", false, 10.0, &bounds)
        .unwrap();

    assert_eq!(outcome.previous_summary, Point::new(5.0, 5.0));
    assert_eq!(outcome.delta, (0.0, 0.0));
    assert_eq!(
        store.get(id).unwrap().points(),
        pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).as_slice()
    );
}

#[test]
fn test_menu_edit_moves_summary_and_relabels() {
    let (mut store, id) = store_with_square();
    let bounds = viewport().bounds();
    let mut session = EditSession::new();

    let outcome = session
        .apply_menu_edit(&mut store, id, "Table", "(50, 20)", false, 10.0, &bounds)
        .unwrap();

    assert_eq!(outcome.delta, (45.0, 15.0));
    let area = store.get(id).unwrap();
    assert_eq!(area.label(), "Table");
    assert_eq!(
        area.points(),
        pts(&[(45.0, 15.0), (55.0, 15.0), (55.0, 25.0), (45.0, 25.0)]).as_slice()
    );
    assert_eq!(session.selected_id(), Some(id));
}

#[test]
fn test_menu_edit_snaps_delta() {
    let (mut store, id) = store_with_square();
    let bounds = viewport().bounds();
    let mut session = EditSession::new();

    let outcome = session
        .apply_menu_edit(&mut store, id, "Box", "(52,23)", true, 10.0, &bounds)
        .unwrap();
    assert_eq!(outcome.delta, (50.0, 20.0));
    assert_eq!(store.get(id).unwrap().points()[0], Point::new(50.0, 20.0));
}

#[test]
fn test_menu_edit_rejects_bad_coordinates() {
    let (mut store, id) = store_with_square();
    let bounds = viewport().bounds();
    let mut session = EditSession::new();

    let err = session
        .apply_menu_edit(&mut store, id, "Other", "somewhere", false, 10.0, &bounds)
        .unwrap_err();

    assert_eq!(err.kind(), AreaErrorKind::InvalidNumericFormat);
    let area = store.get(id).unwrap();
    assert_eq!(area.label(), "Box");
    assert_eq!(area.points()[0], Point::new(0.0, 0.0));
}

#[test]
fn test_drag_moved_compares_with_snapshot() {
    let (mut store, id) = store_with_square();
    let vp = viewport();
    let mut session = EditSession::new();
    assert!(!session.drag_moved(&store));

    session.begin_drag(&store, id, (200.0, 100.0)).unwrap();
    assert!(!session.drag_moved(&store));

    session
        .update_drag(&mut store, &vp, (220.0, 100.0), SnapSettings::disabled())
        .unwrap();
    assert!(session.drag_moved(&store));

    // Back at the start position
    session
        .update_drag(&mut store, &vp, (200.0, 100.0), SnapSettings::disabled())
        .unwrap();
    assert!(!session.drag_moved(&store));
}
