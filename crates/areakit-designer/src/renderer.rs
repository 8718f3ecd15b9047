//! Pixel-space geometry handed to the drawing layer.
//!
//! The engine does not draw. For each area it computes the polygon in pixels,
//! the interior (summary) point used to place the label, the top-left label
//! anchor and the rounded summary coordinates shown to the user. Recompute
//! whenever an area moves or the view transform changes.

use serde::Serialize;

use crate::area_store::AreaStore;
use crate::geometry::find_interior_point;
use crate::model::{Area, AreaId, Bounds};
use crate::selection_manager::SelectionManager;
use crate::viewport::Viewport;

/// Render bundle for one area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaGeometry {
    pub id: AreaId,
    pub label: String,
    pub polygon_px: Vec<(f64, f64)>,
    pub interior_px: (f64, f64),
    pub top_left_anchor_px: (f64, f64),
    pub summary_mm: (i64, i64),
    pub selected: bool,
}

/// Outline of the workspace rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkspaceOutline {
    pub top_left_px: (f64, f64),
    pub bottom_right_px: (f64, f64),
}

/// Computes the render bundle of a single area.
pub fn area_geometry(area: &Area, viewport: &Viewport, selected: bool) -> AreaGeometry {
    let points = area.points();
    let interior = find_interior_point(points);
    let top_left = Bounds::from_points(points)
        .map(|b| viewport.mm_to_px(b.min_x, b.max_y))
        .unwrap_or_else(|| viewport.mm_point_to_px(&interior));

    AreaGeometry {
        id: area.id(),
        label: area.label().to_string(),
        polygon_px: points.iter().map(|p| viewport.mm_point_to_px(p)).collect(),
        interior_px: viewport.mm_point_to_px(&interior),
        top_left_anchor_px: top_left,
        summary_mm: interior.rounded(),
        selected,
    }
}

/// Render bundles for every area, in draw order.
pub fn scene_geometry(
    store: &AreaStore,
    viewport: &Viewport,
    selection: &SelectionManager,
) -> Vec<AreaGeometry> {
    store
        .iter()
        .map(|area| area_geometry(area, viewport, selection.is_selected(area.id())))
        .collect()
}

/// Pixel rectangle of the workspace bounds.
pub fn workspace_outline(viewport: &Viewport) -> WorkspaceOutline {
    let b = viewport.bounds();
    WorkspaceOutline {
        top_left_px: viewport.mm_to_px(b.min_x, b.max_y),
        bottom_right_px: viewport.mm_to_px(b.max_x, b.min_y),
    }
}
