//! Reference grid, origin axes and coordinate labels.
//!
//! Everything here is derived from the visible mm rectangle of a [`Viewport`]:
//! grid lines and labels exist only for step-aligned values inside it.

use areakit_core::constants::MAX_GRID_LINES;

use crate::model::Bounds;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A grid line at a step-aligned mm value.
///
/// `Axis::X` lines are vertical (constant x), `Axis::Y` lines horizontal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub axis: Axis,
    pub value_mm: f64,
    /// Pixel x of a vertical line, or pixel y of a horizontal one.
    pub position_px: f64,
}

/// Coordinate label placed along the bottom (x values) or left (y values)
/// edge of the visible rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub axis: Axis,
    pub value_mm: f64,
    pub text: String,
    pub position_px: (f64, f64),
}

/// Pixel positions of the origin axes, when visible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisLines {
    /// Pixel y of the horizontal axis (mm y = 0).
    pub horizontal_px: Option<f64>,
    /// Pixel x of the vertical axis (mm x = 0).
    pub vertical_px: Option<f64>,
}

/// Multiples of `step` within `[min, max]`, ascending.
///
/// Empty for a non-positive step; capped at [`MAX_GRID_LINES`] values.
pub fn step_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0 && step.is_finite() && min.is_finite() && max.is_finite()) || min > max {
        return Vec::new();
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .take(MAX_GRID_LINES)
        .map(|k| k as f64 * step)
        .collect()
}

/// Visible part of the workspace: the visible rectangle cut to workspace bounds.
///
/// `None` when the workspace is scrolled or panned entirely out of view.
pub fn visible_workspace(viewport: &Viewport) -> Option<Bounds> {
    let visible = viewport.visible_mm_rect();
    let ws = viewport.bounds();
    let clipped = Bounds::new(
        visible.min_x.max(ws.min_x),
        visible.min_y.max(ws.min_y),
        visible.max_x.min(ws.max_x),
        visible.max_y.min(ws.max_y),
    );
    (clipped.min_x <= clipped.max_x && clipped.min_y <= clipped.max_y).then_some(clipped)
}

/// Grid lines for the visible part of the workspace.
pub fn grid_lines(viewport: &Viewport, step_mm: f64) -> Vec<GridLine> {
    let Some(rect) = visible_workspace(viewport) else {
        return Vec::new();
    };

    let vertical = step_values(rect.min_x, rect.max_x, step_mm)
        .into_iter()
        .map(|x| GridLine {
            axis: Axis::X,
            value_mm: x,
            position_px: viewport.mm_to_px(x, 0.0).0,
        });
    let horizontal = step_values(rect.min_y, rect.max_y, step_mm)
        .into_iter()
        .map(|y| GridLine {
            axis: Axis::Y,
            value_mm: y,
            position_px: viewport.mm_to_px(0.0, y).1,
        });
    vertical.chain(horizontal).collect()
}

/// Origin axes inside the visible part of the workspace.
pub fn axis_lines(viewport: &Viewport) -> AxisLines {
    let Some(rect) = visible_workspace(viewport) else {
        return AxisLines::default();
    };
    let (origin_x_px, origin_y_px) = viewport.mm_to_px(0.0, 0.0);
    AxisLines {
        horizontal_px: (rect.min_y..=rect.max_y).contains(&0.0).then_some(origin_y_px),
        vertical_px: (rect.min_x..=rect.max_x).contains(&0.0).then_some(origin_x_px),
    }
}

/// Coordinate labels for the step-aligned values of the visible rectangle.
///
/// X values sit on the bottom edge, Y values on the left edge. Regenerate
/// whenever scroll, pan or zoom change.
pub fn axis_labels(viewport: &Viewport, step_mm: f64) -> Vec<AxisLabel> {
    let visible = viewport.visible_mm_rect();

    let bottom = step_values(visible.min_x, visible.max_x, step_mm)
        .into_iter()
        .map(|x| AxisLabel {
            axis: Axis::X,
            value_mm: x,
            text: format_mm(x),
            position_px: viewport.mm_to_px(x, visible.min_y),
        });
    let left = step_values(visible.min_y, visible.max_y, step_mm)
        .into_iter()
        .map(|y| AxisLabel {
            axis: Axis::Y,
            value_mm: y,
            text: format_mm(y),
            position_px: viewport.mm_to_px(visible.min_x, y),
        });
    bottom.chain(left).collect()
}

fn format_mm(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", value)
    }
}
