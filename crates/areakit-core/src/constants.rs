//! Engine-wide constants.

/// Maximum number of displayable characters kept from an area label.
pub const MAX_LABEL_CHARS: usize = 5;

/// Label used when an area label is empty after trimming.
pub const DEFAULT_AREA_LABEL: &str = "AREA";

/// Minimum number of vertices for an area polygon.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Signed areas below this magnitude are treated as degenerate.
pub const CENTROID_EPSILON: f64 = 1e-9;

/// Distance between candidate points of the interior-point grid search (mm).
pub const INTERIOR_SEARCH_STEP_MM: f64 = 10.0;

/// Largest ring radius, in search steps, visited by the interior-point search.
pub const INTERIOR_SEARCH_MAX_RADIUS: i32 = 20;

/// Number of per-line messages surfaced for a failed document.
pub const MAX_SURFACED_ERRORS: usize = 4;

/// Lowest zoom multiplier; the fitted workspace is never shrunk further.
pub const MIN_ZOOM: f64 = 1.0;

/// Default upper bound for the zoom multiplier.
pub const DEFAULT_MAX_ZOOM: f64 = 50.0;

/// Default multiplicative zoom step.
pub const DEFAULT_ZOOM_STEP: f64 = 1.25;

/// Cap on generated grid lines per axis so a tiny step cannot flood the renderer.
pub const MAX_GRID_LINES: usize = 2_000;
