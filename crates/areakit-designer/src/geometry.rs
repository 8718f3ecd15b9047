//! Polygon geometry for area summaries and hit testing.
//!
//! Polygons are plain vertex slices in mm space. Insertion order defines the
//! edges, with an implicit closing edge from the last vertex back to the first.

use areakit_core::constants::{
    CENTROID_EPSILON, INTERIOR_SEARCH_MAX_RADIUS, INTERIOR_SEARCH_STEP_MM,
};

use crate::model::Point;

/// Iterates the `n` edges of an `n`-vertex polygon.
///
/// Edge `i` runs from vertex `i` to vertex `i + 1`; the last edge closes the
/// polygon from the last vertex back to the first.
pub fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[i], polygon[(i + 1) % n]))
}

/// Crossing-number containment test with a ray cast towards +X.
///
/// Points exactly on an edge get whatever the floating-point crossing test
/// yields; only strictly interior or exterior points have a defined answer.
pub fn point_in_polygon(point: &Point, polygon: &[Point]) -> bool {
    let mut inside = false;
    for (a, b) in edges(polygon) {
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Arithmetic mean of the vertices. The origin for an empty polygon.
pub fn vertex_mean(polygon: &[Point]) -> Point {
    if polygon.is_empty() {
        return Point::default();
    }
    let n = polygon.len() as f64;
    let (sx, sy) = polygon
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Signed shoelace area. Positive for counter-clockwise winding in Y-up space.
pub fn signed_area(polygon: &[Point]) -> f64 {
    edges(polygon)
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
        * 0.5
}

/// Area-weighted centroid.
///
/// Degenerate polygons (collinear or coincident vertices) fall back to the
/// vertex mean.
pub fn centroid(polygon: &[Point]) -> Point {
    let mut a = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (p0, p1) in edges(polygon) {
        let cross = p0.x * p1.y - p1.x * p0.y;
        a += cross;
        cx += (p0.x + p1.x) * cross;
        cy += (p0.y + p1.y) * cross;
    }
    a *= 0.5;

    if a.abs() < CENTROID_EPSILON {
        return vertex_mean(polygon);
    }
    Point::new(cx / (6.0 * a), cy / (6.0 * a))
}

/// Best-effort point inside the polygon, used as its summary location.
///
/// Tries the centroid, then the vertex mean, then grid searches around the
/// centroid over the full `[-r, r]` square of 10 mm steps, for r = 1..=20. When all of those miss,
/// the first vertex is returned even though it lies on the boundary; callers
/// must tolerate a non-interior result.
pub fn find_interior_point(polygon: &[Point]) -> Point {
    let c = centroid(polygon);
    if point_in_polygon(&c, polygon) {
        return c;
    }

    let mean = vertex_mean(polygon);
    if point_in_polygon(&mean, polygon) {
        return mean;
    }

    for r in 1..=INTERIOR_SEARCH_MAX_RADIUS {
        for dx in -r..=r {
            for dy in -r..=r {
                let candidate = c.translated(
                    INTERIOR_SEARCH_STEP_MM * f64::from(dx),
                    INTERIOR_SEARCH_STEP_MM * f64::from(dy),
                );
                if point_in_polygon(&candidate, polygon) {
                    return candidate;
                }
            }
        }
    }

    tracing::debug!(
        vertices = polygon.len(),
        "No interior point found, falling back to first vertex"
    );
    polygon.first().copied().unwrap_or(c)
}

/// Axis-aligned rectangle centered on `(cx, cy)`.
///
/// Vertices are bottom-left, top-left, top-right, bottom-right.
pub fn rectangle_from_center(cx: f64, cy: f64, width: f64, height: f64) -> Vec<Point> {
    let hw = width / 2.0;
    let hh = height / 2.0;
    vec![
        Point::new(cx - hw, cy - hh),
        Point::new(cx - hw, cy + hh),
        Point::new(cx + hw, cy + hh),
        Point::new(cx + hw, cy - hh),
    ]
}

/// Rounds `value` to the nearest multiple of `step`. No-op when `step <= 0`.
pub fn snap_value(value: f64, step: f64) -> f64 {
    if step > 0.0 && step.is_finite() {
        (value / step).round() * step
    } else {
        value
    }
}
