use serde::{Deserialize, Serialize};

mod area;

pub use area::{normalize_label, Area, AreaId, Provenance};

/// A point in workspace (mm) space, Y up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the coordinates rounded to whole millimeters.
    pub fn rounded(&self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

/// Axis-aligned rectangle in mm space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds of a workspace of the given size centered on `(origin_x, origin_y)`.
    pub fn from_workspace(width: f64, height: f64, origin_x: f64, origin_y: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self::new(
            origin_x - half_w,
            origin_y - half_h,
            origin_x + half_w,
            origin_y + half_h,
        )
    }

    /// Smallest bounds containing every point, or `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        Some(points.iter().skip(1).fold(
            Self::new(first.x, first.y, first.x, first.y),
            |b, p| Self::new(b.min_x.min(p.x), b.min_y.min(p.y), b.max_x.max(p.x), b.max_y.max(p.y)),
        ))
    }

    /// Clamps each coordinate of `p` into the bounds independently.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }
}
