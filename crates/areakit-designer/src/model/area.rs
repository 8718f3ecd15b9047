use std::fmt;

use areakit_core::constants::{DEFAULT_AREA_LABEL, MAX_LABEL_CHARS};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Point;

/// Opaque unique identity of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaId(Uuid);

impl AreaId {
    /// Generates a fresh id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AreaId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an area entered the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Created through the single-point creation form.
    Single,
    /// Created by applying a full area description.
    Batch,
}

/// Trims a label, keeps its first five characters, and substitutes the
/// default label when nothing is left.
pub fn normalize_label(label: &str) -> String {
    let truncated: String = label.trim().chars().take(MAX_LABEL_CHARS).collect();
    if truncated.is_empty() {
        DEFAULT_AREA_LABEL.to_string()
    } else {
        truncated
    }
}

/// A labeled polygon with a stable identity.
///
/// Areas are immutable values: edits produce a new `Area` with the same id,
/// which the store swaps in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    id: AreaId,
    label: String,
    points: Vec<Point>,
    provenance: Provenance,
}

impl Area {
    /// Creates an area with a fresh id. The label is normalized.
    pub fn new(label: &str, points: Vec<Point>, provenance: Provenance) -> Self {
        Self {
            id: AreaId::new(),
            label: normalize_label(label),
            points,
            provenance,
        }
    }

    pub fn id(&self) -> AreaId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Same area with a replaced vertex list.
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        Self {
            points,
            ..self.clone()
        }
    }

    /// Same area with a replaced (normalized) label.
    pub fn with_label(&self, label: &str) -> Self {
        Self {
            label: normalize_label(label),
            ..self.clone()
        }
    }

    pub(crate) fn with_provenance(self, provenance: Provenance) -> Self {
        Self { provenance, ..self }
    }
}
