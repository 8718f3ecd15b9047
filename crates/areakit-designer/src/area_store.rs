//! Authoritative collection of areas.
//!
//! Every mutation builds a new area list and swaps it in, so a snapshot taken
//! with [`AreaStore::snapshot`] keeps its contents for as long as it is held.

use std::sync::Arc;

use areakit_core::constants::MIN_POLYGON_POINTS;
use areakit_core::AreaError;

use crate::area_text::format_document;
use crate::model::{Area, AreaId, Bounds, Point, Provenance};

/// Ordered area list. Later areas draw on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct AreaStore {
    areas: Arc<Vec<Area>>,
}

impl AreaStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current area list without copying it.
    pub fn snapshot(&self) -> Arc<Vec<Area>> {
        Arc::clone(&self.areas)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Area> {
        self.areas.iter()
    }

    /// Areas in draw order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn get(&self, id: AreaId) -> Option<&Area> {
        self.areas.iter().find(|a| a.id() == id)
    }

    pub fn contains(&self, id: AreaId) -> bool {
        self.get(id).is_some()
    }

    /// Adds an area from the single-point creation flow.
    pub fn add_single(&mut self, label: &str, points: Vec<Point>) -> Result<AreaId, AreaError> {
        if points.len() < MIN_POLYGON_POINTS {
            return Err(AreaError::InsufficientPoints {
                found: points.len(),
                required: MIN_POLYGON_POINTS,
            });
        }
        let area = Area::new(label, points, Provenance::Single);
        let id = area.id();

        let mut next = Vec::with_capacity(self.areas.len() + 1);
        next.extend(self.areas.iter().cloned());
        next.push(area);
        self.areas = Arc::new(next);

        tracing::debug!(%id, "Added area");
        Ok(id)
    }

    /// Replaces the whole collection with the given areas, marked as batch.
    pub fn replace_all(&mut self, areas: Vec<Area>) {
        let next: Vec<Area> = areas
            .into_iter()
            .map(|a| a.with_provenance(Provenance::Batch))
            .collect();
        tracing::debug!(count = next.len(), "Replaced all areas");
        self.areas = Arc::new(next);
    }

    /// Removes an area and returns it.
    pub fn delete(&mut self, id: AreaId) -> Result<Area, AreaError> {
        let removed = self.get(id).cloned().ok_or_else(|| AreaError::not_found(id))?;
        let next: Vec<Area> = self.areas.iter().filter(|a| a.id() != id).cloned().collect();
        self.areas = Arc::new(next);
        Ok(removed)
    }

    /// Moves an area's live vertices by `(dx, dy)` and clamps them into `bounds`.
    pub fn translate(
        &mut self,
        id: AreaId,
        dx: f64,
        dy: f64,
        bounds: &Bounds,
    ) -> Result<(), AreaError> {
        let base = self
            .get(id)
            .map(|a| a.points().to_vec())
            .ok_or_else(|| AreaError::not_found(id))?;
        self.translate_from(id, &base, dx, dy, bounds)
    }

    /// Sets an area's vertices to `base` moved by `(dx, dy)`, clamped into
    /// `bounds`.
    ///
    /// Each vertex is clamped on its own, per axis, so a polygon pushed partly
    /// past an edge is squashed against it rather than stopped as a whole.
    pub fn translate_from(
        &mut self,
        id: AreaId,
        base: &[Point],
        dx: f64,
        dy: f64,
        bounds: &Bounds,
    ) -> Result<(), AreaError> {
        let moved: Vec<Point> = base
            .iter()
            .map(|p| bounds.clamp(p.translated(dx, dy)))
            .collect();
        self.replace_area(id, |area| area.with_points(moved))
    }

    /// Sets an area's label (trimmed, truncated, defaulted).
    pub fn set_label(&mut self, id: AreaId, label: &str) -> Result<(), AreaError> {
        self.replace_area(id, |area| area.with_label(label))
    }

    /// Serializes the store as an area description.
    pub fn to_document(&self) -> String {
        format_document(&self.areas)
    }

    fn replace_area(
        &mut self,
        id: AreaId,
        edit: impl FnOnce(&Area) -> Area,
    ) -> Result<(), AreaError> {
        let index = self
            .areas
            .iter()
            .position(|a| a.id() == id)
            .ok_or_else(|| AreaError::not_found(id))?;

        let mut next: Vec<Area> = self.areas.as_ref().clone();
        next[index] = edit(&self.areas[index]);
        self.areas = Arc::new(next);
        Ok(())
    }
}
