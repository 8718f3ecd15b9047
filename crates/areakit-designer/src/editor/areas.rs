//! Single-point area creation, deletion and the per-area context menu.

use areakit_core::AreaError;

use super::AreaEditor;
use crate::area_text::{parse_dimension, parse_point};
use crate::edit_session::MenuEditOutcome;
use crate::geometry::{find_interior_point, rectangle_from_center};
use crate::model::{Area, AreaId};

/// Contents of the context menu opened on an area.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuModel {
    pub id: AreaId,
    pub label: String,
    /// Rounded summary point, formatted as `(x,y)`.
    pub summary_text: String,
}

/// Text fields of the single-point creation form.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationForm {
    pub label: String,
    pub xy_text: String,
    pub width_text: String,
    pub height_text: String,
}

impl AreaEditor {
    /// Creation form prefilled from the configured area defaults, centered
    /// on the workspace origin.
    pub fn creation_form(&self) -> CreationForm {
        let view = self.viewport.config();
        CreationForm {
            label: self.defaults.default_label.clone(),
            xy_text: format!("({},{})", view.origin_x_mm, view.origin_y_mm),
            width_text: self.defaults.default_width_mm.to_string(),
            height_text: self.defaults.default_height_mm.to_string(),
        }
    }

    /// Submits the creation form. Width and height must parse as positive
    /// numbers.
    pub fn submit_creation_form(&mut self, form: &CreationForm) -> Result<AreaId, AreaError> {
        let width = parse_dimension("width", &form.width_text)?;
        let height = parse_dimension("height", &form.height_text)?;
        self.create_area(&form.label, &form.xy_text, Some(width), Some(height))
    }

    /// Creates a `width` x `height` rectangle centered on the point typed in
    /// `xy_text` and selects it.
    ///
    /// Dimensions are required and must be positive. A blank label takes the
    /// configured default. Vertices that fall outside the workspace are
    /// clamped into it.
    pub fn create_area(
        &mut self,
        label: &str,
        xy_text: &str,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<AreaId, AreaError> {
        let width = positive_dimension("width", width)?;
        let height = positive_dimension("height", height)?;
        let center = parse_point(xy_text)?;

        let bounds = self.bounds();
        let points = rectangle_from_center(center.x, center.y, width, height)
            .into_iter()
            .map(|p| bounds.clamp(p))
            .collect();

        let label = if label.trim().is_empty() {
            self.defaults.default_label.clone()
        } else {
            label.to_string()
        };
        let id = self.store.add_single(&label, points)?;
        self.session.select(Some(id));
        self.sync_document();

        tracing::info!(%id, x = center.x, y = center.y, width, height, "Created area");
        Ok(id)
    }

    /// Deletes an area and drops it from the selection.
    pub fn delete_area(&mut self, id: AreaId) -> Result<Area, AreaError> {
        let removed = self.store.delete(id)?;
        self.session.prune(&self.store);
        self.sync_document();
        tracing::info!(%id, "Deleted area");
        Ok(removed)
    }

    /// Opens the context menu on an area: selects it and returns its current
    /// label and summary point.
    pub fn context_menu(&mut self, id: AreaId) -> Result<MenuModel, AreaError> {
        let area = self.store.get(id).ok_or_else(|| AreaError::not_found(id))?;
        let (x, y) = find_interior_point(area.points()).rounded();
        let menu = MenuModel {
            id,
            label: area.label().to_string(),
            summary_text: format!("({},{})", x, y),
        };
        self.session.select(Some(id));
        Ok(menu)
    }

    /// Applies a context menu submission: relabels the area and moves its
    /// summary point to the typed coordinates.
    pub fn apply_menu_edit(
        &mut self,
        id: AreaId,
        label: &str,
        xy_text: &str,
    ) -> Result<MenuEditOutcome, AreaError> {
        let bounds = self.bounds();
        let outcome = self.session.apply_menu_edit(
            &mut self.store,
            id,
            label,
            xy_text,
            self.grid.snap_enabled,
            self.grid.step_mm,
            &bounds,
        )?;
        self.sync_document();
        Ok(outcome)
    }
}

fn positive_dimension(name: &str, value: Option<f64>) -> Result<f64, AreaError> {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| AreaError::invalid_dimension(name))
}
