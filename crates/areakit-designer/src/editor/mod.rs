//! Editor state for UI integration.
//! Owns the viewport, the area store and the edit session, and turns raw UI
//! events (pointer, scroll, text edits, menu submissions) into engine calls.
//!
//! This module is split into submodules:
//! - `document`: area description text, apply and error state
//! - `areas`: single-point creation, deletion and the context menu

mod areas;
mod document;

pub use areas::{CreationForm, MenuModel};
pub use document::DocumentReport;

use areakit_core::AreaError;
use areakit_settings::{AreaSettings, Config};

use crate::area_store::AreaStore;
use crate::edit_session::{EditSession, SnapSettings};
use crate::grid::{self, AxisLabel, AxisLines, GridLine};
use crate::model::{AreaId, Bounds};
use crate::renderer::{self, AreaGeometry, WorkspaceOutline};
use crate::selection_manager::hit_test;
use crate::viewport::{ViewConfig, Viewport};

/// Grid display and snapping options.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    pub step_mm: f64,
    pub snap_enabled: bool,
    pub show_grid: bool,
    pub show_axes: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            step_mm: 100.0,
            snap_enabled: false,
            show_grid: true,
            show_axes: true,
        }
    }
}

/// Editor state for UI integration
#[derive(Debug, Clone)]
pub struct AreaEditor {
    pub viewport: Viewport,
    pub store: AreaStore,
    pub session: EditSession,
    pub grid: GridOptions,
    pub defaults: AreaSettings,
    document_text: String,
    errors: Vec<String>,
}

impl AreaEditor {
    /// Creates an editor with an empty store.
    pub fn new(view: ViewConfig) -> Result<Self, AreaError> {
        Ok(Self {
            viewport: Viewport::new(view)?,
            store: AreaStore::new(),
            session: EditSession::new(),
            grid: GridOptions::default(),
            defaults: AreaSettings::default(),
            document_text: String::new(),
            errors: Vec::new(),
        })
    }

    /// Creates an editor from application settings.
    pub fn from_config(config: &Config) -> Result<Self, AreaError> {
        let mut editor = Self::new(ViewConfig::from_config(config))?;
        editor.viewport.set_zoom(config.view.zoom);
        editor.viewport.center_scroll();
        editor.grid = GridOptions {
            step_mm: config.grid.step_mm,
            snap_enabled: config.grid.snap_enabled,
            show_grid: config.grid.show_grid,
            show_axes: config.grid.show_axes,
        };
        editor.defaults = config.areas.clone();
        Ok(editor)
    }

    /// Workspace bounds every vertex is clamped into.
    pub fn bounds(&self) -> Bounds {
        self.viewport.bounds()
    }

    /// Active snapping for drag and menu moves.
    pub fn snap(&self) -> SnapSettings {
        SnapSettings::new(self.grid.snap_enabled, self.grid.step_mm)
    }

    pub fn selected_id(&self) -> Option<AreaId> {
        self.session.selected_id()
    }

    /// Selects an existing area.
    pub fn select(&mut self, id: AreaId) -> Result<(), AreaError> {
        if !self.store.contains(id) {
            return Err(AreaError::not_found(id));
        }
        self.session.select(Some(id));
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.session.select(None);
    }

    /// Topmost area under a surface pixel.
    pub fn hit_test(&self, pointer_px: (f64, f64)) -> Option<AreaId> {
        let point = self.viewport.px_to_mm(pointer_px.0, pointer_px.1);
        hit_test(&self.store, &point)
    }

    /// Pointer pressed at a surface pixel.
    ///
    /// Selects the topmost area under the pointer and starts dragging it.
    /// Pressing on empty space clears the selection.
    pub fn pointer_down(&mut self, pointer_px: (f64, f64)) -> Option<AreaId> {
        self.session.end_drag();
        let point = self.viewport.px_to_mm(pointer_px.0, pointer_px.1);
        let hit = self.session.select_at(&self.store, &point)?;

        if let Err(e) = self.session.begin_drag(&self.store, hit, pointer_px) {
            tracing::warn!("Could not start drag: {}", e);
        }
        Some(hit)
    }

    /// Pointer moved. Returns `true` when an area was dragged.
    pub fn pointer_move(&mut self, pointer_px: (f64, f64)) -> Result<bool, AreaError> {
        if !self.session.is_dragging() {
            return Ok(false);
        }
        let snap = self.snap();
        self.session
            .update_drag(&mut self.store, &self.viewport, pointer_px, snap)?;
        Ok(true)
    }

    /// Pointer released: ends the gesture.
    ///
    /// The description text is regenerated only when the gesture moved an
    /// area. A plain click keeps unapplied text and its errors.
    pub fn pointer_up(&mut self) {
        let moved = self.session.drag_moved(&self.store);
        self.session.end_drag();
        if moved {
            self.sync_document();
        }
    }

    /// Pointer left the surface or the gesture was cancelled.
    ///
    /// The area stays where the last update put it.
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    /// Scroll offset reported by the scroll container.
    pub fn set_scroll(&mut self, x: f64, y: f64) {
        self.viewport.set_scroll(x, y);
    }

    /// Render bundles for every area.
    pub fn geometry(&self) -> Vec<AreaGeometry> {
        renderer::scene_geometry(&self.store, &self.viewport, self.session.selection())
    }

    pub fn workspace_outline(&self) -> WorkspaceOutline {
        renderer::workspace_outline(&self.viewport)
    }

    /// Grid lines, empty when the grid is hidden.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        if self.grid.show_grid {
            grid::grid_lines(&self.viewport, self.grid.step_mm)
        } else {
            Vec::new()
        }
    }

    /// Origin axes, none when axes are hidden.
    pub fn axis_lines(&self) -> AxisLines {
        if self.grid.show_axes {
            grid::axis_lines(&self.viewport)
        } else {
            AxisLines::default()
        }
    }

    /// Coordinate labels along the bottom and left edges of the view.
    pub fn axis_labels(&self) -> Vec<AxisLabel> {
        grid::axis_labels(&self.viewport, self.grid.step_mm)
    }
}
