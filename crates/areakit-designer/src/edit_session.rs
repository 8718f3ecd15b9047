//! Pointer-driven dragging and menu-driven repositioning of areas.
//!
//! The drag gesture is an explicit `Idle -> Dragging -> Idle` state machine.
//! Every drag update recomputes the area from the vertices captured when the
//! gesture began, so intermediate updates never accumulate error. Ending a
//! gesture keeps the last applied position.

use std::fmt;

use areakit_core::AreaError;

use crate::area_store::AreaStore;
use crate::area_text::parse_point;
use crate::geometry::{find_interior_point, snap_value};
use crate::model::{AreaId, Bounds, Point};
use crate::selection_manager::SelectionManager;
use crate::viewport::Viewport;

/// Grid snapping applied to move deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapSettings {
    pub enabled: bool,
    pub step_mm: f64,
}

impl SnapSettings {
    pub fn new(enabled: bool, step_mm: f64) -> Self {
        Self { enabled, step_mm }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// Snaps both components of a delta when enabled.
    pub fn apply(&self, dx: f64, dy: f64) -> (f64, f64) {
        if self.enabled {
            (snap_value(dx, self.step_mm), snap_value(dy, self.step_mm))
        } else {
            (dx, dy)
        }
    }
}

/// An in-progress drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    pub target: AreaId,
    pub pointer_start_px: (f64, f64),
    pub snapshot: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragGesture),
}

impl fmt::Display for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragState::Idle => write!(f, "Idle"),
            DragState::Dragging(_) => write!(f, "Dragging"),
        }
    }
}

/// Outcome of a menu edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuEditOutcome {
    /// Summary point before the edit (mm).
    pub previous_summary: Point,
    /// Delta applied before clamping (mm).
    pub delta: (f64, f64),
}

/// Drag state plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: DragState,
    selection: SelectionManager,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Area targeted by the active gesture.
    pub fn drag_target(&self) -> Option<AreaId> {
        match &self.state {
            DragState::Dragging(gesture) => Some(gesture.target),
            DragState::Idle => None,
        }
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn selected_id(&self) -> Option<AreaId> {
        self.selection.selected_id()
    }

    /// Selects an area (or clears with `None`) without starting a drag.
    pub fn select(&mut self, id: Option<AreaId>) {
        self.selection.set_selected_id(id);
    }

    /// Selects the topmost area under `point_mm` and returns it.
    pub fn select_at(&mut self, store: &AreaStore, point_mm: &Point) -> Option<AreaId> {
        self.selection.select_at(store, point_mm)
    }

    /// Clears a selection or gesture whose area left the store.
    pub fn prune(&mut self, store: &AreaStore) {
        self.selection.prune(store);
        if let Some(target) = self.drag_target() {
            if !store.contains(target) {
                self.state = DragState::Idle;
            }
        }
    }

    /// Starts dragging `id` from `pointer_px`. Only valid while idle.
    pub fn begin_drag(
        &mut self,
        store: &AreaStore,
        id: AreaId,
        pointer_px: (f64, f64),
    ) -> Result<(), AreaError> {
        if self.is_dragging() {
            return Err(AreaError::InvalidStateTransition {
                current: self.state.to_string(),
                requested: "begin_drag".to_string(),
            });
        }
        let area = store.get(id).ok_or_else(|| AreaError::not_found(id))?;

        self.state = DragState::Dragging(DragGesture {
            target: id,
            pointer_start_px: pointer_px,
            snapshot: area.points().to_vec(),
        });
        self.selection.set_selected_id(Some(id));
        tracing::debug!(%id, x = pointer_px.0, y = pointer_px.1, "Drag started");
        Ok(())
    }

    /// Moves the dragged area so it sits at its start position plus the
    /// pointer travel since [`EditSession::begin_drag`].
    ///
    /// Returns the mm delta applied before clamping.
    pub fn update_drag(
        &mut self,
        store: &mut AreaStore,
        viewport: &Viewport,
        pointer_px: (f64, f64),
        snap: SnapSettings,
    ) -> Result<(f64, f64), AreaError> {
        let DragState::Dragging(gesture) = &self.state else {
            return Err(AreaError::InvalidStateTransition {
                current: self.state.to_string(),
                requested: "update_drag".to_string(),
            });
        };

        let (start_x, start_y) = gesture.pointer_start_px;
        let (dx_mm, dy_mm) =
            viewport.px_delta_to_mm_delta(pointer_px.0 - start_x, pointer_px.1 - start_y);
        let (dx, dy) = snap.apply(dx_mm, dy_mm);

        store.translate_from(gesture.target, &gesture.snapshot, dx, dy, &viewport.bounds())?;
        Ok((dx, dy))
    }

    /// Whether the dragged area left the position captured at drag start.
    ///
    /// `false` while idle or when the target is gone.
    pub fn drag_moved(&self, store: &AreaStore) -> bool {
        match &self.state {
            DragState::Dragging(gesture) => store
                .get(gesture.target)
                .is_some_and(|area| area.points() != gesture.snapshot.as_slice()),
            DragState::Idle => false,
        }
    }

    /// Ends the gesture. Safe to call while idle.
    pub fn end_drag(&mut self) {
        if let DragState::Dragging(gesture) = &self.state {
            tracing::debug!(id = %gesture.target, "Drag ended");
        }
        self.state = DragState::Idle;
    }

    /// Moves an area so its summary point lands on the coordinates typed in
    /// `new_xy_text`, and relabels it.
    ///
    /// The delta is computed from the live vertices' interior point, snapped
    /// when `snap_enabled`, then applied with clamping. Nothing changes when
    /// the coordinate text does not parse.
    #[allow(clippy::too_many_arguments)]
    pub fn apply_menu_edit(
        &mut self,
        store: &mut AreaStore,
        id: AreaId,
        new_label: &str,
        new_xy_text: &str,
        snap_enabled: bool,
        grid_step: f64,
        bounds: &Bounds,
    ) -> Result<MenuEditOutcome, AreaError> {
        let target = parse_point(new_xy_text)?;
        let area = store.get(id).ok_or_else(|| AreaError::not_found(id))?;

        let summary = find_interior_point(area.points());
        let delta = SnapSettings::new(snap_enabled, grid_step)
            .apply(target.x - summary.x, target.y - summary.y);

        store.translate(id, delta.0, delta.1, bounds)?;
        store.set_label(id, new_label)?;
        self.selection.set_selected_id(Some(id));

        tracing::debug!(%id, dx = delta.0, dy = delta.1, "Applied menu edit");
        Ok(MenuEditOutcome {
            previous_summary: summary,
            delta,
        })
    }
}
