use crate::area_store::AreaStore;
use crate::geometry::point_in_polygon;
use crate::model::{AreaId, Point};

/// Tracks the single selected area.
///
/// Selection is independent of dragging: it changes on pointer-down, on area
/// creation and on context-menu invocation, whether or not a drag follows.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The ID of the selected area, if any
    selected_id: Option<AreaId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use areakit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected area.
    pub fn selected_id(&self) -> Option<AreaId> {
        self.selected_id
    }

    /// Sets the selected area ID, or `None` to clear.
    pub fn set_selected_id(&mut self, id: Option<AreaId>) {
        self.selected_id = id;
    }

    pub fn is_selected(&self, id: AreaId) -> bool {
        self.selected_id == Some(id)
    }

    /// Drops the selection when it points at an area no longer in the store.
    pub fn prune(&mut self, store: &AreaStore) {
        if let Some(id) = self.selected_id {
            if !store.contains(id) {
                self.selected_id = None;
            }
        }
    }

    /// Selects the topmost area containing `point` (mm).
    ///
    /// Clicking empty space clears the selection.
    ///
    /// # Returns
    ///
    /// The ID of the newly selected area, or `None` if no area was hit.
    pub fn select_at(&mut self, store: &AreaStore, point: &Point) -> Option<AreaId> {
        let hit = hit_test(store, point);
        self.selected_id = hit;
        hit
    }
}

/// Returns the topmost (last drawn) area whose polygon contains `point` (mm).
pub fn hit_test(store: &AreaStore, point: &Point) -> Option<AreaId> {
    store
        .iter()
        .rev()
        .find(|area| point_in_polygon(point, area.points()))
        .map(|area| area.id())
}
