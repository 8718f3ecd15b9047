//! # AreaKit Designer
//!
//! Interactive editing engine for labeled polygonal areas on a bounded
//! millimeter workspace shown on a zoomable, scrollable pixel surface.
//!
//! ## Core Components
//!
//! - **Viewport**: bidirectional mm <-> px mapping under zoom, pan and scroll
//! - **Geometry**: containment, centroid and interior-point search for
//!   possibly concave or degenerate polygons
//! - **Area text**: parser and formatter for the one-area-per-line description
//!   language
//! - **Area store**: ordered, snapshot-friendly area collection with bounds
//!   clamping
//! - **Edit session**: drag state machine and menu-driven repositioning
//! - **Grid / Renderer**: pixel-space bundles for the drawing layer
//!
//! ## Architecture
//!
//! ```text
//! AreaEditor (UI events in, render bundles out)
//!   ├── Viewport (mm <-> px)
//!   ├── AreaStore (areas, clamping)
//!   │     └── AreaText (parse / format)
//!   ├── EditSession (drag, menu edits)
//!   │     └── SelectionManager
//!   └── Renderer / Grid (pixel geometry)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use areakit_designer::{AreaEditor, ViewConfig};
//!
//! let mut editor = AreaEditor::new(ViewConfig::new(200.0, 100.0, 400.0, 200.0))?;
//! editor.set_document_text("Robot,(10,10),(50,10),(50,50),(10,50)");
//! editor.apply_document()?;
//!
//! for bundle in editor.geometry() {
//!     println!("{} at {:?}", bundle.label, bundle.interior_px);
//! }
//! ```

pub mod area_store;
pub mod area_text;
pub mod edit_session;
pub mod editor;
pub mod geometry;
pub mod grid;
pub mod model;
pub mod renderer;
pub mod selection_manager;
pub mod viewport;

pub use area_store::AreaStore;
pub use area_text::{
    format_area_line, format_document, parse_area_line, parse_dimension, parse_document,
    parse_point, ParsedArea, ParsedDocument,
};
pub use edit_session::{DragGesture, DragState, EditSession, MenuEditOutcome, SnapSettings};
pub use geometry::{
    centroid, find_interior_point, point_in_polygon, rectangle_from_center, snap_value,
};
pub use grid::{Axis, AxisLabel, AxisLines, GridLine};
pub use model::{normalize_label, Area, AreaId, Bounds, Point, Provenance};
pub use renderer::{AreaGeometry, WorkspaceOutline};
pub use selection_manager::{hit_test, SelectionManager};
pub use viewport::{ViewConfig, Viewport};

// Editor facade
pub use editor::{AreaEditor, CreationForm, DocumentReport, GridOptions, MenuModel};
