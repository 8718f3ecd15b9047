//! AreaKit Settings Crate
//!
//! Handles workspace, view, grid and area-creation configuration, with
//! validation and JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{AreaSettings, Config, GridSettings, ViewSettings, WorkspaceSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
