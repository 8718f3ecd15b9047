//! Configuration and settings management for AreaKit
//!
//! Provides configuration file handling, defaults and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Workspace geometry (physical size and origin, in millimeters)
//! - View preferences (viewport size, zoom limits, surface padding)
//! - Grid preferences (step, snapping, visibility)
//! - Area creation defaults

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use areakit_core::constants::{DEFAULT_AREA_LABEL, DEFAULT_MAX_ZOOM, DEFAULT_ZOOM_STEP, MIN_ZOOM};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Physical workspace settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    /// Workspace width in millimeters
    pub width_mm: f64,
    /// Workspace height in millimeters
    pub height_mm: f64,
    /// X coordinate of the workspace center (mm)
    pub origin_x_mm: f64,
    /// Y coordinate of the workspace center (mm)
    pub origin_y_mm: f64,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            width_mm: 2000.0,
            height_mm: 1500.0,
            origin_x_mm: 0.0,
            origin_y_mm: 0.0,
        }
    }
}

/// View preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Visible viewport width in pixels
    pub viewport_width_px: f64,
    /// Visible viewport height in pixels
    pub viewport_height_px: f64,
    /// Initial zoom multiplier
    pub zoom: f64,
    /// Multiplier applied by one zoom in/out step
    pub zoom_step: f64,
    /// Largest zoom multiplier
    pub max_zoom: f64,
    /// Empty margin around the workspace on the scrollable surface
    pub surface_padding_px: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            viewport_width_px: 1000.0,
            viewport_height_px: 700.0,
            zoom: MIN_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            max_zoom: DEFAULT_MAX_ZOOM,
            surface_padding_px: 0.0,
        }
    }
}

/// Grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Grid step in millimeters (0 disables grid lines and snapping)
    pub step_mm: f64,
    /// Snap drag and menu moves to the grid step
    pub snap_enabled: bool,
    /// Draw the reference grid
    pub show_grid: bool,
    /// Draw the origin axes
    pub show_axes: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            step_mm: 100.0,
            snap_enabled: false,
            show_grid: true,
            show_axes: true,
        }
    }
}

/// Defaults for the single-point creation form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaSettings {
    /// Label suggested for new areas
    pub default_label: String,
    /// Width suggested for new areas (mm)
    pub default_width_mm: f64,
    /// Height suggested for new areas (mm)
    pub default_height_mm: f64,
}

impl Default for AreaSettings {
    fn default() -> Self {
        Self {
            default_label: DEFAULT_AREA_LABEL.to_string(),
            default_width_mm: 100.0,
            default_height_mm: 100.0,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Workspace geometry
    pub workspace: WorkspaceSettings,
    /// View preferences
    pub view: ViewSettings,
    /// Grid preferences
    pub grid: GridSettings,
    /// Area creation defaults
    pub areas: AreaSettings,
}

fn positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

fn finite(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config path, e.g. `~/.config/areakit/config.toml`
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("areakit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        // Workspace must have a positive extent for the bounds invariant
        positive("workspace.width_mm", self.workspace.width_mm)?;
        positive("workspace.height_mm", self.workspace.height_mm)?;
        finite("workspace.origin_x_mm", self.workspace.origin_x_mm)?;
        finite("workspace.origin_y_mm", self.workspace.origin_y_mm)?;

        positive("view.viewport_width_px", self.view.viewport_width_px)?;
        positive("view.viewport_height_px", self.view.viewport_height_px)?;
        if !(self.view.max_zoom.is_finite() && self.view.max_zoom >= MIN_ZOOM) {
            return Err(ConfigError::out_of_range("view.max_zoom", self.view.max_zoom));
        }
        if !(self.view.zoom >= MIN_ZOOM && self.view.zoom <= self.view.max_zoom) {
            return Err(ConfigError::out_of_range("view.zoom", self.view.zoom));
        }
        if !(self.view.zoom_step.is_finite() && self.view.zoom_step > 1.0) {
            return Err(ConfigError::out_of_range("view.zoom_step", self.view.zoom_step));
        }
        if !(self.view.surface_padding_px.is_finite() && self.view.surface_padding_px >= 0.0) {
            return Err(ConfigError::out_of_range(
                "view.surface_padding_px",
                self.view.surface_padding_px,
            ));
        }

        if !(self.grid.step_mm.is_finite() && self.grid.step_mm >= 0.0) {
            return Err(ConfigError::out_of_range("grid.step_mm", self.grid.step_mm));
        }

        positive("areas.default_width_mm", self.areas.default_width_mm)?;
        positive("areas.default_height_mm", self.areas.default_height_mm)?;

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
