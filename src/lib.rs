//! # AreaKit
//!
//! Interactive 2D workspace editor engine. Maps a bounded millimeter workspace
//! onto a zoomable, scrollable pixel surface and edits labeled polygonal areas
//! on it:
//! - Bidirectional mm <-> px mapping under zoom, pan and scroll
//! - Polygon containment and robust interior-point discovery
//! - A line-oriented text format for describing areas
//! - Drag and menu editing with grid snapping and bounds clamping
//!
//! ## Architecture
//!
//! AreaKit is organized as a workspace with multiple crates:
//!
//! 1. **areakit-core** - Error types, constants
//! 2. **areakit-settings** - Configuration model and JSON/TOML persistence
//! 3. **areakit-designer** - Viewport, geometry, area text, store, edit session
//! 4. **areakit** - Headless driver binary that integrates all crates

pub use areakit_designer as designer;

pub use areakit_core::{AreaError, AreaErrorKind, DocumentError, Error, LineError, Result};

pub use areakit_settings::{
    AreaSettings, Config, ConfigError, GridSettings, SettingsError, ViewSettings,
    WorkspaceSettings,
};

pub use areakit_designer::{
    AreaEditor, AreaGeometry, AreaId, AreaStore, Bounds, EditSession, Point, ViewConfig, Viewport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable selecting the log output format (`pretty` or `json`).
pub const LOG_FORMAT_ENV: &str = "AREAKIT_LOG_FORMAT";

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout for the document
/// - RUST_LOG environment variable support
/// - Pretty formatting, or JSON when `AREAKIT_LOG_FORMAT=json`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Result of running an area description through the editor.
#[derive(Debug, Clone)]
pub struct DocumentSummary {
    /// Normalized description, one area per line.
    pub document: String,
    /// Render bundles at the configured view.
    pub geometry: Vec<AreaGeometry>,
    /// Messages of lines that were skipped.
    pub errors: Vec<String>,
}

/// Applies an area description under `config` and returns the normalized
/// document with its geometry.
///
/// Fails when the view settings are invalid or when no line of a non-blank
/// description parses.
pub fn summarize_document(config: &Config, text: &str) -> anyhow::Result<DocumentSummary> {
    let mut editor = AreaEditor::from_config(config)?;
    editor.set_document_text(text);
    let report = editor.apply_document()?;

    let geometry = editor.geometry();
    for bundle in &geometry {
        tracing::info!(
            id = %bundle.id,
            label = %bundle.label,
            summary_x = bundle.summary_mm.0,
            summary_y = bundle.summary_mm.1,
            "Area at {:?} px",
            bundle.interior_px
        );
    }
    tracing::info!(
        areas = report.areas,
        skipped = report.skipped_lines,
        "Document summarized"
    );

    let errors = editor.errors().to_vec();
    editor.sync_document();
    Ok(DocumentSummary {
        document: editor.document_text().to_string(),
        geometry,
        errors,
    })
}

/// Loads the explicit config file, else the platform config file when it
/// exists, else the defaults.
pub fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    use anyhow::Context;

    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()));
    }

    match Config::default_config_path() {
        Ok(path) if path.exists() => Config::load_from_file(&path)
            .with_context(|| format!("loading config {}", path.display())),
        _ => Ok(Config::default()),
    }
}
