//! Viewport and coordinate transformation for the workspace surface.
//!
//! Handles conversion between pixel coordinates (surface space, Y down) and
//! millimeter coordinates (workspace space, Y up). Manages zoom, pan and the
//! scroll offset reported by the scroll container.

use std::fmt;

use areakit_core::constants::{DEFAULT_MAX_ZOOM, DEFAULT_ZOOM_STEP, MIN_ZOOM};
use areakit_core::AreaError;
use areakit_settings::Config;

use crate::model::{Bounds, Point};

/// Static view parameters: workspace geometry and viewport size.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub workspace_width_mm: f64,
    pub workspace_height_mm: f64,
    pub origin_x_mm: f64,
    pub origin_y_mm: f64,
    pub viewport_width_px: f64,
    pub viewport_height_px: f64,
    pub zoom_step: f64,
    pub max_zoom: f64,
    pub surface_padding_px: f64,
}

impl ViewConfig {
    /// Creates a view config with default zoom limits and no padding.
    pub fn new(
        workspace_width_mm: f64,
        workspace_height_mm: f64,
        viewport_width_px: f64,
        viewport_height_px: f64,
    ) -> Self {
        Self {
            workspace_width_mm,
            workspace_height_mm,
            origin_x_mm: 0.0,
            origin_y_mm: 0.0,
            viewport_width_px,
            viewport_height_px,
            zoom_step: DEFAULT_ZOOM_STEP,
            max_zoom: DEFAULT_MAX_ZOOM,
            surface_padding_px: 0.0,
        }
    }

    /// Sets the workspace origin.
    pub fn with_origin(mut self, origin_x_mm: f64, origin_y_mm: f64) -> Self {
        self.origin_x_mm = origin_x_mm;
        self.origin_y_mm = origin_y_mm;
        self
    }

    /// Builds the view config from the application settings.
    pub fn from_config(config: &Config) -> Self {
        Self {
            workspace_width_mm: config.workspace.width_mm,
            workspace_height_mm: config.workspace.height_mm,
            origin_x_mm: config.workspace.origin_x_mm,
            origin_y_mm: config.workspace.origin_y_mm,
            viewport_width_px: config.view.viewport_width_px,
            viewport_height_px: config.view.viewport_height_px,
            zoom_step: config.view.zoom_step,
            max_zoom: config.view.max_zoom,
            surface_padding_px: config.view.surface_padding_px,
        }
    }

    /// Checks the dimensions that keep the scale strictly positive.
    pub fn validate(&self) -> Result<(), AreaError> {
        let dims = [
            ("workspace width", self.workspace_width_mm),
            ("workspace height", self.workspace_height_mm),
            ("viewport width", self.viewport_width_px),
            ("viewport height", self.viewport_height_px),
        ];
        for (name, value) in dims {
            if !(value.is_finite() && value > 0.0) {
                return Err(AreaError::invalid_dimension(name));
            }
        }
        if !(self.origin_x_mm.is_finite() && self.origin_y_mm.is_finite()) {
            return Err(AreaError::invalid_format(format!(
                "({}, {})",
                self.origin_x_mm, self.origin_y_mm
            )));
        }
        Ok(())
    }

    /// Workspace rectangle in mm, centered on the origin.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_workspace(
            self.workspace_width_mm,
            self.workspace_height_mm,
            self.origin_x_mm,
            self.origin_y_mm,
        )
    }

    /// Pixels per millimeter that fit the whole workspace in the viewport.
    pub fn base_scale(&self) -> f64 {
        let scale_x = self.viewport_width_px / self.workspace_width_mm;
        let scale_y = self.viewport_height_px / self.workspace_height_mm;
        scale_x.min(scale_y)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Represents the viewport transformation state (zoom, pan and scroll).
#[derive(Debug, Clone)]
pub struct Viewport {
    config: ViewConfig,
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    scroll_x: f64,
    scroll_y: f64,
}

impl Viewport {
    /// Creates a viewport at zoom 1 with the origin centered.
    pub fn new(config: ViewConfig) -> Result<Self, AreaError> {
        config.validate()?;
        Ok(Self {
            config,
            zoom: MIN_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Workspace rectangle in mm.
    pub fn bounds(&self) -> Bounds {
        self.config.bounds()
    }

    /// Sets the viewport dimensions (typically called when the window resizes).
    pub fn set_viewport_size(&mut self, width: f64, height: f64) -> Result<(), AreaError> {
        let mut config = self.config.clone();
        config.viewport_width_px = width;
        config.viewport_height_px = height;
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Gets the current zoom multiplier (1.0 = fitted).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, constrained between 1 and the configured maximum.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, self.config.max_zoom.max(MIN_ZOOM));
        }
    }

    /// Zooms in by one zoom step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * self.config.zoom_step);
    }

    /// Zooms out by one zoom step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / self.config.zoom_step);
    }

    /// Zooms while keeping the mm point under `(pixel_x, pixel_y)` fixed.
    pub fn zoom_at(&mut self, pixel_x: f64, pixel_y: f64, new_zoom: f64) {
        let anchor_mm = self.px_to_mm(pixel_x, pixel_y);
        self.set_zoom(new_zoom);

        // Solve mm_to_px(anchor_mm) == (pixel_x, pixel_y) for the pan offset.
        let scale = self.effective_scale();
        let anchor_x = pixel_x - (anchor_mm.x - self.config.origin_x_mm) * scale;
        let anchor_y = pixel_y + (anchor_mm.y - self.config.origin_y_mm) * scale;
        let (extent_w, extent_h) = self.surface_extent();
        self.pan_x = anchor_x - extent_w / 2.0;
        self.pan_y = anchor_y - extent_h / 2.0;
    }

    /// Gets the pan offset (X coordinate, pixels).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate, pixels).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Scroll offset reported by the scroll container.
    ///
    /// This is the surface pixel shown at the viewport's top-left corner.
    pub fn scroll(&self) -> (f64, f64) {
        (self.scroll_x, self.scroll_y)
    }

    pub fn set_scroll(&mut self, x: f64, y: f64) {
        self.scroll_x = x;
        self.scroll_y = y;
    }

    /// Scroll offset that puts the surface center in the middle of the viewport.
    pub fn centered_scroll(&self) -> (f64, f64) {
        let (extent_w, extent_h) = self.surface_extent();
        (
            (extent_w - self.config.viewport_width_px) / 2.0,
            (extent_h - self.config.viewport_height_px) / 2.0,
        )
    }

    /// Scrolls so the surface center sits in the middle of the viewport.
    pub fn center_scroll(&mut self) {
        let (x, y) = self.centered_scroll();
        self.set_scroll(x, y);
    }

    /// Resets zoom to 1 and clears pan.
    pub fn reset_view(&mut self) {
        self.zoom = MIN_ZOOM;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Fitted pixels per millimeter before zoom.
    pub fn base_scale(&self) -> f64 {
        self.config.base_scale()
    }

    /// Pixels per millimeter, uniform in both axes.
    pub fn effective_scale(&self) -> f64 {
        self.base_scale() * self.zoom
    }

    /// Surface-space pixel position of the workspace origin.
    ///
    /// The origin sits at the surface center plus pan, which is the viewport
    /// center plus pan when the view is scrolled to [`Viewport::centered_scroll`].
    /// Scrolling moves the window over the surface, not the anchor.
    pub fn screen_anchor(&self) -> (f64, f64) {
        let (extent_w, extent_h) = self.surface_extent();
        (extent_w / 2.0 + self.pan_x, extent_h / 2.0 + self.pan_y)
    }

    /// Size of the scrollable surface in pixels.
    pub fn surface_size(&self) -> (f64, f64) {
        let scale = self.effective_scale();
        let pad = 2.0 * self.config.surface_padding_px;
        (
            self.config.workspace_width_mm * scale + pad,
            self.config.workspace_height_mm * scale + pad,
        )
    }

    // A surface smaller than the viewport still fills it.
    fn surface_extent(&self) -> (f64, f64) {
        let (width, height) = self.surface_size();
        (
            width.max(self.config.viewport_width_px),
            height.max(self.config.viewport_height_px),
        )
    }

    /// Converts millimeter coordinates to surface pixel coordinates.
    ///
    /// ```text
    /// x_px = anchor_x + (x_mm - origin_x) * scale
    /// y_px = anchor_y - (y_mm - origin_y) * scale   // Flip Y-axis
    /// ```
    pub fn mm_to_px(&self, x_mm: f64, y_mm: f64) -> (f64, f64) {
        let (anchor_x, anchor_y) = self.screen_anchor();
        let scale = self.effective_scale();
        (
            anchor_x + (x_mm - self.config.origin_x_mm) * scale,
            // Higher mm Y maps to lower pixel Y (up on screen)
            anchor_y - (y_mm - self.config.origin_y_mm) * scale,
        )
    }

    /// Converts a mm point to surface pixel coordinates.
    pub fn mm_point_to_px(&self, point: &Point) -> (f64, f64) {
        self.mm_to_px(point.x, point.y)
    }

    /// Converts surface pixel coordinates to millimeter coordinates.
    ///
    /// Exact inverse of [`Viewport::mm_to_px`].
    pub fn px_to_mm(&self, x_px: f64, y_px: f64) -> Point {
        let (anchor_x, anchor_y) = self.screen_anchor();
        let scale = self.effective_scale();
        Point::new(
            (x_px - anchor_x) / scale + self.config.origin_x_mm,
            (anchor_y - y_px) / scale + self.config.origin_y_mm,
        )
    }

    /// Converts a pixel delta to a mm delta (no origin, Y flipped).
    pub fn px_delta_to_mm_delta(&self, dx_px: f64, dy_px: f64) -> (f64, f64) {
        let scale = self.effective_scale();
        (dx_px / scale, -dy_px / scale)
    }

    /// The mm rectangle currently visible through the viewport, i.e. the
    /// surface window that starts at the scroll offset.
    pub fn visible_mm_rect(&self) -> Bounds {
        let top_left = self.px_to_mm(self.scroll_x, self.scroll_y);
        let bottom_right = self.px_to_mm(
            self.scroll_x + self.config.viewport_width_px,
            self.scroll_y + self.config.viewport_height_px,
        );
        Bounds::new(top_left.x, bottom_right.y, bottom_right.x, top_left.y)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Scale: {:.3} px/mm | Pan: ({:.1}, {:.1})",
            self.zoom,
            self.effective_scale(),
            self.pan_x,
            self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            config: ViewConfig::default(),
            zoom: MIN_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }
}
