//! Renderer trait abstraction.

use cantonselector_core::RegionSnowmanDashboard;
use kurbo::Size;
use peniko::Color;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The dashboard to render.
    pub dashboard: &'a RegionSnowmanDashboard,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Color of the canton borders.
    pub outline_color: Color,
    /// Outline the dashboard cells (layout debugging).
    pub show_cells: bool,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(dashboard: &'a RegionSnowmanDashboard, viewport_size: Size) -> Self {
        Self {
            dashboard,
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            outline_color: Color::from_rgba8(255, 255, 255, 255),
            show_cells: false,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the canton border color.
    pub fn with_outline(mut self, color: Color) -> Self {
        self.outline_color = color;
        self
    }

    pub fn with_cells(mut self, show: bool) -> Self {
        self.show_cells = show;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called once per frame; prepares all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
