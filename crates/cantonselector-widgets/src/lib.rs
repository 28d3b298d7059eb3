//! Reusable egui widget components for the region selector demo.
//!
//! - **Buttons**: toggle buttons
//! - **Colors**: a curated region palette, color swatches, swatch rows
//! - **Menu**: panel frames and the floating label frame
//! - **Layout**: section labels, separators

pub mod buttons;
pub mod colors;
pub mod layout;
pub mod menu;

pub use buttons::ToggleButton;
pub use colors::{ColorSwatch, PALETTE, PaletteColor, colors_match, swatch_row};
pub use layout::{section_label, separator};
pub use menu::{label_frame, panel_frame};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small button size (color swatches)
    pub const SMALL: f32 = 20.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
    /// Width of the demo control panel
    pub const PANEL_WIDTH: f32 = 240.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Floating label background
    pub const LABEL_BG: Color32 = Color32::from_rgba_premultiplied(30, 41, 59, 230);
}
