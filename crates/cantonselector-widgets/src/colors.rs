//! Color swatches for picking the region style colors.

use egui::{Color32, CursorIcon, Rect, Sense, Stroke, Ui, vec2};

use crate::{sizing, theme};

/// A named palette entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub color: Color32,
}

impl PaletteColor {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: Color32::from_rgb(r, g, b),
        }
    }
}

/// Quick-pick colors offered for each style input (Tailwind shades).
pub const PALETTE: &[PaletteColor] = &[
    PaletteColor::new("Slate 300", 203, 213, 225),
    PaletteColor::new("Stone 200", 231, 229, 228),
    PaletteColor::new("Sky 300", 125, 211, 252),
    PaletteColor::new("Emerald 400", 52, 211, 153),
    PaletteColor::new("Amber 400", 251, 191, 36),
    PaletteColor::new("Rose 500", 244, 63, 94),
    PaletteColor::new("Violet 500", 139, 92, 246),
    PaletteColor::new("Blue 600", 37, 99, 235),
];

/// A clickable round color swatch.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
}

impl<'a> ColorSwatch<'a> {
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
        }
    }

    /// Set whether this swatch is selected (drawn with an inner ring).
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let size = vec2(sizing::SMALL, sizing::SMALL);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;
            ui.painter().circle_filled(center, radius, self.color);
            ui.painter()
                .circle_stroke(center, radius, Stroke::new(1.0, theme::BORDER));
            if self.selected {
                ui.painter().circle_stroke(
                    center,
                    radius - 3.0,
                    Stroke::new(2.0, Color32::from_gray(30)),
                );
            }
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// Compare colors ignoring alpha.
pub fn colors_match(a: Color32, b: Color32) -> bool {
    a.r() == b.r() && a.g() == b.g() && a.b() == b.b()
}

/// A row with the current color, a free picker and the quick-pick
/// palette. Returns the newly chosen color, if any.
pub fn swatch_row(ui: &mut Ui, current: Color32) -> Option<Color32> {
    let mut chosen = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(4.0, 4.0);

        let mut edited = current;
        if egui::color_picker::color_edit_button_srgba(
            ui,
            &mut edited,
            egui::color_picker::Alpha::Opaque,
        )
        .changed()
        {
            chosen = Some(edited);
        }

        for entry in PALETTE {
            let (clicked, _) = ColorSwatch::new(entry.color, entry.name)
                .selected(colors_match(entry.color, current))
                .show(ui);
            if clicked {
                chosen = Some(entry.color);
            }
        }
    });
    chosen.filter(|color| *color != current)
}
