//! Button components.

use egui::{Align2, Color32, CornerRadius, CursorIcon, Sense, Ui, vec2};

use crate::{sizing, theme};

const HEIGHT: f32 = 24.0;

/// A two-state button that shows a different label per state.
pub struct ToggleButton<'a> {
    on_label: &'a str,
    off_label: &'a str,
    on: bool,
    min_width: Option<f32>,
    font_size: f32,
}

impl<'a> ToggleButton<'a> {
    /// Create a toggle button; the same label for both states.
    pub fn new(label: &'a str, on: bool) -> Self {
        Self {
            on_label: label,
            off_label: label,
            on,
            min_width: None,
            font_size: 11.0,
        }
    }

    /// Use a different label while off.
    pub fn off_label(mut self, label: &'a str) -> Self {
        self.off_label = label;
        self
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let label = if self.on { self.on_label } else { self.off_label };
        let font_id = egui::FontId::proportional(self.font_size);
        let galley = ui
            .painter()
            .layout_no_wrap(label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
        let text_width = galley.size().x + 16.0;
        let width = self.min_width.unwrap_or(text_width).max(text_width);

        let (rect, response) = ui.allocate_exact_size(vec2(width, HEIGHT), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.on {
                theme::ACCENT
            } else if response.hovered() {
                Color32::from_gray(235)
            } else {
                Color32::from_gray(245)
            };
            let text_color = if self.on {
                Color32::WHITE
            } else {
                Color32::from_gray(80)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter()
                .text(rect.center(), Align2::CENTER_CENTER, label, font_id, text_color);
        }

        response.on_hover_cursor(CursorIcon::PointingHand).clicked()
    }
}
