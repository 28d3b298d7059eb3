//! The control panel next to the dashboard and the floating region label.

use std::ops::RangeInclusive;

use cantonselector_core::presentation::region_choices;
use cantonselector_core::{
    PresentationModel, Property, RegionChoice, RegionId, RegionMap, RegionSnowmanDashboard,
    StyleColor,
};
use cantonselector_widgets::{
    ToggleButton, label_frame, panel_frame, section_label, separator, sizing, swatch_row, theme,
};
use egui::{Align2, Color32, Context, RichText, Ui, Vec2};

/// Gap between the panel and the window edge.
pub const PANEL_MARGIN: f32 = 12.0;
/// Range of the value slider.
pub const VALUE_RANGE: RangeInclusive<f64> = 0.0..=100.0;

pub fn to_color32(color: StyleColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn from_color32(color: Color32) -> StyleColor {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    StyleColor::new(r, g, b, a)
}

/// Right-hand panel whose inputs write straight into the presentation
/// model.
pub struct DemoPane {
    choices: Vec<RegionChoice>,
}

impl DemoPane {
    pub fn new(map: &RegionMap) -> Self {
        Self {
            choices: region_choices(map),
        }
    }

    /// Width taken from the right of the window, in logical points.
    pub fn reserved_width() -> f32 {
        sizing::PANEL_WIDTH + 2.0 * PANEL_MARGIN
    }

    pub fn choices(&self) -> &[RegionChoice] {
        &self.choices
    }

    /// Combo box text for `id`.
    pub fn choice_label(&self, id: Option<&RegionId>) -> String {
        id.and_then(|id| self.choices.iter().find(|choice| &choice.id == id))
            .map(|choice| choice.label.clone())
            .unwrap_or_else(|| "Keine Auswahl".to_string())
    }

    pub fn show(&self, ctx: &Context, pm: &PresentationModel, dashboard: &RegionSnowmanDashboard) {
        self.show_panel(ctx, pm);
        show_floating_label(ctx, dashboard);
    }

    fn show_panel(&self, ctx: &Context, pm: &PresentationModel) {
        egui::Area::new(egui::Id::new("demo_pane"))
            .anchor(Align2::RIGHT_CENTER, Vec2::new(-PANEL_MARGIN, 0.0))
            .interactable(true)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                panel_frame().show(ui, |ui| {
                    ui.set_width(sizing::PANEL_WIDTH - 24.0);
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing = Vec2::new(0.0, 6.0);

                        ui.label(RichText::new("Skigebiete").size(14.0).strong().color(theme::TEXT));
                        ui.add_space(4.0);

                        color_input(ui, "Base Color", &pm.base_color);
                        color_input(ui, "Hover Color", &pm.hover_color);
                        color_input(ui, "Select Color", &pm.select_color);
                        separator(ui);

                        section_label(ui, "Gebiet");
                        self.region_input(ui, &pm.region);

                        section_label(ui, "Funpark ist offen");
                        let is_fun = pm.is_fun.get();
                        if ToggleButton::new("Offen", is_fun)
                            .off_label("Geschlossen")
                            .min_width(96.0)
                            .show(ui)
                        {
                            pm.is_fun.set(!is_fun);
                        }
                        separator(ui);

                        section_label(ui, "Wert");
                        let mut value = pm.value.get();
                        if ui.add(egui::Slider::new(&mut value, VALUE_RANGE)).changed() {
                            pm.value.set(value);
                        }
                    });
                });
            });
    }

    fn region_input(&self, ui: &mut Ui, region: &Property<Option<RegionId>>) {
        let current = region.get();
        let mut chosen = current.clone();
        egui::ComboBox::from_id_salt("region_combo")
            .selected_text(self.choice_label(current.as_ref()))
            .width(sizing::PANEL_WIDTH - 24.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut chosen, None, "Keine Auswahl");
                for choice in &self.choices {
                    ui.selectable_value(&mut chosen, Some(choice.id.clone()), &choice.label);
                }
            });
        if chosen != current {
            log::debug!("Region chosen in panel: {:?}", chosen);
            region.set(chosen);
        }
    }
}

fn color_input(ui: &mut Ui, label: &str, color: &Property<StyleColor>) {
    section_label(ui, label);
    if let Some(picked) = swatch_row(ui, to_color32(color.get())) {
        color.set(from_color32(picked));
    }
}

/// Region name next to the pointer while it is over the map.
fn show_floating_label(ctx: &Context, dashboard: &RegionSnowmanDashboard) {
    let Some((label, at)) = dashboard.floating_label() else {
        return;
    };
    egui::Area::new(egui::Id::new("region_label"))
        .fixed_pos(egui::pos2(at.x as f32, at.y as f32))
        .pivot(Align2::LEFT_BOTTOM)
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            label_frame().show(ui, |ui| {
                ui.label(RichText::new(label).size(12.0).color(Color32::WHITE));
            });
        });
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use cantonselector_core::RegionMode;
    use kurbo::{Point, Size};

    use super::*;

    #[test]
    fn test_color_conversion() {
        let color = StyleColor::rgb(37, 99, 235);
        assert_eq!(to_color32(color), Color32::from_rgb(37, 99, 235));
        assert_eq!(from_color32(to_color32(color)), color);
    }

    #[test]
    fn test_choice_labels() {
        let map = RegionMap::bundled(RegionMode::Grouped).unwrap();
        let pane = DemoPane::new(&map);
        assert_eq!(pane.choice_label(Some(&RegionId::new("TI"))), "Tessin");
        assert_eq!(pane.choice_label(None), "Keine Auswahl");
        assert_eq!(pane.choice_label(Some(&RegionId::new("XX"))), "Keine Auswahl");
        assert_eq!(pane.choices().len(), map.regions().len());
    }

    #[test]
    fn test_frame_renders_without_input() {
        let map = Rc::new(RegionMap::bundled(RegionMode::Flat).unwrap());
        let mut dashboard = RegionSnowmanDashboard::new(Rc::clone(&map));
        dashboard.resize(Size::new(1200.0, 675.0));
        dashboard.pointer_moved(Point::new(944.4, 427.5));

        let pm = PresentationModel::default();
        let _bindings = pm.bind_dashboard(&dashboard);
        let pane = DemoPane::new(&map);

        let ctx = Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| pane.show(ctx, &pm, &dashboard));
        assert!(!output.shapes.is_empty());
        assert_eq!(pm.region.get(), None);
    }
}
