//! State behind the demo pane's inputs.

use crate::catalog::{RegionId, RegionMap};
use crate::color::StyleColor;
use crate::controls::RegionSnowmanDashboard;
use crate::property::{Binding, Property};
use crate::selection::RegionPalette;

/// One entry of the region combo box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionChoice {
    pub id: RegionId,
    pub label: String,
}

/// Application-side model the demo widgets and the dashboard both bind to.
#[derive(Debug, Clone)]
pub struct PresentationModel {
    pub value: Property<f64>,
    pub is_fun: Property<bool>,
    pub base_color: Property<StyleColor>,
    pub hover_color: Property<StyleColor>,
    pub select_color: Property<StyleColor>,
    pub region: Property<Option<RegionId>>,
}

impl Default for PresentationModel {
    fn default() -> Self {
        Self::new(RegionPalette::default())
    }
}

impl PresentationModel {
    pub fn new(palette: RegionPalette) -> Self {
        Self {
            value: Property::new(0.0),
            is_fun: Property::new(false),
            base_color: Property::new(palette.base),
            hover_color: Property::new(palette.hover),
            select_color: Property::new(palette.select),
            region: Property::new(None),
        }
    }

    /// Bind a dashboard to this model. The dashboard adopts the model's
    /// current values.
    #[must_use = "dropping the bindings disconnects the dashboard"]
    pub fn bind_dashboard(&self, dashboard: &RegionSnowmanDashboard) -> Vec<Binding> {
        vec![
            dashboard.value.bind_bidirectional(&self.value),
            dashboard.is_fun.bind_bidirectional(&self.is_fun),
            dashboard.base_color.bind_bidirectional(&self.base_color),
            dashboard.hover_color.bind_bidirectional(&self.hover_color),
            dashboard.select_color.bind_bidirectional(&self.select_color),
            dashboard.selected_region.bind_bidirectional(&self.region),
        ]
    }

    /// Label of the current region, if any.
    pub fn region_label(&self, map: &RegionMap) -> Option<String> {
        self.region
            .get()
            .and_then(|id| map.label(&id).map(str::to_string))
    }
}

/// Choices for the region combo box, in display order.
pub fn region_choices(map: &RegionMap) -> Vec<RegionChoice> {
    map.regions()
        .iter()
        .map(|region| RegionChoice {
            id: region.id().clone(),
            label: region.display_name().to_string(),
        })
        .collect()
}
