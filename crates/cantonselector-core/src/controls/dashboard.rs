//! Map and snowman side by side on one artboard.

use std::rc::Rc;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use super::{RegionSelectorControl, SnowmanControl};
use crate::artboard::{ArtboardSpec, ResizableArtboard};
use crate::catalog::{RegionId, RegionMap};
use crate::color::StyleColor;
use crate::property::{Binding, Property};

/// Map cell (column 0) in dashboard artboard coordinates.
pub const SELECTOR_CELL: Rect = Rect::new(0.0, 0.0, 1100.0, 675.0);
/// Snowman cell (column 1), vertically centered next to the map.
pub const SNOWMAN_CELL: Rect = Rect::new(1100.0, 272.5, 1200.0, 402.5);
/// Offset of the hover label from the pointer.
pub const LABEL_OFFSET: Vec2 = Vec2::new(12.0, -8.0);

/// Composite control forwarding its properties to the map and snowman.
pub struct RegionSnowmanDashboard {
    selector: RegionSelectorControl,
    snowman: SnowmanControl,
    artboard: ResizableArtboard,

    pub value: Property<f64>,
    pub is_fun: Property<bool>,
    pub base_color: Property<StyleColor>,
    pub hover_color: Property<StyleColor>,
    pub select_color: Property<StyleColor>,
    pub selected_region: Property<Option<RegionId>>,

    _bindings: Vec<Binding>,
}

impl RegionSnowmanDashboard {
    pub fn new(map: Rc<RegionMap>) -> Self {
        let mut selector = RegionSelectorControl::new(map);
        let mut snowman = SnowmanControl::new();
        selector.resize(SELECTOR_CELL.size());
        snowman.resize(SNOWMAN_CELL.size());

        let is_fun = Property::new(false);
        let base_color = Property::new(selector.base_color.get());
        let hover_color = Property::new(selector.hover_color.get());
        let select_color = Property::new(selector.select_color.get());
        let selected_region = Property::new(None);

        let bindings = vec![
            snowman.value.bind_bidirectional(&is_fun),
            selector.base_color.bind_bidirectional(&base_color),
            selector.hover_color.bind_bidirectional(&hover_color),
            selector.select_color.bind_bidirectional(&select_color),
            selector.selected_region.bind_bidirectional(&selected_region),
        ];

        Self {
            selector,
            snowman,
            artboard: ResizableArtboard::new(ArtboardSpec::DASHBOARD),
            value: Property::new(0.0),
            is_fun,
            base_color,
            hover_color,
            select_color,
            selected_region,
            _bindings: bindings,
        }
    }

    pub fn selector(&self) -> &RegionSelectorControl {
        &self.selector
    }

    pub fn snowman(&self) -> &SnowmanControl {
        &self.snowman
    }

    pub fn artboard(&self) -> &ResizableArtboard {
        &self.artboard
    }

    pub fn resize(&mut self, size: Size) -> bool {
        self.artboard.resize(size)
    }

    /// Dashboard artboard to container transform.
    pub fn transform(&self) -> Affine {
        self.artboard.transform()
    }

    /// Map artboard to container transform.
    pub fn selector_transform(&self) -> Affine {
        self.cell_transform(SELECTOR_CELL) * self.selector.transform()
    }

    /// Snowman artboard to container transform.
    pub fn snowman_transform(&self) -> Affine {
        self.cell_transform(SNOWMAN_CELL) * self.snowman.transform()
    }

    fn cell_transform(&self, cell: Rect) -> Affine {
        self.transform() * Affine::translate(cell.origin().to_vec2())
    }

    fn cell_local(cell: Rect, point: Point) -> Option<Point> {
        cell.contains(point).then(|| point - cell.origin().to_vec2())
    }

    /// Pointer moved to `position` in container coordinates.
    pub fn pointer_moved(&mut self, position: Point) {
        let local = self.artboard.to_artboard(position);
        match Self::cell_local(SELECTOR_CELL, local) {
            Some(point) => self.selector.pointer_moved(point),
            None => self.selector.pointer_left(),
        }
    }

    /// Pointer left the container.
    pub fn pointer_left(&mut self) {
        self.selector.pointer_left();
    }

    /// Press at `position` in container coordinates.
    pub fn clicked(&mut self, position: Point) {
        let local = self.artboard.to_artboard(position);
        if let Some(point) = Self::cell_local(SELECTOR_CELL, local) {
            self.selector.clicked(point);
        } else if SNOWMAN_CELL.contains(local) {
            self.snowman.click();
        }
    }

    /// Hover label and its anchor in container coordinates.
    pub fn floating_label(&self) -> Option<(String, Point)> {
        let (label, at) = self.selector.floating_label()?;
        Some((label, self.cell_transform(SELECTOR_CELL) * at + LABEL_OFFSET))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RegionMode;
    use crate::selection::RegionState;
    use crate::snowman::Mood;

    fn dashboard(mode: RegionMode) -> RegionSnowmanDashboard {
        let mut dashboard = RegionSnowmanDashboard::new(Rc::new(RegionMap::bundled(mode).unwrap()));
        dashboard.resize(Size::new(1200.0, 675.0));
        dashboard
    }

    fn id(s: &str) -> RegionId {
        RegionId::new(s)
    }

    const GR: Point = Point::new(944.4, 427.5);
    const TI: Point = Point::new(684.6, 517.5);
    const SNOWMAN: Point = Point::new(1150.0, 330.0);

    #[test]
    fn test_cells_fit_dashboard() {
        let spec = ArtboardSpec::DASHBOARD;
        let board = Rect::new(0.0, 0.0, spec.native_width, spec.native_height);
        assert_eq!(board.intersect(SELECTOR_CELL), SELECTOR_CELL);
        assert_eq!(board.intersect(SNOWMAN_CELL), SNOWMAN_CELL);
        assert_eq!(SNOWMAN_CELL.center().y, board.center().y);
    }

    #[test]
    fn test_is_fun_bound_to_snowman() {
        let mut d = dashboard(RegionMode::Flat);
        d.is_fun.set(true);
        assert_eq!(d.snowman().mood(), Mood::Happy);

        d.clicked(SNOWMAN);
        assert!(!d.is_fun.get());
        assert_eq!(d.snowman().mood(), Mood::Sad);
    }

    #[test]
    fn test_selected_region_bound_both_ways() {
        let mut d = dashboard(RegionMode::Grouped);
        d.clicked(GR);
        assert_eq!(d.selected_region.get(), Some(id("GR")));

        d.selected_region.set(Some(id("TI")));
        assert_eq!(d.selector().region_state(&id("TI")), RegionState::Selected);
        assert_eq!(d.selector().region_state(&id("GR")), RegionState::Base);
    }

    #[test]
    fn test_colors_forwarded_to_selector() {
        let d = dashboard(RegionMode::Flat);
        d.hover_color.set(StyleColor::rgb(9, 9, 9));
        assert_eq!(d.selector().hover_color.get(), StyleColor::rgb(9, 9, 9));
        d.selector().select_color.set(StyleColor::rgb(7, 7, 7));
        assert_eq!(d.select_color.get(), StyleColor::rgb(7, 7, 7));
    }

    #[test]
    fn test_pointer_routing_through_scaled_dashboard() {
        let mut d = dashboard(RegionMode::Flat);
        d.resize(Size::new(600.0, 337.5));
        let to_screen = d.transform();

        d.pointer_moved(to_screen * GR);
        d.clicked(to_screen * GR);
        d.pointer_moved(to_screen * TI);
        assert_eq!(d.selector().hover_region.get(), Some(id("TI")));

        // Moving onto the snowman leaves the map.
        d.pointer_moved(to_screen * SNOWMAN);
        assert!(!d.selector().display_visible.get());
        assert_eq!(d.selector().fill_color(&id("GR")), StyleColor::DEFAULT_SELECT);
        assert_eq!(d.selector().fill_color(&id("TI")), StyleColor::DEFAULT_BASE);
    }

    #[test]
    fn test_floating_label_in_container_coordinates() {
        let mut d = dashboard(RegionMode::Flat);
        d.resize(Size::new(600.0, 337.5));
        let at = d.transform() * GR;
        d.pointer_moved(at);
        let (label, anchor) = d.floating_label().unwrap();
        assert_eq!(label, "Graubünden");
        assert!(anchor.distance(at + LABEL_OFFSET) < 1e-6);
    }

    #[test]
    fn test_selector_transform_composes_cells() {
        let d = dashboard(RegionMode::Flat);
        let p = d.snowman_transform() * Point::ORIGIN;
        // Snowman cell scale 100/105, centered: origin (-2.5, 0) about its center.
        let s = 100.0 / 105.0;
        let expected_x = 1100.0 - 2.5 + 52.5 - s * 52.5;
        assert!((p.x - expected_x).abs() < 1e-9);
        assert!((d.selector_transform() * GR).distance(GR) < 1e-9);
    }
}
