//! The clickable canton map.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Affine, Point, Rect, Size};

use crate::artboard::{ArtboardSpec, ResizableArtboard};
use crate::catalog::{RegionId, RegionMap};
use crate::color::StyleColor;
use crate::pointer::{PointerEvent, PointerTracker};
use crate::property::{Property, Subscription};
use crate::selection::{RegionPalette, RegionState, SelectionController, SelectionError};

/// Map control: region hover/selection over the canton artboard.
///
/// The [`SelectionController`] is the source of truth; the public
/// properties mirror it for binding and can also drive it (selection and
/// colors).
pub struct RegionSelectorControl {
    map: Rc<RegionMap>,
    controller: Rc<RefCell<SelectionController>>,
    artboard: ResizableArtboard,
    tracker: PointerTracker,

    pub selected_region: Property<Option<RegionId>>,
    /// Observer driven: written by the control only.
    pub hover_region: Property<Option<RegionId>>,
    pub display_visible: Property<bool>,
    pub pointer_x: Property<f64>,
    pub pointer_y: Property<f64>,
    pub base_color: Property<StyleColor>,
    pub hover_color: Property<StyleColor>,
    pub select_color: Property<StyleColor>,

    _subscriptions: Vec<Subscription>,
}

impl RegionSelectorControl {
    pub fn new(map: Rc<RegionMap>) -> Self {
        let controller = Rc::new(RefCell::new(SelectionController::new(Rc::clone(&map))));
        let palette = RegionPalette::default();

        let selected_region = Property::new(None);
        let base_color = Property::new(palette.base);
        let hover_color = Property::new(palette.hover);
        let select_color = Property::new(palette.select);

        let mut subscriptions = vec![Self::follow_selection(&selected_region, &controller)];
        subscriptions.extend(Self::follow_palette(
            &controller,
            [&base_color, &hover_color, &select_color],
        ));

        Self {
            map,
            controller,
            artboard: ResizableArtboard::new(ArtboardSpec::SELECTOR),
            tracker: PointerTracker::new(),
            selected_region,
            hover_region: Property::new(None),
            display_visible: Property::new(false),
            pointer_x: Property::new(0.0),
            pointer_y: Property::new(0.0),
            base_color,
            hover_color,
            select_color,
            _subscriptions: subscriptions,
        }
    }

    /// Writes to `selected_region` from outside (bindings, the demo combo
    /// box) select the region. Unknown ids are logged and the property is
    /// put back to the controller's selection.
    fn follow_selection(
        selected_region: &Property<Option<RegionId>>,
        controller: &Rc<RefCell<SelectionController>>,
    ) -> Subscription {
        let controller = Rc::clone(controller);
        let property = selected_region.downgrade();
        selected_region.subscribe(move |_, new| {
            let rejected = {
                let mut controller = controller.borrow_mut();
                if controller.selected() == new.as_ref() {
                    return;
                }
                match new {
                    Some(id) => match controller.select(id) {
                        Ok(()) => None,
                        Err(e) => {
                            log::error!("Ignoring selection: {}", e);
                            Some(controller.selected().cloned())
                        }
                    },
                    None => {
                        controller.clear_selection();
                        None
                    }
                }
            };
            if let (Some(current), Some(property)) = (rejected, property.upgrade()) {
                property.set(current);
            }
        })
    }

    fn follow_palette(
        controller: &Rc<RefCell<SelectionController>>,
        colors: [&Property<StyleColor>; 3],
    ) -> Vec<Subscription> {
        let slots: [fn(&mut RegionPalette) -> &mut StyleColor; 3] = [
            |palette| &mut palette.base,
            |palette| &mut palette.hover,
            |palette| &mut palette.select,
        ];
        colors
            .into_iter()
            .zip(slots)
            .map(|(color, slot)| {
                let controller = Rc::clone(controller);
                color.subscribe(move |_, new| {
                    let mut controller = controller.borrow_mut();
                    let mut palette = controller.palette();
                    *slot(&mut palette) = *new;
                    controller.set_palette(palette);
                })
            })
            .collect()
    }

    pub fn map(&self) -> &RegionMap {
        &self.map
    }

    pub fn artboard(&self) -> &ResizableArtboard {
        &self.artboard
    }

    /// Lay the map out in a container of `size`.
    pub fn resize(&mut self, size: Size) -> bool {
        self.artboard.resize(size)
    }

    /// Artboard to control-local transform.
    pub fn transform(&self) -> Affine {
        self.artboard.transform()
    }

    pub fn region_state(&self, id: &RegionId) -> RegionState {
        self.controller.borrow().region_state(id)
    }

    /// Current fill of a region.
    pub fn fill_color(&self, id: &RegionId) -> StyleColor {
        self.controller.borrow().fill(id)
    }

    /// Pointer entered `id`.
    pub fn pointer_enter(&mut self, id: &RegionId) -> Result<(), SelectionError> {
        self.controller.borrow_mut().pointer_enter(id)?;
        self.hover_region.set(Some(id.clone()));
        self.display_visible.set(true);
        Ok(())
    }

    /// Pointer left the control.
    pub fn pointer_exit(&mut self) {
        self.controller.borrow_mut().pointer_exit();
        self.display_visible.set(false);
    }

    /// Pointer moved to `position` in artboard coordinates.
    pub fn pointer_move(&mut self, position: Point) {
        self.controller.borrow_mut().pointer_move(position);
        self.pointer_x.set(position.x);
        self.pointer_y.set(position.y);
    }

    /// Region `id` was clicked.
    pub fn click(&mut self, id: &RegionId) -> Result<(), SelectionError> {
        self.controller.borrow_mut().click(id)?;
        self.selected_region.set(Some(id.clone()));
        Ok(())
    }

    /// Validated write to `selected_region`.
    pub fn set_selected_region(&mut self, id: Option<RegionId>) -> Result<(), SelectionError> {
        match &id {
            Some(id) => self.controller.borrow_mut().select(id)?,
            None => self.controller.borrow_mut().clear_selection(),
        }
        self.selected_region.set(id);
        Ok(())
    }

    pub fn apply(&mut self, event: PointerEvent) -> Result<(), SelectionError> {
        match event {
            PointerEvent::Enter(id) => self.pointer_enter(&id),
            PointerEvent::Exit => {
                self.pointer_exit();
                Ok(())
            }
            PointerEvent::Move(position) => {
                self.pointer_move(position);
                Ok(())
            }
            PointerEvent::Click(id) => self.click(&id),
        }
    }

    fn hit(&self, position: Point) -> (bool, Option<RegionId>, Point) {
        let local = self.artboard.to_artboard(position);
        let board = Rect::from_origin_size(Point::ORIGIN, self.artboard.spec().native_size());
        let hit = self.map.hit_test(local).cloned();
        (board.contains(local), hit, local)
    }

    /// Pointer moved to `position` in control-local coordinates.
    pub fn pointer_moved(&mut self, position: Point) {
        let (on_board, hit, local) = self.hit(position);
        for event in self.tracker.moved(on_board, hit.as_ref(), local) {
            self.dispatch(event);
        }
    }

    /// Pointer left the control's area.
    pub fn pointer_left(&mut self) {
        if let Some(event) = self.tracker.left() {
            self.dispatch(event);
        }
    }

    /// Press at `position` in control-local coordinates.
    pub fn clicked(&mut self, position: Point) {
        let (_, hit, _) = self.hit(position);
        if let Some(event) = self.tracker.clicked(hit.as_ref()) {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: PointerEvent) {
        log::debug!("Pointer event {:?}", event);
        if let Err(e) = self.apply(event) {
            log::error!("{}", e);
        }
    }

    /// Hovered region label and its anchor in control-local coordinates,
    /// while the pointer is over the map.
    pub fn floating_label(&self) -> Option<(String, Point)> {
        let controller = self.controller.borrow();
        if !controller.pointer_visible() {
            return None;
        }
        let label = self.map.label(controller.hovered()?)?.to_string();
        Some((label, self.artboard.layout().to_container(controller.pointer())))
    }

    /// Regions with their current fill, in display order.
    pub fn fills(&self) -> Vec<(RegionId, StyleColor)> {
        let controller = self.controller.borrow();
        self.map
            .regions()
            .iter()
            .map(|region| (region.id().clone(), controller.fill(region.id())))
            .collect()
    }

    /// Borrow the controller for read access.
    pub fn with_controller<R>(&self, f: impl FnOnce(&SelectionController) -> R) -> R {
        f(&self.controller.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RegionMode;

    fn control(mode: RegionMode) -> RegionSelectorControl {
        let mut control = RegionSelectorControl::new(Rc::new(RegionMap::bundled(mode).unwrap()));
        control.resize(Size::new(1100.0, 675.0));
        control
    }

    fn id(s: &str) -> RegionId {
        RegionId::new(s)
    }

    const GR: Point = Point::new(944.4, 427.5);
    const TI: Point = Point::new(684.6, 517.5);
    const OUTSIDE: Point = Point::new(-10.0, -10.0);

    #[test]
    fn test_pointer_routing_by_hit_test() {
        let mut c = control(RegionMode::Flat);
        c.pointer_moved(GR);
        assert_eq!(c.hover_region.get(), Some(id("GR")));
        assert!(c.display_visible.get());
        assert_eq!(c.region_state(&id("GR")), RegionState::Hovered);
        assert!((c.pointer_x.get() - GR.x).abs() < 1e-9);

        c.clicked(GR);
        assert_eq!(c.selected_region.get(), Some(id("GR")));

        c.pointer_moved(TI);
        c.pointer_moved(OUTSIDE);
        assert_eq!(c.fill_color(&id("GR")), StyleColor::DEFAULT_SELECT);
        assert_eq!(c.fill_color(&id("TI")), StyleColor::DEFAULT_BASE);
        assert!(!c.display_visible.get());
    }

    #[test]
    fn test_external_selection_drives_controller() {
        let mut c = control(RegionMode::Grouped);
        c.selected_region.set(Some(id("ZS")));
        assert_eq!(c.region_state(&id("ZS")), RegionState::Selected);

        c.selected_region.set(None);
        assert_eq!(c.region_state(&id("ZS")), RegionState::Base);

        // Unknown ids are ignored by the controller and rolled back.
        c.selected_region.set(Some(id("LU")));
        assert!(c.with_controller(|ctl| ctl.selected().is_none()));
        assert_eq!(c.selected_region.get(), None);

        assert!(c.set_selected_region(Some(id("LU"))).is_err());
        assert!(c.set_selected_region(Some(id("OS"))).is_ok());
        assert_eq!(c.selected_region.get(), Some(id("OS")));
    }

    #[test]
    fn test_color_properties_repaint() {
        let mut c = control(RegionMode::Flat);
        c.click(&id("BE")).unwrap();
        c.select_color.set(StyleColor::rgb(255, 0, 0));
        c.base_color.set(StyleColor::rgb(0, 255, 0));
        assert_eq!(c.fill_color(&id("BE")), StyleColor::rgb(255, 0, 0));
        assert_eq!(c.fill_color(&id("ZH")), StyleColor::rgb(0, 255, 0));
    }

    #[test]
    fn test_floating_label_follows_pointer() {
        let mut c = control(RegionMode::Grouped);
        assert!(c.floating_label().is_none());

        c.pointer_moved(GR);
        let (label, at) = c.floating_label().unwrap();
        assert_eq!(label, "Graubünden");
        assert!(at.distance(GR) < 1e-6);

        c.pointer_left();
        assert!(c.floating_label().is_none());
    }

    #[test]
    fn test_scaled_layout_maps_pointer_into_artboard() {
        let mut c = control(RegionMode::Flat);
        c.resize(Size::new(550.0, 337.5));
        let at = c.transform() * GR;
        c.pointer_moved(at);
        assert_eq!(c.hover_region.get(), Some(id("GR")));
        assert!((c.pointer_x.get() - GR.x).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_event_is_error() {
        let mut c = control(RegionMode::Flat);
        assert!(c.apply(PointerEvent::Enter(id("Zürich"))).is_err());
        assert_eq!(c.hover_region.get(), None);
    }
}
