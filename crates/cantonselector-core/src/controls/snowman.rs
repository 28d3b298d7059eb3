//! The snowman indicator control.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Affine, Size};

use crate::artboard::{ArtboardSpec, ResizableArtboard};
use crate::color::StyleColor;
use crate::property::{Property, Subscription};
use crate::snowman::{HappinessIndicator, Mood, SnowmanFigure, SnowmanPart};

/// Snowman that smiles while `value` is true. Clicking toggles `value`.
pub struct SnowmanControl {
    indicator: Rc<RefCell<HappinessIndicator>>,
    figure: SnowmanFigure,
    artboard: ResizableArtboard,

    pub value: Property<bool>,
    /// Outline tint of the snow body.
    pub base_color: Property<StyleColor>,

    _subscription: Subscription,
}

impl Default for SnowmanControl {
    fn default() -> Self {
        Self::new()
    }
}

impl SnowmanControl {
    pub fn new() -> Self {
        let indicator = Rc::new(RefCell::new(HappinessIndicator::default()));
        let value = Property::new(false);
        let subscription = {
            let indicator = Rc::clone(&indicator);
            value.subscribe(move |_, happy| indicator.borrow_mut().set_happy(*happy))
        };

        Self {
            indicator,
            figure: SnowmanFigure::new(),
            artboard: ResizableArtboard::new(ArtboardSpec::SNOWMAN),
            value,
            base_color: Property::new(StyleColor::DEFAULT_SELECT),
            _subscription: subscription,
        }
    }

    pub fn mood(&self) -> Mood {
        self.indicator.borrow().mood()
    }

    /// Toggle the mood through `value`, so bound properties follow.
    pub fn click(&self) {
        self.value.set(!self.value.get());
        log::debug!("Snowman is now {:?}", self.mood());
    }

    pub fn artboard(&self) -> &ResizableArtboard {
        &self.artboard
    }

    pub fn resize(&mut self, size: Size) -> bool {
        self.artboard.resize(size)
    }

    pub fn transform(&self) -> Affine {
        self.artboard.transform()
    }

    /// Parts to draw for the current mood, back to front.
    pub fn parts(&self) -> Vec<SnowmanPart> {
        self.figure.parts(self.indicator.borrow().pose())
    }
}
