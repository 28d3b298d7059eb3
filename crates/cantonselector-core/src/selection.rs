//! Hover and selection state for the regions of a [`RegionMap`].
//!
//! The controller keeps one [`RegionState`] per region and updates it
//! synchronously inside each event method, so the fill a renderer reads
//! right after an event already reflects that event.

use std::collections::HashMap;
use std::rc::Rc;

use kurbo::Point;
use thiserror::Error;

use crate::catalog::{RegionId, RegionMap};
use crate::color::StyleColor;

/// Errors raised by the selection controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Region {0} is not part of the catalog")]
    InvalidRegionReference(RegionId),
}

/// Visual state of a region. Selected wins over hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionState {
    #[default]
    Base,
    Hovered,
    Selected,
}

/// The three style inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionPalette {
    pub base: StyleColor,
    pub hover: StyleColor,
    pub select: StyleColor,
}

impl Default for RegionPalette {
    fn default() -> Self {
        Self {
            base: StyleColor::DEFAULT_BASE,
            hover: StyleColor::DEFAULT_HOVER,
            select: StyleColor::DEFAULT_SELECT,
        }
    }
}

impl RegionPalette {
    pub fn color_for(&self, state: RegionState) -> StyleColor {
        match state {
            RegionState::Base => self.base,
            RegionState::Hovered => self.hover,
            RegionState::Selected => self.select,
        }
    }
}

/// Observable selection state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    pub selected: Option<RegionId>,
    pub hovered: Option<RegionId>,
    pub pointer_visible: bool,
    pub pointer: Point,
}

/// State machine over [`SelectionState`] driven by pointer events.
#[derive(Debug, Clone)]
pub struct SelectionController {
    map: Rc<RegionMap>,
    state: SelectionState,
    fills: HashMap<RegionId, RegionState>,
    palette: RegionPalette,
}

impl SelectionController {
    pub fn new(map: Rc<RegionMap>) -> Self {
        let fills = map
            .regions()
            .iter()
            .map(|region| (region.id().clone(), RegionState::Base))
            .collect();
        Self {
            map,
            state: SelectionState::default(),
            fills,
            palette: RegionPalette::default(),
        }
    }

    pub fn map(&self) -> &RegionMap {
        &self.map
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<&RegionId> {
        self.state.selected.as_ref()
    }

    pub fn hovered(&self) -> Option<&RegionId> {
        self.state.hovered.as_ref()
    }

    pub fn pointer_visible(&self) -> bool {
        self.state.pointer_visible
    }

    pub fn pointer(&self) -> Point {
        self.state.pointer
    }

    pub fn palette(&self) -> RegionPalette {
        self.palette
    }

    /// Colors are looked up at paint time, so no region needs repainting
    /// state-wise when the palette changes.
    pub fn set_palette(&mut self, palette: RegionPalette) {
        self.palette = palette;
    }

    /// Current visual state of a region.
    ///
    /// Reads are lenient: an id outside the map reads as `Base` (and fills
    /// with the base color) instead of failing, since painting never
    /// changes state. Only the event methods reject unknown ids.
    pub fn region_state(&self, id: &RegionId) -> RegionState {
        self.fills.get(id).copied().unwrap_or_default()
    }

    /// Fill color of a region under the current palette. Unknown ids get
    /// the base color, see [`Self::region_state`].
    pub fn fill(&self, id: &RegionId) -> StyleColor {
        self.palette.color_for(self.region_state(id))
    }

    /// Pointer entered a region.
    pub fn pointer_enter(&mut self, id: &RegionId) -> Result<(), SelectionError> {
        self.check(id)?;
        self.state.pointer_visible = true;

        if let Some(old) = self.state.hovered.replace(id.clone()) {
            if &old != id && !self.is_selected(&old) {
                self.paint(&old, RegionState::Base);
            }
        }
        if !self.is_selected(id) {
            self.paint(id, RegionState::Hovered);
        }
        Ok(())
    }

    /// Pointer left the control. The hovered id is kept (it still names
    /// the last region the pointer was over) but loses its hover color.
    pub fn pointer_exit(&mut self) {
        self.state.pointer_visible = false;
        if let Some(hovered) = self.state.hovered.clone() {
            if !self.is_selected(&hovered) {
                self.paint(&hovered, RegionState::Base);
            }
        }
    }

    /// Pointer moved; only the floating label position changes.
    pub fn pointer_move(&mut self, position: Point) {
        self.state.pointer = position;
    }

    /// A region was clicked.
    pub fn click(&mut self, id: &RegionId) -> Result<(), SelectionError> {
        self.select(id)
    }

    /// Make `id` the selected region. The previous selection reverts to
    /// the base color.
    pub fn select(&mut self, id: &RegionId) -> Result<(), SelectionError> {
        self.check(id)?;
        if let Some(old) = self.state.selected.replace(id.clone()) {
            if &old != id {
                self.paint(&old, RegionState::Base);
            }
        }
        self.paint(id, RegionState::Selected);
        Ok(())
    }

    /// Drop the selection; the formerly selected region reverts to base.
    pub fn clear_selection(&mut self) {
        if let Some(old) = self.state.selected.take() {
            self.paint(&old, RegionState::Base);
        }
    }

    /// Regions currently painted in `state`.
    pub fn regions_in(&self, state: RegionState) -> Vec<&RegionId> {
        let mut ids: Vec<&RegionId> = self
            .fills
            .iter()
            .filter(|(_, s)| **s == state)
            .map(|(id, _)| id)
            .collect();
        ids.sort();
        ids
    }

    fn is_selected(&self, id: &RegionId) -> bool {
        self.state.selected.as_ref() == Some(id)
    }

    fn check(&self, id: &RegionId) -> Result<(), SelectionError> {
        if self.map.contains(id) {
            Ok(())
        } else {
            Err(SelectionError::InvalidRegionReference(id.clone()))
        }
    }

    fn paint(&mut self, id: &RegionId, state: RegionState) {
        if let Some(fill) = self.fills.get_mut(id) {
            *fill = state;
        }
    }
}
