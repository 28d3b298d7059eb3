//! Canton Selector Core Library
//!
//! Platform-agnostic model for the canton region selector: the canton
//! catalog, the hover/selection state machine, proportional artboard
//! layout, the snowman happiness indicator and the observable controls
//! that tie them together.

pub mod artboard;
pub mod catalog;
pub mod color;
pub mod controls;
pub mod pointer;
pub mod presentation;
pub mod property;
pub mod selection;
pub mod snowman;

pub use artboard::{ArtboardLayout, ArtboardSpec, Insets, ResizableArtboard, compute_layout};
pub use catalog::{Canton, CantonShape, CatalogError, Region, RegionId, RegionMap, RegionMode, RegionName};
pub use color::StyleColor;
pub use controls::{RegionSelectorControl, RegionSnowmanDashboard, SnowmanControl};
pub use pointer::{PointerEvent, PointerTracker};
pub use presentation::{PresentationModel, RegionChoice};
pub use property::{Binding, Property, Subscription};
pub use selection::{RegionPalette, RegionState, SelectionController, SelectionError, SelectionState};
pub use snowman::{HappinessIndicator, Mood, SnowmanFigure, SnowmanPose};
