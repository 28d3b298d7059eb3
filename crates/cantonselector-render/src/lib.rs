//! Canton Selector Render Library
//!
//! Renderer abstraction for the region selector dashboard.
//! The default implementation draws into a Vello scene.

mod renderer;
mod vello_impl;

pub use renderer::{RenderContext, Renderer};
pub use vello_impl::{PartPaint, VelloRenderer, part_paint};
