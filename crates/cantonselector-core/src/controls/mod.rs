//! Interactive controls built on the core model.
//!
//! Controls expose their state as [`Property`](crate::property::Property)
//! fields and take pointer input in their own container coordinates.

mod dashboard;
mod region_selector;
mod snowman;

pub use dashboard::{LABEL_OFFSET, RegionSnowmanDashboard, SELECTOR_CELL, SNOWMAN_CELL};
pub use region_selector::RegionSelectorControl;
pub use snowman::SnowmanControl;
