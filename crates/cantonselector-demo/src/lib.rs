//! Canton Selector Demo
//!
//! Native application shell: the region/snowman dashboard in a window
//! with a control panel bound to a shared presentation model.

mod app;
mod config;
mod demo_pane;
mod event_handler;

pub use app::{App, dashboard_area};
pub use config::{AppConfig, CONFIG_ENV, ConfigError, ConfigResult};
pub use demo_pane::{DemoPane, from_color32, to_color32};
pub use event_handler::{DashboardInput, EventHandler};
