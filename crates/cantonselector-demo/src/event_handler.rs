//! Translates window pointer events into dashboard input.

use cantonselector_core::RegionSnowmanDashboard;
use kurbo::Point;
use winit::event::{ElementState, MouseButton};

/// Pointer input for the dashboard, in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardInput {
    Moved(Point),
    Left,
    Pressed(Point),
}

/// Tracks the cursor and decides what reaches the dashboard.
///
/// Events over egui panels are withheld; moving onto a panel counts as
/// leaving the dashboard.
#[derive(Debug, Clone)]
pub struct EventHandler {
    scale_factor: f64,
    cursor: Option<Point>,
}

impl EventHandler {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            cursor: None,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Last cursor position in logical coordinates.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Cursor moved to a physical position.
    pub fn cursor_moved(&mut self, physical: Point, egui_wants_pointer: bool) -> DashboardInput {
        let logical = Point::new(physical.x / self.scale_factor, physical.y / self.scale_factor);
        self.cursor = Some(logical);
        if egui_wants_pointer {
            DashboardInput::Left
        } else {
            DashboardInput::Moved(logical)
        }
    }

    /// Cursor left the window.
    pub fn cursor_left(&mut self) -> DashboardInput {
        self.cursor = None;
        DashboardInput::Left
    }

    /// Mouse button changed. Only left presses over the dashboard count.
    pub fn mouse_input(
        &self,
        state: ElementState,
        button: MouseButton,
        egui_wants_pointer: bool,
    ) -> Option<DashboardInput> {
        if egui_wants_pointer || button != MouseButton::Left || state != ElementState::Pressed {
            return None;
        }
        self.cursor.map(DashboardInput::Pressed)
    }
}

/// Forward one input to the dashboard.
pub fn apply(input: DashboardInput, dashboard: &mut RegionSnowmanDashboard) {
    match input {
        DashboardInput::Moved(position) => dashboard.pointer_moved(position),
        DashboardInput::Left => dashboard.pointer_left(),
        DashboardInput::Pressed(position) => dashboard.clicked(position),
    }
}
