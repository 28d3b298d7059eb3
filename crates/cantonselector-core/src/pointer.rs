//! Turns raw pointer samples into region enter/exit/move/click events.

use kurbo::Point;

use crate::catalog::RegionId;

/// Pointer event addressed to a region selector.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Enter(RegionId),
    Exit,
    /// Pointer position in artboard coordinates.
    Move(Point),
    Click(RegionId),
}

/// Remembers which region the pointer is over so enter events fire only
/// on change.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    inside: bool,
    current: Option<RegionId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer is over the control.
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Region the pointer was last seen over while inside.
    pub fn current(&self) -> Option<&RegionId> {
        self.current.as_ref()
    }

    /// Feed one pointer sample.
    ///
    /// `on_board` says whether the pointer is over the control at all and
    /// `hit` names the region under it. Gaps between regions keep the
    /// last region hovered, like the map's own outline gaps do.
    pub fn moved(&mut self, on_board: bool, hit: Option<&RegionId>, position: Point) -> Vec<PointerEvent> {
        if !on_board {
            return self.left().into_iter().collect();
        }
        self.inside = true;

        let mut events = Vec::new();
        if let Some(id) = hit {
            if self.current.as_ref() != Some(id) {
                self.current = Some(id.clone());
                events.push(PointerEvent::Enter(id.clone()));
            }
            events.push(PointerEvent::Move(position));
        }
        events
    }

    /// The pointer left the control. Emits `Exit` once.
    pub fn left(&mut self) -> Option<PointerEvent> {
        if !self.inside {
            return None;
        }
        self.inside = false;
        // Forget the region so coming back over it enters again.
        self.current = None;
        Some(PointerEvent::Exit)
    }

    /// A press at the current position.
    pub fn clicked(&self, hit: Option<&RegionId>) -> Option<PointerEvent> {
        hit.map(|id| PointerEvent::Click(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RegionId {
        RegionId::new(s)
    }

    #[test]
    fn test_enter_fires_only_on_change() {
        let mut tracker = PointerTracker::new();
        let p = Point::new(1.0, 2.0);
        assert_eq!(
            tracker.moved(true, Some(&id("ZH")), p),
            vec![PointerEvent::Enter(id("ZH")), PointerEvent::Move(p)]
        );
        assert_eq!(tracker.moved(true, Some(&id("ZH")), p), vec![PointerEvent::Move(p)]);
        assert_eq!(
            tracker.moved(true, Some(&id("AG")), p),
            vec![PointerEvent::Enter(id("AG")), PointerEvent::Move(p)]
        );
    }

    #[test]
    fn test_gap_keeps_current_region() {
        let mut tracker = PointerTracker::new();
        tracker.moved(true, Some(&id("BE")), Point::ORIGIN);
        assert!(tracker.moved(true, None, Point::ORIGIN).is_empty());
        assert_eq!(tracker.current(), Some(&id("BE")));
        assert_eq!(tracker.moved(true, Some(&id("BE")), Point::ORIGIN), vec![PointerEvent::Move(Point::ORIGIN)]);
    }

    #[test]
    fn test_leaving_emits_single_exit_and_reenter() {
        let mut tracker = PointerTracker::new();
        tracker.moved(true, Some(&id("TI")), Point::ORIGIN);
        assert_eq!(tracker.moved(false, None, Point::ORIGIN), vec![PointerEvent::Exit]);
        assert_eq!(tracker.left(), None);
        assert!(!tracker.is_inside());

        let events = tracker.moved(true, Some(&id("TI")), Point::ORIGIN);
        assert_eq!(events[0], PointerEvent::Enter(id("TI")));
    }

    #[test]
    fn test_click_needs_a_region() {
        let tracker = PointerTracker::new();
        assert_eq!(tracker.clicked(None), None);
        assert_eq!(tracker.clicked(Some(&id("GR"))), Some(PointerEvent::Click(id("GR"))));
    }
}
