//! The snowman happiness indicator.
//!
//! Geometry is authored on the 105x130 snowman artboard. Only the mouth
//! and the arms depend on the mood; each mood has one canonical pose so
//! any number of toggles lands on exactly one of two configurations.

use kurbo::{Affine, Circle, Ellipse, Line, Point, Rect, Shape};

/// Mood shown by the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Sad,
    Happy,
}

impl Mood {
    pub fn from_happy(happy: bool) -> Self {
        if happy { Mood::Happy } else { Mood::Sad }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mood::Sad => Mood::Happy,
            Mood::Happy => Mood::Sad,
        }
    }
}

/// Mood-dependent part of the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowmanPose {
    /// Rotation of the left and right mouth segment, in degrees.
    pub mouth_rotation: [f64; 2],
    pub arm_left: [Point; 2],
    pub arm_right: [Point; 2],
}

impl SnowmanPose {
    pub const SAD: Self = Self {
        mouth_rotation: [0.0, 0.0],
        arm_left: [Point::new(1.0, 41.0), Point::new(15.0, 41.0)],
        arm_right: [Point::new(50.0, 41.0), Point::new(65.0, 41.0)],
    };

    /// Mouth corners turned up, outer arm ends raised by 15.
    pub const HAPPY: Self = Self {
        mouth_rotation: [15.0, -15.0],
        arm_left: [Point::new(1.0, 26.0), Point::new(15.0, 41.0)],
        arm_right: [Point::new(50.0, 41.0), Point::new(65.0, 26.0)],
    };

    pub fn for_mood(mood: Mood) -> &'static Self {
        match mood {
            Mood::Sad => &Self::SAD,
            Mood::Happy => &Self::HAPPY,
        }
    }
}

/// Two-state happy/sad toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HappinessIndicator {
    mood: Mood,
}

impl HappinessIndicator {
    pub fn new(happy: bool) -> Self {
        Self {
            mood: Mood::from_happy(happy),
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn is_happy(&self) -> bool {
        self.mood == Mood::Happy
    }

    pub fn set_happy(&mut self, happy: bool) {
        self.mood = Mood::from_happy(happy);
    }

    /// Flip the mood and return the new one.
    pub fn toggle(&mut self) -> Mood {
        self.mood = self.mood.toggled();
        self.mood
    }

    pub fn pose(&self) -> &'static SnowmanPose {
        SnowmanPose::for_mood(self.mood)
    }
}

/// Style role of a part, selecting its paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartRole {
    /// Body: white fill with the tinted outline.
    Snow,
    /// Eyes, buttons, mouth and arms.
    Accent,
    Nose,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartGeometry {
    Ellipse(Ellipse),
    Circle(Circle),
    Line(Line),
}

impl PartGeometry {
    pub fn bounds(&self) -> Rect {
        match self {
            PartGeometry::Ellipse(e) => e.bounding_box(),
            PartGeometry::Circle(c) => c.bounding_box(),
            PartGeometry::Line(l) => l.bounding_box(),
        }
    }
}

/// One drawable piece of the snowman.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowmanPart {
    pub name: &'static str,
    pub role: PartRole,
    pub geometry: PartGeometry,
}

impl SnowmanPart {
    fn new(name: &'static str, role: PartRole, geometry: PartGeometry) -> Self {
        Self {
            name,
            role,
            geometry,
        }
    }
}

const MOUTH_START: Point = Point::new(30.099, 18.45);
const MOUTH_SEGMENT: f64 = 5.0;
const BUTTON_RADIUS: f64 = 1.6;

/// Static body of the snowman.
#[derive(Debug, Clone)]
pub struct SnowmanFigure {
    legs: Ellipse,
    belly: Ellipse,
    head: Ellipse,
    nose: Ellipse,
    eyes: [Ellipse; 2],
    buttons: [Circle; 3],
}

impl Default for SnowmanFigure {
    fn default() -> Self {
        Self::new()
    }
}

impl SnowmanFigure {
    pub fn new() -> Self {
        let head_skew = Affine::new([1.0, -0.05, 0.05, 1.0, 0.0, 0.0]);
        let eye_tilt = Affine::new([0.98, -0.18, 0.18, 0.98, 0.0, 0.0]);
        let eye = |x: f64, y: f64| eye_tilt * Ellipse::new((x, y), (2.2, 1.5), 0.0);

        Self {
            legs: Ellipse::new((18.94, 66.31), (31.48, 30.86), 0.0),
            belly: Ellipse::new((28.81, 36.61), (21.61, 22.06), 0.0),
            head: head_skew * Ellipse::new((33.08, 14.48), (16.585, 16.12), 0.0),
            nose: Ellipse::new((47.8, 12.55), (3.0, 10.5), 85f64.to_radians()),
            eyes: [eye(33.22, 16.15), eye(38.84, 15.04)],
            buttons: [
                Circle::new((34.69, 47.0), BUTTON_RADIUS),
                Circle::new((34.78, 39.5), BUTTON_RADIUS),
                Circle::new((35.44, 43.15), BUTTON_RADIUS),
            ],
        }
    }

    /// All parts in back-to-front order for `pose`.
    pub fn parts(&self, pose: &SnowmanPose) -> Vec<SnowmanPart> {
        use PartGeometry as G;
        use PartRole::*;

        let [arm_left_start, arm_left_end] = pose.arm_left;
        let [arm_right_start, arm_right_end] = pose.arm_right;
        let [mouth_left, mouth_right] = mouth_lines(pose);

        vec![
            SnowmanPart::new("arm_right", Accent, G::Line(Line::new(arm_right_start, arm_right_end))),
            SnowmanPart::new("legs", Snow, G::Ellipse(self.legs)),
            SnowmanPart::new("belly", Snow, G::Ellipse(self.belly)),
            SnowmanPart::new("head", Snow, G::Ellipse(self.head)),
            SnowmanPart::new("nose", Nose, G::Ellipse(self.nose)),
            SnowmanPart::new("eye_left", Accent, G::Ellipse(self.eyes[0])),
            SnowmanPart::new("eye_right", Accent, G::Ellipse(self.eyes[1])),
            SnowmanPart::new("button_down", Accent, G::Circle(self.buttons[0])),
            SnowmanPart::new("button_up", Accent, G::Circle(self.buttons[1])),
            SnowmanPart::new("button_middle", Accent, G::Circle(self.buttons[2])),
            SnowmanPart::new("mouth_left", Accent, G::Line(mouth_left)),
            SnowmanPart::new("mouth_right", Accent, G::Line(mouth_right)),
            SnowmanPart::new("arm_left", Accent, G::Line(Line::new(arm_left_start, arm_left_end))),
        ]
    }
}

/// The two mouth segments, each rotated about its own midpoint.
fn mouth_lines(pose: &SnowmanPose) -> [Line; 2] {
    let segment = |i: f64, degrees: f64| {
        let start = Point::new(MOUTH_START.x + i * MOUTH_SEGMENT, MOUTH_START.y);
        let end = Point::new(start.x + MOUTH_SEGMENT, start.y);
        let line = Line::new(start, end);
        let rotate = Affine::rotate_about(degrees.to_radians(), start.midpoint(end));
        Line::new(rotate * line.p0, rotate * line.p1)
    };
    [
        segment(0.0, pose.mouth_rotation[0]),
        segment(1.0, pose.mouth_rotation[1]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_sad() {
        let indicator = HappinessIndicator::default();
        assert!(!indicator.is_happy());
        assert_eq!(indicator.pose(), &SnowmanPose::SAD);
    }

    #[test]
    fn test_toggle_twice_restores_exact_pose() {
        let figure = SnowmanFigure::new();
        let mut indicator = HappinessIndicator::default();
        let initial = figure.parts(indicator.pose());

        assert_eq!(indicator.toggle(), Mood::Happy);
        assert_ne!(figure.parts(indicator.pose()), initial);
        assert_eq!(indicator.toggle(), Mood::Sad);
        assert_eq!(figure.parts(indicator.pose()), initial);
    }

    #[test]
    fn test_many_toggles_converge_to_two_poses() {
        let mut indicator = HappinessIndicator::default();
        for i in 1..=101 {
            indicator.toggle();
            let expected = if i % 2 == 1 { &SnowmanPose::HAPPY } else { &SnowmanPose::SAD };
            assert_eq!(indicator.pose(), expected);
        }
    }

    #[test]
    fn test_set_happy_is_absolute() {
        let mut indicator = HappinessIndicator::default();
        indicator.set_happy(true);
        indicator.set_happy(true);
        assert_eq!(indicator.pose(), &SnowmanPose::HAPPY);
        indicator.set_happy(false);
        assert_eq!(indicator.pose(), &SnowmanPose::SAD);
    }

    #[test]
    fn test_happy_pose_raises_outer_arm_ends() {
        let sad = SnowmanPose::SAD;
        let happy = SnowmanPose::HAPPY;
        assert_eq!(happy.arm_left[0].y, sad.arm_left[0].y - 15.0);
        assert_eq!(happy.arm_left[1], sad.arm_left[1]);
        assert_eq!(happy.arm_right[1].y, sad.arm_right[1].y - 15.0);
        assert_eq!(happy.arm_right[0], sad.arm_right[0]);
    }

    #[test]
    fn test_mouth_rotates_about_segment_center() {
        let [left, right] = mouth_lines(&SnowmanPose::HAPPY);
        assert!((left.p0.midpoint(left.p1).x - 32.599).abs() < 1e-9);
        assert!((right.p0.midpoint(right.p1).x - 37.599).abs() < 1e-9);
        // Outer corners go up (smaller y) when smiling.
        assert!(left.p0.y < MOUTH_START.y);
        assert!(right.p1.y < MOUTH_START.y);

        let [flat_left, _] = mouth_lines(&SnowmanPose::SAD);
        assert!(flat_left.p0.distance(MOUTH_START) < 1e-9);
        assert!(flat_left.p1.distance(Point::new(35.099, 18.45)) < 1e-9);
    }

    #[test]
    fn test_figure_fits_artboard() {
        let figure = SnowmanFigure::new();
        let parts = figure.parts(&SnowmanPose::HAPPY);
        assert_eq!(parts.len(), 13);
        assert_eq!(parts[0].name, "arm_right");
        assert_eq!(parts[12].name, "arm_left");
        for part in parts {
            let b = part.geometry.bounds();
            assert!(b.x0 >= -13.0 && b.x1 <= 105.0, "{}", part.name);
            assert!(b.y0 >= -4.0 && b.y1 <= 130.0, "{}", part.name);
        }
    }
}
