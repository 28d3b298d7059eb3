//! Proportional layout of a fixed-size artboard inside a resizable container.
//!
//! Geometry is authored in artboard coordinates. The layout keeps the
//! aspect ratio, clamps the drawn width to `[min_width, max_width]` and
//! centers the board in its container.

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Padding around an artboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Native size and width bounds of an artboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtboardSpec {
    pub native_width: f64,
    pub native_height: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl ArtboardSpec {
    /// The canton map.
    pub const SELECTOR: Self = Self::new(1100.0, 675.0, 100.0, 2000.0);
    /// The snowman indicator.
    pub const SNOWMAN: Self = Self::new(105.0, 130.0, 25.0, 800.0);
    /// Map and snowman side by side.
    pub const DASHBOARD: Self = Self::new(1200.0, 675.0, 25.0, 1200.0);

    pub const fn new(native_width: f64, native_height: f64, min_width: f64, max_width: f64) -> Self {
        Self {
            native_width,
            native_height,
            min_width,
            max_width,
        }
    }

    pub fn native_size(&self) -> Size {
        Size::new(self.native_width, self.native_height)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.native_width / self.native_height
    }

    pub fn min_height(&self) -> f64 {
        self.min_width / self.aspect_ratio()
    }

    /// Smallest container that still fits the board at `min_width`.
    pub fn min_size(&self, insets: Insets) -> Size {
        Size::new(
            self.min_width + insets.horizontal(),
            self.min_height() + insets.vertical(),
        )
    }

    /// Container size that shows the board at its native size.
    pub fn pref_size(&self, insets: Insets) -> Size {
        Size::new(
            self.native_width + insets.horizontal(),
            self.native_height + insets.vertical(),
        )
    }

    /// Drawn width for the given available space, clamped to the bounds.
    ///
    /// `min_width` wins when it exceeds `max_width`.
    pub fn fitted_width(&self, available: Size) -> f64 {
        available
            .width
            .min(available.height * self.aspect_ratio())
            .min(self.max_width)
            .max(self.min_width)
    }
}

/// Result of a layout pass.
///
/// `origin` places the unscaled board; `scale` is then applied about the
/// board's own center, so the visible board is centered on the same
/// point as the unscaled one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtboardLayout {
    pub scale: f64,
    pub origin: Point,
    pub native: Size,
}

impl ArtboardLayout {
    /// Board drawn at native size at the container origin.
    pub fn identity(native: Size) -> Self {
        Self {
            scale: 1.0,
            origin: Point::ORIGIN,
            native,
        }
    }

    fn native_center(&self) -> Vec2 {
        Vec2::new(self.native.width / 2.0, self.native.height / 2.0)
    }

    /// Artboard to container transform.
    pub fn transform(&self) -> Affine {
        let center = self.native_center();
        Affine::translate(self.origin.to_vec2() + center)
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }

    /// Convert a container point into artboard coordinates.
    pub fn to_artboard(&self, point: Point) -> Point {
        self.transform().inverse() * point
    }

    /// Convert an artboard point into container coordinates.
    pub fn to_container(&self, point: Point) -> Point {
        self.transform() * point
    }

    /// The scaled board in container coordinates.
    pub fn visual_bounds(&self) -> Rect {
        self.transform()
            .transform_rect_bbox(Rect::from_origin_size(Point::ORIGIN, self.native))
    }

    /// Whether a container point lands on the board.
    pub fn contains(&self, point: Point) -> bool {
        self.visual_bounds().contains(point)
    }
}

/// Lay out `spec` in a `width` x `height` container without padding.
///
/// Returns `None` when the container has no area.
pub fn compute_layout(width: f64, height: f64, spec: &ArtboardSpec) -> Option<ArtboardLayout> {
    compute_layout_with_insets(Size::new(width, height), spec, Insets::ZERO)
}

/// Lay out `spec` in `container`.
///
/// Padding shrinks the space available to the width computation while
/// placement is centered in the full container.
pub fn compute_layout_with_insets(
    container: Size,
    spec: &ArtboardSpec,
    insets: Insets,
) -> Option<ArtboardLayout> {
    let available = Size::new(
        container.width - insets.horizontal(),
        container.height - insets.vertical(),
    );
    // Also rejects NaN.
    if !(available.width > 0.0 && available.height > 0.0) {
        return None;
    }

    let width = spec.fitted_width(available);
    Some(ArtboardLayout {
        scale: width / spec.native_width,
        origin: Point::new(
            (container.width - spec.native_width) / 2.0,
            (container.height - spec.native_height) / 2.0,
        ),
        native: spec.native_size(),
    })
}

/// Origin that puts the scaled board horizontally centered and resting on
/// the bottom padding.
pub fn center_bottom_origin(native: Size, container: Size, scale: f64, padding_bottom: f64) -> Point {
    let scaled_height = native.height * scale;
    Point::new(
        (container.width - native.width) / 2.0,
        container.height - scaled_height + (scaled_height - native.height) / 2.0 - padding_bottom,
    )
}

/// Origin that puts the scaled board horizontally centered and hanging
/// from the top padding.
pub fn center_top_origin(native: Size, container: Size, scale: f64, padding_top: f64) -> Point {
    let scaled_height = native.height * scale;
    Point::new(
        (container.width - native.width) / 2.0,
        (scaled_height - native.height) / 2.0 + padding_top,
    )
}

/// Layout state of one control: the spec plus the last valid layout.
#[derive(Debug, Clone)]
pub struct ResizableArtboard {
    spec: ArtboardSpec,
    insets: Insets,
    container: Size,
    layout: ArtboardLayout,
}

impl ResizableArtboard {
    pub fn new(spec: ArtboardSpec) -> Self {
        Self::with_insets(spec, Insets::ZERO)
    }

    pub fn with_insets(spec: ArtboardSpec, insets: Insets) -> Self {
        Self {
            spec,
            insets,
            container: Size::ZERO,
            layout: ArtboardLayout::identity(spec.native_size()),
        }
    }

    pub fn spec(&self) -> &ArtboardSpec {
        &self.spec
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn layout(&self) -> &ArtboardLayout {
        &self.layout
    }

    /// Last container size that produced a layout.
    pub fn container(&self) -> Size {
        self.container
    }

    /// Recompute for a new container size. Degenerate sizes keep the
    /// previous layout; returns whether the layout changed.
    pub fn resize(&mut self, container: Size) -> bool {
        match compute_layout_with_insets(container, &self.spec, self.insets) {
            Some(layout) => {
                let changed = layout != self.layout;
                self.layout = layout;
                self.container = container;
                changed
            }
            None => {
                log::debug!(
                    "Ignoring degenerate container {}x{}",
                    container.width,
                    container.height
                );
                false
            }
        }
    }

    pub fn min_size(&self) -> Size {
        self.spec.min_size(self.insets)
    }

    pub fn pref_size(&self) -> Size {
        self.spec.pref_size(self.insets)
    }

    pub fn to_artboard(&self, point: Point) -> Point {
        self.layout.to_artboard(point)
    }

    pub fn transform(&self) -> Affine {
        self.layout.transform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_pinned_selector_layout() {
        let layout = compute_layout(2000.0, 1000.0, &ArtboardSpec::SELECTOR).unwrap();
        // min(2000, 1000 * 1100/675) = 1629.63 stays inside [100, 2000].
        assert!(approx(layout.scale * 1100.0, 1000.0 * 1100.0 / 675.0));
        assert!(approx(layout.scale, 1000.0 / 675.0));
        assert_eq!(layout.origin, Point::new(450.0, 162.5));
    }

    #[test]
    fn test_width_is_clamped() {
        let spec = ArtboardSpec::SELECTOR;
        let huge = compute_layout(10_000.0, 10_000.0, &spec).unwrap();
        assert!(approx(huge.scale * spec.native_width, spec.max_width));

        let tiny = compute_layout(20.0, 20.0, &spec).unwrap();
        assert!(approx(tiny.scale * spec.native_width, spec.min_width));
    }

    #[test]
    fn test_layout_is_centered_and_bounded() {
        let spec = ArtboardSpec::SNOWMAN;
        for (w, h) in [(105.0, 130.0), (300.0, 130.0), (80.0, 500.0), (640.0, 480.0), (33.3, 91.7)] {
            let layout = compute_layout(w, h, &spec).unwrap();
            let drawn = layout.scale * spec.native_width;
            assert!(drawn >= spec.min_width - EPS && drawn <= spec.max_width + EPS);

            let bounds = layout.visual_bounds();
            assert!(approx(bounds.center().x, w / 2.0), "{w}x{h}");
            assert!(approx(bounds.center().y, h / 2.0), "{w}x{h}");
            assert!(approx(bounds.width(), drawn));
        }
    }

    #[test]
    fn test_degenerate_container() {
        let spec = ArtboardSpec::DASHBOARD;
        assert!(compute_layout(0.0, 100.0, &spec).is_none());
        assert!(compute_layout(100.0, -1.0, &spec).is_none());
        assert!(compute_layout(f64::NAN, 100.0, &spec).is_none());
    }

    #[test]
    fn test_resizable_retains_previous_layout() {
        let mut board = ResizableArtboard::new(ArtboardSpec::SELECTOR);
        assert_eq!(board.layout().scale, 1.0);

        assert!(board.resize(Size::new(550.0, 400.0)));
        let before = *board.layout();
        assert!(!board.resize(Size::new(0.0, 0.0)));
        assert_eq!(*board.layout(), before);
        assert_eq!(board.container(), Size::new(550.0, 400.0));
        assert!(!board.resize(Size::new(550.0, 400.0)));
    }

    #[test]
    fn test_padding_reduces_available_width() {
        let spec = ArtboardSpec::SELECTOR;
        let layout =
            compute_layout_with_insets(Size::new(1100.0, 675.0), &spec, Insets::uniform(10.0)).unwrap();
        // Height is the limiting side: 655 * 1100/675 < 1080.
        assert!(approx(layout.scale, 655.0 / 675.0));
        assert_eq!(layout.origin, Point::ORIGIN);
    }

    #[test]
    fn test_to_artboard_inverts_transform() {
        let layout = compute_layout(800.0, 600.0, &ArtboardSpec::SELECTOR).unwrap();
        let p = Point::new(123.0, 456.0);
        let back = layout.to_artboard(layout.to_container(p));
        assert!(approx(back.x, p.x) && approx(back.y, p.y));

        let top_left = layout.to_container(Point::ORIGIN);
        let bounds = layout.visual_bounds();
        assert!(approx(top_left.x, bounds.x0) && approx(top_left.y, bounds.y0));
    }

    #[test]
    fn test_size_hints() {
        let spec = ArtboardSpec::SNOWMAN;
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(spec.pref_size(insets), Size::new(111.0, 134.0));
        let min = spec.min_size(insets);
        assert!(approx(min.width, 31.0));
        assert!(approx(min.height, 25.0 * 130.0 / 105.0 + 4.0));
    }

    #[test]
    fn test_anchor_helpers() {
        let native = Size::new(100.0, 50.0);
        let container = Size::new(300.0, 200.0);

        let bottom = center_bottom_origin(native, container, 2.0, 5.0);
        let layout = ArtboardLayout {
            scale: 2.0,
            origin: bottom,
            native,
        };
        assert_eq!(bottom.x, 100.0);
        assert!(approx(layout.visual_bounds().y1, 195.0));

        let top = center_top_origin(native, container, 2.0, 5.0);
        let layout = ArtboardLayout { origin: top, ..layout };
        assert!(approx(layout.visual_bounds().y0, 5.0));
    }
}
