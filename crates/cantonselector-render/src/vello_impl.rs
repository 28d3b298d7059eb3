//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use cantonselector_core::controls::{SELECTOR_CELL, SNOWMAN_CELL};
use cantonselector_core::snowman::{PartGeometry, PartRole, SnowmanPart};
use cantonselector_core::{RegionSnowmanDashboard, StyleColor};
use kurbo::{Affine, Cap, Rect, Shape as KurboShape, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Canton border width in map artboard units.
const OUTLINE_WIDTH: f64 = 1.5;
/// Line width of the snowman strokes in snowman artboard units.
const SNOWMAN_STROKE: f64 = 1.0;

const ACCENT: Color = Color::from_rgba8(51, 51, 51, 255);
const NOSE: Color = Color::from_rgba8(249, 115, 22, 255);
const SNOW: Color = Color::from_rgba8(255, 255, 255, 255);

/// Fill and stroke of a snowman part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartPaint {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
}

/// Paint for a snowman role. `base` tints the snow outline.
pub fn part_paint(role: PartRole, base: StyleColor) -> PartPaint {
    match role {
        PartRole::Snow => PartPaint {
            fill: Some(SNOW),
            stroke: Some(base.into()),
        },
        PartRole::Accent => PartPaint {
            fill: Some(ACCENT),
            stroke: Some(ACCENT),
        },
        PartRole::Nose => PartPaint {
            fill: Some(NOSE),
            stroke: None,
        },
    }
}

/// Vello-based renderer for the dashboard.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    pub fn new() -> Self {
        Self { scene: Scene::new() }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn render_regions(&mut self, dashboard: &RegionSnowmanDashboard, outline: Color, transform: Affine) {
        let selector = dashboard.selector();
        let map = selector.map();
        let stroke = Stroke::new(OUTLINE_WIDTH);

        for region in map.regions() {
            let fill: Color = selector.fill_color(region.id()).into();
            for shape in map.shapes_of(region) {
                self.scene.fill(Fill::NonZero, transform, fill, None, &shape.path);
                self.scene.stroke(&stroke, transform, outline, None, &shape.path);
            }
        }
    }

    fn render_snowman(&mut self, dashboard: &RegionSnowmanDashboard, transform: Affine) {
        let snowman = dashboard.snowman();
        let base = snowman.base_color.get();
        for part in snowman.parts() {
            self.render_part(&part, base, transform);
        }
    }

    fn render_part(&mut self, part: &SnowmanPart, base: StyleColor, transform: Affine) {
        let paint = part_paint(part.role, base);
        let stroke = Stroke::new(SNOWMAN_STROKE).with_caps(Cap::Round);

        let path = match part.geometry {
            PartGeometry::Ellipse(ellipse) => ellipse.to_path(0.1),
            PartGeometry::Circle(circle) => circle.to_path(0.1),
            PartGeometry::Line(line) => {
                if let Some(color) = paint.stroke {
                    self.scene.stroke(&stroke, transform, color, None, &line);
                }
                return;
            }
        };

        if let Some(color) = paint.fill {
            self.scene.fill(Fill::NonZero, transform, color, None, &path);
        }
        if let Some(color) = paint.stroke {
            self.scene.stroke(&stroke, transform, color, None, &path);
        }
    }

    fn render_cells(&mut self, transform: Affine) {
        let stroke = Stroke::new(1.0).with_dashes(0.0, [4.0, 4.0]);
        let color = Color::from_rgba8(236, 72, 153, 180);
        for cell in [SELECTOR_CELL, SNOWMAN_CELL] {
            self.scene.stroke(&stroke, transform, color, None, &cell);
        }
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();

        let dashboard = ctx.dashboard;
        let hidpi = Affine::scale(ctx.scale_factor);

        let viewport = Rect::from_origin_size((0.0, 0.0), ctx.viewport_size);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, ctx.background_color, None, &viewport);

        self.render_regions(dashboard, ctx.outline_color, hidpi * dashboard.selector_transform());
        self.render_snowman(dashboard, hidpi * dashboard.snowman_transform());

        if ctx.show_cells {
            self.render_cells(hidpi * dashboard.transform());
        }

        log::trace!(
            "Built scene: {} regions, mood {:?}, scale {:.3}",
            dashboard.selector().map().regions().len(),
            dashboard.snowman().mood(),
            dashboard.artboard().layout().scale
        );
    }
}
