//! The render pipeline.
//!
//! A pass runs in four steps:
//! - `propagate`: fold soft transforms down the tree
//! - `project`: perspective-project every point
//! - `sort`: order leaves far to near
//! - paint: shade and hand each visible leaf to the [`Surface`]

pub mod defaults;
mod propagate;
pub mod shade;
mod sort;
pub mod surface;
pub mod svg;
pub mod viewport;

pub use defaults::RenderDefaults;
pub use surface::{DrawCall, Paint, RecordingSurface, Stroke, Surface, SurfacePath};
pub use svg::SvgSurface;
pub use viewport::Viewport;

use glam::DVec2;
use kurbo::BezPath;

use crate::drag::{DragController, DragState};
use crate::errors::RenderError;
use crate::log::{debug, trace};
use crate::scene::{Leaf, NodeId, NodeKind, Scene};
use crate::transform::Transform;

use propagate::PassContext;

/// Per-call render switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Stroke every leaf's outline instead of filling shapes, and draw
    /// back-hidden leaves too
    pub wireframe: bool,
    /// Draw over what is already on the surface
    pub no_clear: bool,
}

/// Counts from one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub painted: usize,
    pub skipped: usize,
}

/// Draws a scene onto a surface and routes pointer events to draggable
/// leaves.
pub struct Renderer<S: Surface> {
    surface: S,
    viewport: Viewport,
    defaults: RenderDefaults,
    drag: DragController,
}

impl<S: Surface> Renderer<S> {
    /// Fails when the surface has no drawable area.
    pub fn new(surface: S) -> Result<Self, RenderError> {
        let viewport = Viewport::new(surface.width(), surface.height())?;
        Ok(Renderer {
            surface,
            viewport,
            defaults: RenderDefaults::default(),
            drag: DragController::new(),
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn defaults(&self) -> &RenderDefaults {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut RenderDefaults {
        &mut self.defaults
    }

    pub fn set_fov(&mut self, degrees: f64) -> Result<(), RenderError> {
        self.viewport.set_fov(degrees)
    }

    pub fn set_world_coords(&mut self, left_x: f64, lower_y: f64, span_x: f64) {
        self.viewport.set_world_coords(left_x, lower_y, span_x);
    }

    pub fn set_light_source(&mut self, x: f64, y: f64, z: f64) -> Result<(), RenderError> {
        self.defaults.set_light_source(x, y, z)
    }

    pub fn set_plot_normals(&mut self, on: bool) {
        self.defaults.set_plot_normals(on);
    }

    pub fn to_pixel(&self, world: DVec2) -> DVec2 {
        self.viewport.to_pixel(world)
    }

    pub fn to_world(&self, pixel: DVec2) -> DVec2 {
        self.viewport.to_world(pixel)
    }

    /// Erase the surface and forget the draggables of earlier passes.
    pub fn clear(&mut self) {
        self.surface.clear(self.defaults.background);
        self.drag.clear();
    }

    /// Render the tree under `root`.
    pub fn render(&mut self, scene: &mut Scene, root: NodeId, options: RenderOptions) -> RenderStats {
        if !options.no_clear {
            self.clear();
        }
        let ctx = PassContext {
            xscl: self.viewport.xscl(),
            font_size: self.defaults.font_size,
        };
        let d = self.viewport.viewpoint_distance();
        propagate::propagate(scene, root, &Transform::IDENTITY, &ctx);
        propagate::project(scene, root, d);

        let mut stats = RenderStats::default();
        for id in sort::paint_list(scene, root) {
            let Some(leaf) = scene.leaf(id) else {
                continue;
            };
            let front = shade::front_facing(leaf, d);
            if !options.wireframe && !front && leaf.style().back_hidden {
                trace!(%id, "skipping hidden back face");
                stats.skipped += 1;
                continue;
            }
            self.paint_leaf(leaf, front, options.wireframe);
            if leaf.drag().is_some() {
                self.drag.register(root, id);
            }
            if self.defaults.plot_normals {
                self.plot_normal(leaf);
            }
            stats.painted += 1;
        }
        debug!(%root, painted = stats.painted, skipped = stats.skipped, "render pass");
        stats
    }

    fn pixel_path(&self, prims: &[crate::path::DrawPrimitive], close: bool) -> BezPath {
        surface::bez_path(prims, close, |p| {
            let px = self.viewport.to_pixel(p);
            kurbo::Point::new(px.x, px.y)
        })
    }

    fn paint_leaf(&mut self, leaf: &Leaf, front: bool, wireframe: bool) {
        let defaults = &self.defaults;
        let style = leaf.style();
        let pen = style.stroke.unwrap_or(defaults.pen_color);
        let (paint, close) = match leaf.node_kind() {
            NodeKind::Shape if wireframe => (
                Paint {
                    fill: None,
                    stroke: Some(Stroke {
                        color: pen,
                        width: 1.0,
                        cap: defaults.line_cap,
                    }),
                },
                true,
            ),
            NodeKind::Shape => {
                let color = shade::shade(leaf, defaults, front);
                let stroke = (color.a > 0.9).then_some(Stroke {
                    color,
                    width: 1.0,
                    cap: defaults.line_cap,
                });
                (
                    Paint {
                        fill: Some(color),
                        stroke,
                    },
                    true,
                )
            }
            NodeKind::Text => {
                let size = style.font_size.unwrap_or(defaults.font_size).raw();
                let weight = style.font_weight.unwrap_or(defaults.font_weight).raw();
                let width = style.effective_line_width(defaults.pen_width)
                    * defaults::TEXT_STROKE_FACTOR
                    * size
                    * weight
                    / 400.0;
                (
                    Paint {
                        fill: None,
                        stroke: Some(Stroke {
                            color: pen,
                            width,
                            cap: style.cap,
                        }),
                    },
                    false,
                )
            }
            NodeKind::Path | NodeKind::Group => (
                Paint {
                    fill: None,
                    stroke: Some(Stroke {
                        color: pen,
                        width: style.effective_line_width(defaults.pen_width),
                        cap: style.cap,
                    }),
                },
                false,
            ),
        };
        let path = self.pixel_path(leaf.primitives(), close);
        self.surface.draw(&path, &paint);
    }

    /// A short line from the centroid to the normal end point.
    fn plot_normal(&mut self, leaf: &Leaf) {
        let (c, n) = (leaf.centroid(), leaf.normal());
        let color = if c.transformed.z < n.transformed.z {
            crate::types::Rgba::GREEN
        } else {
            crate::types::Rgba::RED
        };
        let mut path = BezPath::new();
        let to_px = |p: DVec2| {
            let px = self.viewport.to_pixel(p);
            kurbo::Point::new(px.x, px.y)
        };
        path.move_to(to_px(c.projected));
        path.line_to(to_px(n.projected));
        let paint = Paint {
            fill: None,
            stroke: Some(Stroke {
                color,
                width: 1.0,
                cap: crate::types::LineCap::Butt,
            }),
        };
        self.surface.draw(&path, &paint);
    }

    // ========================================================================
    // Pointer events (pixel coordinates)
    // ========================================================================

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Returns whether a draggable leaf was grabbed.
    pub fn pointer_down(&mut self, scene: &mut Scene, pixel: DVec2) -> bool {
        let cursor = self.viewport.to_world(pixel);
        self.drag.pointer_down(scene, cursor)
    }

    pub fn pointer_move(&mut self, scene: &mut Scene, pixel: DVec2) {
        let cursor = self.viewport.to_world(pixel);
        self.drag.pointer_move(scene, cursor);
    }

    pub fn pointer_up(&mut self, scene: &mut Scene, pixel: DVec2) {
        let cursor = self.viewport.to_world(pixel);
        self.drag.pointer_up(scene, cursor);
    }

    pub fn pointer_leave(&mut self, scene: &mut Scene) {
        self.drag.pointer_leave(scene);
    }

    pub fn cancel_drag(&mut self, scene: &mut Scene) {
        self.drag.cancel(scene);
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::path::shapes;
    use crate::types::{LabelOrigin, Rgba};

    fn renderer() -> Renderer<RecordingSurface> {
        let mut r = Renderer::new(RecordingSurface::new(200.0, 200.0)).unwrap();
        r.set_world_coords(-100.0, -100.0, 200.0);
        r
    }

    #[test]
    fn missing_surface_is_an_error() {
        let err = Renderer::new(RecordingSurface::new(0.0, 100.0)).err();
        assert_eq!(err, Some(RenderError::MissingSurface { width: 0.0, height: 100.0 }));
    }

    #[test]
    fn clears_unless_told_not_to() {
        let mut r = renderer();
        r.defaults_mut().set_background("white").unwrap();
        let mut scene = Scene::new();
        let a = scene.compile_path(&shapes::cross(10.0), None, None);
        r.render(&mut scene, a, RenderOptions::default());
        r.render(&mut scene, a, RenderOptions { no_clear: true, ..Default::default() });
        let clears = r
            .surface()
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear(Some(_))))
            .count();
        assert_eq!(clears, 1);
        assert_eq!(r.surface().draws().count(), 2);
    }

    #[test]
    fn shapes_fill_and_stroke_in_shade() {
        let mut r = renderer();
        r.set_light_source(0.0, 0.0, 1.0).unwrap();
        let mut scene = Scene::new();
        let a = scene.compile_shape(&shapes::square(20.0), Some(Rgba::RED), None);
        r.render(&mut scene, a, RenderOptions::default());
        let (_, paint) = r.surface().draws().next().unwrap();
        assert_eq!(paint.fill, Some(Rgba::RED));
        assert_eq!(paint.stroke.map(|s| s.color), Some(Rgba::RED));
    }

    #[test]
    fn translucent_shapes_are_not_stroked() {
        let mut r = renderer();
        let mut scene = Scene::new();
        let a = scene.compile_shape(&shapes::square(20.0), Some(Rgba::new(255, 0, 0, 0.5)), None);
        r.render(&mut scene, a, RenderOptions::default());
        let (_, paint) = r.surface().draws().next().unwrap();
        assert!(paint.stroke.is_none());
    }

    #[test]
    fn hidden_backs_are_skipped_unless_wireframe() {
        let mut r = renderer();
        let mut scene = Scene::new();
        let a = scene.compile_shape(&shapes::square(20.0), None, None);
        scene.flip_normal(a).unwrap();
        scene.set_back_hidden(a, true).unwrap();

        let stats = r.render(&mut scene, a, RenderOptions::default());
        assert_eq!(stats, RenderStats { painted: 0, skipped: 1 });

        let stats = r.render(&mut scene, a, RenderOptions { wireframe: true, ..Default::default() });
        assert_eq!(stats.painted, 1);
        let (_, paint) = r.surface().draws().next().unwrap();
        assert_eq!(paint.fill, None);
        assert_eq!(paint.stroke.map(|s| s.color), Some(Rgba::BLACK));
    }

    #[test]
    fn wireframe_outlines_are_closed_and_thin() {
        let mut r = renderer();
        r.defaults_mut().pen_width = 4.0;
        let mut scene = Scene::new();
        let a = scene.compile_shape(&shapes::square(20.0), Some(Rgba::RED), None);
        r.render(&mut scene, a, RenderOptions { wireframe: true, ..Default::default() });

        let (path, paint) = r.surface().draws().next().unwrap();
        assert_eq!(paint.fill, None);
        assert_eq!(paint.stroke.map(|s| s.width), Some(1.0));
        assert!(path.elements().iter().any(|el| matches!(el, kurbo::PathEl::ClosePath)));
    }

    #[test]
    fn text_width_follows_font() {
        let mut r = renderer();
        let mut scene = Scene::new();
        let t = scene.compile_text(
            "Hi",
            None,
            crate::types::FontSize::try_new(20.0).ok(),
            Some(crate::types::FontWeight::BOLD),
            LabelOrigin::CENTER,
        );
        r.render(&mut scene, t, RenderOptions::default());
        let (_, paint) = r.surface().draws().next().unwrap();
        let stroke = paint.stroke.unwrap();
        assert!((stroke.width - 0.08 * 20.0 * 700.0 / 400.0).abs() < 1e-12);
        assert_eq!(stroke.cap, crate::types::LineCap::Round);
    }

    #[test]
    fn normals_are_plotted_on_request() {
        let mut r = renderer();
        r.set_plot_normals(true);
        let mut scene = Scene::new();
        let a = scene.compile_shape(&shapes::square(20.0), None, None);
        let b = scene.compile_shape(&shapes::square(20.0), None, None);
        scene.flip_normal(b).unwrap();
        let g = scene.create_group(&[a, b]);
        r.render(&mut scene, g, RenderOptions::default());

        let colors: Vec<_> = r
            .surface()
            .draws()
            .filter(|(_, p)| p.fill.is_none())
            .filter_map(|(_, p)| p.stroke.map(|s| s.color))
            .collect();
        assert_eq!(colors, [Rgba::GREEN, Rgba::RED]);
    }

    #[test]
    fn drag_moves_the_grabbed_leaf() {
        let mut r = renderer();
        let mut scene = Scene::new();
        let a = scene.compile_shape(&shapes::square(20.0), None, None);
        scene.enable_drag(
            a,
            crate::drag::DragCallbacks::new().on_drag(|scene, ev| {
                let to = ev.follow();
                scene.transform(ev.target).reset().translate(to.x, to.y, 0.0);
            }),
        );
        r.render(&mut scene, a, RenderOptions::default());

        let centre = r.to_pixel(DVec2::ZERO);
        assert!(r.pointer_down(&mut scene, centre));
        r.pointer_move(&mut scene, r.to_pixel(DVec2::new(30.0, 0.0)));
        r.pointer_up(&mut scene, r.to_pixel(DVec2::new(30.0, 0.0)));
        assert_eq!(r.drag_state(), DragState::Idle);

        r.render(&mut scene, a, RenderOptions::default());
        let origin = scene.drawing_origin(a);
        assert!((origin - DVec3::new(30.0, 0.0, 0.0)).length() < 1e-9);
        assert!(!r.pointer_down(&mut scene, r.to_pixel(DVec2::new(-15.0, 0.0))));
    }
}
