//! Output surfaces.
//!
//! The renderer hands every visible leaf to a [`Surface`] as a 2D path in
//! pixel coordinates together with its [`Paint`]. Implementations decide
//! what drawing means: [`RecordingSurface`] keeps the calls for
//! inspection, [`SvgSurface`](super::svg::SvgSurface) writes an SVG
//! document.

use glam::DVec2;
use kurbo::BezPath;

use crate::path::DrawPrimitive;
use crate::types::{LineCap, Rgba};

/// A 2D path in surface pixels.
pub type SurfacePath = BezPath;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
    pub cap: LineCap,
}

/// How to draw one path. Fill is painted before stroke.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    pub fill: Option<Rgba>,
    pub stroke: Option<Stroke>,
}

/// A 2D drawing target.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> f64;

    /// Height in pixels.
    fn height(&self) -> f64;

    /// Erase everything, then paint `background` if given.
    fn clear(&mut self, background: Option<Rgba>);

    fn draw(&mut self, path: &SurfacePath, paint: &Paint);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }

    fn clear(&mut self, background: Option<Rgba>) {
        (**self).clear(background);
    }

    fn draw(&mut self, path: &SurfacePath, paint: &Paint) {
        (**self).draw(path, paint);
    }
}

/// Build a 2D path from the projected points of `prims`, mapped by `map`.
/// With `close_subpaths`, every open subpath is closed, as filling and
/// point-in-path testing expect. Segments before the first move are
/// dropped.
pub(crate) fn bez_path(
    prims: &[DrawPrimitive],
    close_subpaths: bool,
    map: impl Fn(DVec2) -> kurbo::Point,
) -> BezPath {
    let mut path = BezPath::new();
    let mut open = false;
    let at = |p: &crate::point::Point3| map(p.projected);
    for prim in prims {
        match prim {
            DrawPrimitive::MoveTo([p]) => {
                if close_subpaths && open {
                    path.close_path();
                }
                path.move_to(at(p));
                open = true;
            }
            _ if path.elements().is_empty() => continue,
            DrawPrimitive::LineTo([p]) => path.line_to(at(p)),
            DrawPrimitive::CubicTo([c1, c2, p]) => path.curve_to(at(c1), at(c2), at(p)),
            DrawPrimitive::QuadTo([c, p]) => path.quad_to(at(c), at(p)),
            DrawPrimitive::ClosePath => {
                path.close_path();
                open = false;
            }
        }
    }
    if close_subpaths && open {
        path.close_path();
    }
    path
}

// ============================================================================
// Recording surface
// ============================================================================

/// One call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Option<Rgba>),
    Draw { path: SurfacePath, paint: Paint },
}

/// Surface that remembers every call.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        RecordingSurface {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Draw calls since the last clear, in paint order.
    pub fn draws(&self) -> impl Iterator<Item = (&SurfacePath, &Paint)> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear(_)))
            .map_or(0, |i| i + 1);
        self.calls[start..].iter().filter_map(|c| match c {
            DrawCall::Draw { path, paint } => Some((path, paint)),
            DrawCall::Clear(_) => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, background: Option<Rgba>) {
        self.calls.push(DrawCall::Clear(background));
    }

    fn draw(&mut self, path: &SurfacePath, paint: &Paint) {
        self.calls.push(DrawCall::Draw {
            path: path.clone(),
            paint: *paint,
        });
    }
}
