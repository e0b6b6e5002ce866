//! Solids of revolution.
//!
//! A profile drawn in the xy plane is swept about the y axis in equal
//! segments. Each profile segment becomes one curved panel per sweep
//! segment, bounded by the profile, the profile rotated by the segment
//! angle and the two rims joining them. Ends of the profile that lie flat
//! on the axis are closed with a single disc instead of a fan of panels.

use glam::{DVec2, DVec3};

use crate::log::{debug, warn};
use crate::path::arc::circular_arc;
use crate::path::{Cgo, DrawPrimitive, compile, shapes};
use crate::point::Point3;
use crate::render::defaults::{AXIS_TOLERANCE_PX, PAINT_COLOR};
use crate::render::Viewport;
use crate::scene::{NodeId, Scene};
use crate::transform::Transform;
use crate::types::Rgba;

/// How to sweep a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct RevolveOptions {
    /// Number of sweep segments in a full turn
    pub segments: usize,
    /// Added to every profile x coordinate before sweeping
    pub x_offset: f64,
    /// Front color; the default paint color when unset
    pub fill: Option<Rgba>,
    /// Back color; the front color when unset
    pub back: Option<Rgba>,
    /// Join segments with straight lines instead of circular arcs
    pub straight: bool,
    /// Profile points closer than this to the axis, in world units, are
    /// treated as lying on it
    pub axis_tolerance: f64,
}

impl Default for RevolveOptions {
    fn default() -> Self {
        RevolveOptions {
            segments: 6,
            x_offset: 0.0,
            fill: None,
            back: None,
            straight: false,
            axis_tolerance: AXIS_TOLERANCE_PX,
        }
    }
}

impl RevolveOptions {
    /// Options whose axis tolerance is three pixels of `viewport`.
    pub fn for_viewport(viewport: &Viewport) -> Self {
        RevolveOptions {
            axis_tolerance: AXIS_TOLERANCE_PX / viewport.xscl(),
            ..Self::default()
        }
    }
}

impl Scene {
    /// Sweep `profile` about the y axis. Returns a group of shapes: the
    /// end discs (if any) followed by the panels.
    pub fn revolve(&mut self, profile: &Cgo, options: &RevolveOptions) -> NodeId {
        let segs = if options.segments == 0 { 6 } else { options.segments };
        let seg_ang = 360.0 / segs as f64;
        let tol = options.axis_tolerance;
        let fill = options.fill.unwrap_or(PAINT_COLOR);
        let back = options.back.unwrap_or(fill);

        let base = compile(&profile.shifted(DVec3::new(options.x_offset, 0.0, 0.0)));
        let ends: Vec<Option<DVec3>> = base.iter().map(|p| p.end().map(|e| e.original)).collect();
        if base.len() < 2 {
            warn!(primitives = base.len(), "profile too short to revolve");
            return self.create_group(&[]);
        }

        let mut parts = Vec::new();
        let (mut st, mut sp) = (1, base.len());

        if let (Some(first), Some(next)) = (ends[0], ends[1]) {
            if first.x < tol && first.y == next.y {
                let cap = self.disc(next.x, segs, options.straight, fill, back);
                self.rotate(cap, DVec3::X, -90.0);
                self.translate(cap, 0.0, first.y, 0.0);
                parts.push(cap);
                st = 2;
            }
        }
        if let (Some(last), Some(prev)) = (ends[sp - 1], ends[sp - 2]) {
            if last.x < tol && last.y == prev.y {
                let cap = self.disc(prev.x, segs, options.straight, fill, back);
                self.rotate(cap, DVec3::X, 90.0);
                self.translate(cap, 0.0, last.y, 0.0);
                parts.push(cap);
                sp -= 1;
            }
        }

        let sweep = Transform::rotation(DVec3::Y, seg_ang).unwrap_or_default();
        let mut profile_0 = base.clone();
        let mut profile_1 = base;
        for prim in &mut profile_1 {
            prim.hard_transform(&sweep);
        }

        for _ in 0..segs {
            for m in st..sp {
                let (Some(start), Some(end)) = (end_point(&profile_0[m - 1]), end_point(&profile_0[m])) else {
                    continue;
                };
                if matches!(profile_0[m], DrawPrimitive::MoveTo(_)) {
                    continue;
                }
                let start = if start.x < tol {
                    let on_axis = DVec3::new(0.0, start.y, start.z);
                    set_end_point(&mut profile_0[m - 1], on_axis);
                    set_end_point(&mut profile_1[m - 1], sweep.apply(on_axis));
                    on_axis
                } else {
                    start
                };

                let mut panel = if start.x >= tol {
                    rim(start.x, seg_ang, 0.0, options.straight, -90.0, start.y)
                } else {
                    vec![DrawPrimitive::move_to(start)]
                };
                panel.push(profile_0[m].clone());
                if end.x >= tol {
                    panel.extend(rim(end.x, 0.0, -seg_ang, options.straight, 90.0, end.y).into_iter().skip(1));
                }
                if let Some(back_edge) = end_point(&profile_1[m - 1]).and_then(|to| retrace(&profile_1[m], to)) {
                    panel.push(back_edge);
                }
                parts.push(self.add_shape(panel, Some(fill), Some(back)));
            }
            for &part in &parts {
                self.rotate(part, DVec3::Y, seg_ang);
            }
        }

        debug!(segments = segs, parts = parts.len(), "revolved profile");
        self.create_group(&parts)
    }

    /// A disc of radius `r` in the xy plane: a circle, or a regular polygon
    /// with `sides` sides when `straight`.
    fn disc(&mut self, r: f64, sides: usize, straight: bool, fill: Rgba, back: Rgba) -> NodeId {
        let cgo = if straight {
            let step = std::f64::consts::TAU / sides as f64;
            let mut cgo = Cgo::new().cmd('M').pt(r, 0.0, 0.0);
            for i in 1..sides {
                let a = i as f64 * step;
                cgo = cgo.cmd('L').pt(r * a.cos(), r * a.sin(), 0.0);
            }
            cgo.cmd('Z')
        } else {
            shapes::circle(2.0 * r)
        };
        self.compile_shape(&cgo, Some(fill), Some(back))
    }
}

fn end_point(prim: &DrawPrimitive) -> Option<DVec3> {
    prim.end().map(|p| p.original)
}

fn set_end_point(prim: &mut DrawPrimitive, p: DVec3) {
    if let Some(last) = prim.points_mut().last_mut() {
        *last = Point3::from_vec(p);
    }
}

/// A rim arc of radius `r` from angle `from` to `to` (degrees, clockwise)
/// in the xy plane, tipped about x by `tilt` and lifted to height `y`.
fn rim(r: f64, from: f64, to: f64, straight: bool, tilt: f64, y: f64) -> Vec<DrawPrimitive> {
    let cgo = if straight {
        let (a, b) = (from.to_radians(), to.to_radians());
        Cgo::new()
            .cmd('M')
            .pt(r * a.cos(), r * a.sin(), 0.0)
            .cmd('L')
            .pt(r * b.cos(), r * b.sin(), 0.0)
    } else {
        circular_arc(DVec2::ZERO, r, from, to, false)
    };
    let place = Transform::rotation(DVec3::X, tilt)
        .unwrap_or_default()
        .then(&Transform::translation(DVec3::new(0.0, y, 0.0)));
    let mut prims = compile(&cgo);
    for prim in &mut prims {
        prim.hard_transform(&place);
    }
    prims
}

/// The same segment drawn backwards, ending at `to`.
fn retrace(prim: &DrawPrimitive, to: DVec3) -> Option<DrawPrimitive> {
    match prim {
        DrawPrimitive::LineTo(_) => Some(DrawPrimitive::line_to(to)),
        DrawPrimitive::CubicTo([c1, c2, _]) => Some(DrawPrimitive::cubic_to(c2.original, c1.original, to)),
        DrawPrimitive::QuadTo([c, _]) => Some(DrawPrimitive::quad_to(c.original, to)),
        DrawPrimitive::MoveTo(_) | DrawPrimitive::ClosePath => None,
    }
}
