//! Elliptical and circular arcs as cubic Bézier runs.
//!
//! Cubic curves survive 3D rotation with their shape intact, so every arc
//! is flattened into cubics before it enters a command stream.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::DVec2;

use super::Cgo;

/// Control point ratio for a quarter circle drawn as one cubic.
pub const CIRCLE_KAPPA: f64 = 0.552_284_75;

/// Arcs are split into pieces no larger than a quarter turn (plus a hair
/// so that an exact quarter stays one piece).
const MAX_PIECE: f64 = FRAC_PI_2 + 0.001;

/// One cubic piece of an arc: two control points then the end point.
pub type CubicPiece = [DVec2; 3];

/// An SVG style elliptical arc from `start` to `end`.
///
/// The angles follow the y-up convention: `sweep == true` runs the arc in
/// the direction of increasing angle (counter clockwise).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc {
    pub start: DVec2,
    pub radii: DVec2,
    /// Rotation of the ellipse x axis in degrees
    pub x_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: DVec2,
}

impl EllipticalArc {
    /// Convert to cubic pieces.
    ///
    /// Radii too small to reach the end point are scaled up uniformly. An
    /// arc whose end equals its start, or with a zero radius, yields no
    /// pieces; the caller draws a straight line instead.
    pub fn to_cubics(&self) -> Vec<CubicPiece> {
        let mut rx = self.radii.x.abs();
        let mut ry = self.radii.y.abs();
        if rx == 0.0 || ry == 0.0 || self.start == self.end {
            return Vec::new();
        }

        let (sin_th, cos_th) = self.x_rotation.to_radians().sin_cos();
        let half = (self.start - self.end) * 0.5;
        let px = cos_th * half.x + sin_th * half.y;
        let py = cos_th * half.y - sin_th * half.x;
        let pl = (px * px) / (rx * rx) + (py * py) / (ry * ry);
        if pl > 1.0 {
            let pl = pl.sqrt();
            rx *= pl;
            ry *= pl;
        }

        // into the unit circle frame of the ellipse
        let to_unit = |p: DVec2| {
            DVec2::new(
                (cos_th * p.x + sin_th * p.y) / rx,
                (-sin_th * p.x + cos_th * p.y) / ry,
            )
        };
        let p0 = to_unit(self.start);
        let p1 = to_unit(self.end);

        let d = (p1 - p0).length_squared();
        let mut sfactor = (1.0 / d - 0.25).max(0.0).sqrt();
        if self.sweep == self.large_arc {
            sfactor = -sfactor;
        }
        let center = DVec2::new(
            0.5 * (p0.x + p1.x) - sfactor * (p1.y - p0.y),
            0.5 * (p0.y + p1.y) + sfactor * (p1.x - p0.x),
        );

        let th0 = (p0.y - center.y).atan2(p0.x - center.x);
        let th1 = (p1.y - center.y).atan2(p1.x - center.x);
        let mut th_arc = th1 - th0;
        if th_arc < 0.0 && self.sweep {
            th_arc += TAU;
        } else if th_arc > 0.0 && !self.sweep {
            th_arc -= TAU;
        }

        let pieces = (th_arc / MAX_PIECE).abs().ceil() as usize;
        let from_unit = |p: DVec2| {
            DVec2::new(
                cos_th * rx * p.x - sin_th * ry * p.y,
                sin_th * rx * p.x + cos_th * ry * p.y,
            )
        };
        (0..pieces)
            .map(|i| {
                let a = th0 + i as f64 * th_arc / pieces as f64;
                let b = th0 + (i + 1) as f64 * th_arc / pieces as f64;
                unit_arc_piece(center, a, b).map(from_unit)
            })
            .collect()
    }
}

/// One cubic approximating the unit circle arc about `center` from angle
/// `a` to angle `b`.
fn unit_arc_piece(center: DVec2, a: f64, b: f64) -> CubicPiece {
    let half = 0.5 * (b - a);
    let t = (8.0 / 3.0) * (half * 0.5).sin().powi(2) / half.sin();
    let (sin_a, cos_a) = a.sin_cos();
    let (sin_b, cos_b) = b.sin_cos();
    let end = center + DVec2::new(cos_b, sin_b);
    [
        center + DVec2::new(cos_a - t * sin_a, sin_a + t * cos_a),
        end + DVec2::new(t * sin_b, -t * cos_b),
        end,
    ]
}

/// A circular arc in the z = 0 plane as a command stream.
///
/// Angles are in degrees, measured counter clockwise from +x. The arc runs
/// counter clockwise from `start_angle` to `end_angle` when
/// `counter_clockwise`, clockwise otherwise. Spans that are (almost) zero
/// or a full turn produce a full circle starting at `(cx, cy - r)`.
pub fn circular_arc(
    center: DVec2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    counter_clockwise: bool,
) -> Cgo {
    let st = start_angle.to_radians();
    let ed = end_angle.to_radians();
    let start = center + radius * DVec2::new(st.cos(), st.sin());
    let end = center + radius * DVec2::new(ed.cos(), ed.sin());

    let mut delta = if counter_clockwise { ed - st } else { st - ed };
    if delta < 0.0 {
        delta += TAU;
    }
    if delta > TAU {
        delta -= TAU;
    }

    if delta.abs() < 0.01 || delta.abs() > TAU - 0.01 {
        return full_circle(center, radius);
    }

    let arc = EllipticalArc {
        start,
        radii: DVec2::splat(radius),
        x_rotation: 0.0,
        large_arc: delta > PI,
        sweep: counter_clockwise,
        end,
    };
    let mut out = Cgo::new().cmd('M').pt(start.x, start.y, 0.0);
    for [c1, c2, p] in arc.to_cubics() {
        out = out
            .cmd('C')
            .pt(c1.x, c1.y, 0.0)
            .pt(c2.x, c2.y, 0.0)
            .pt(p.x, p.y, 0.0);
    }
    out
}

fn full_circle(c: DVec2, r: f64) -> Cgo {
    let k = CIRCLE_KAPPA * r;
    Cgo::new()
        .cmd('M')
        .pt(c.x, c.y - r, 0.0)
        .cmd('C')
        .pt(c.x + k, c.y - r, 0.0)
        .pt(c.x + r, c.y - k, 0.0)
        .pt(c.x + r, c.y, 0.0)
        .pt(c.x + r, c.y + k, 0.0)
        .pt(c.x + k, c.y + r, 0.0)
        .pt(c.x, c.y + r, 0.0)
        .pt(c.x - k, c.y + r, 0.0)
        .pt(c.x - r, c.y + k, 0.0)
        .pt(c.x - r, c.y, 0.0)
        .pt(c.x - r, c.y - k, 0.0)
        .pt(c.x - k, c.y - r, 0.0)
        .pt(c.x, c.y - r, 0.0)
}
