//! Ready-made outlines in the z = 0 plane, centred on the origin.
//!
//! Every function returns a relative [`Cgo`] stream; the first `m` is
//! taken as absolute when compiled.

use super::Cgo;

const K: f64 = 0.276_14;
const J: f64 = 0.223_86;

/// Circle of diameter `d`, four cubics starting at the left-most point.
pub fn circle(d: f64) -> Cgo {
    ellipse(d, d)
}

/// Ellipse `w` wide and `h` high. A non-positive `h` gives a circle.
pub fn ellipse(w: f64, h: f64) -> Cgo {
    let h = if h > 0.0 { h } else { w };
    Cgo::new()
        .cmd('m')
        .pt(-0.5 * w, 0.0, 0.0)
        .cmd('c')
        .pt(0.0, -K * h, 0.0)
        .pt(J * w, -0.5 * h, 0.0)
        .pt(0.5 * w, -0.5 * h, 0.0)
        .cmd('c')
        .pt(K * w, 0.0, 0.0)
        .pt(0.5 * w, J * h, 0.0)
        .pt(0.5 * w, 0.5 * h, 0.0)
        .cmd('c')
        .pt(0.0, K * h, 0.0)
        .pt(-J * w, 0.5 * h, 0.0)
        .pt(-0.5 * w, 0.5 * h, 0.0)
        .cmd('c')
        .pt(-K * w, 0.0, 0.0)
        .pt(-0.5 * w, -J * h, 0.0)
        .pt(-0.5 * w, -0.5 * h, 0.0)
}

pub fn square(w: f64) -> Cgo {
    Cgo::new()
        .cmd('m')
        .pt(0.5 * w, -0.5 * w, 0.0)
        .cmd('l')
        .pt(0.0, w, 0.0)
        .pt(-w, 0.0, 0.0)
        .pt(0.0, -w, 0.0)
        .cmd('z')
}

/// Equilateral triangle with side `s`, apex up.
pub fn triangle(s: f64) -> Cgo {
    Cgo::new()
        .cmd('m')
        .pt(0.5 * s, -0.289 * s, 0.0)
        .cmd('l')
        .pt(-0.5 * s, 0.866 * s, 0.0)
        .pt(-0.5 * s, -0.866 * s, 0.0)
        .cmd('z')
}

/// Plus sign `w` across.
pub fn cross(w: f64) -> Cgo {
    Cgo::new()
        .cmd('m')
        .pt(-0.5 * w, 0.0, 0.0)
        .cmd('l')
        .pt(w, 0.0, 0.0)
        .cmd('m')
        .pt(-0.5 * w, -0.5 * w, 0.0)
        .cmd('l')
        .pt(0.0, w, 0.0)
}

/// Diagonal cross with arms of length `d`.
pub fn ex(d: f64) -> Cgo {
    Cgo::new()
        .cmd('m')
        .pt(-0.3535 * d, -0.3535 * d, 0.0)
        .cmd('l')
        .pt(0.707 * d, 0.707 * d, 0.0)
        .cmd('m')
        .pt(-0.707 * d, 0.0, 0.0)
        .cmd('l')
        .pt(0.707 * d, -0.707 * d, 0.0)
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::path::{DrawPrimitive, centroid, compile};

    fn ends(cgo: &Cgo) -> Vec<DVec3> {
        compile(cgo)
            .iter()
            .filter_map(DrawPrimitive::end)
            .map(|p| p.original)
            .collect()
    }

    fn assert_vec_eq(actual: DVec3, expected: DVec3) {
        assert!(
            (actual - expected).length() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn circle_closes_on_itself() {
        let pts = ends(&circle(10.0));
        assert_eq!(pts.len(), 5);
        assert_vec_eq(pts[0], DVec3::new(-5.0, 0.0, 0.0));
        assert_vec_eq(pts[2], DVec3::new(5.0, 0.0, 0.0));
        assert_vec_eq(pts[4], pts[0]);
    }

    #[test]
    fn circle_faces_the_viewer() {
        let prims = compile(&circle(2.0));
        let c = centroid(&prims).unwrap();
        assert_vec_eq(crate::path::face_normal(&prims, c), DVec3::Z);
    }

    #[test]
    fn ellipse_falls_back_to_circle() {
        assert_eq!(ellipse(4.0, 0.0), circle(4.0));
        let pts = ends(&ellipse(4.0, 2.0));
        assert_vec_eq(pts[1], DVec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn square_corners() {
        let pts = ends(&square(2.0));
        assert_eq!(
            pts,
            [
                DVec3::new(1.0, -1.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(-1.0, 1.0, 0.0),
                DVec3::new(-1.0, -1.0, 0.0),
            ]
        );
    }

    #[test]
    fn cross_has_two_strokes() {
        let prims = compile(&cross(2.0));
        let moves = prims
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::MoveTo(_)))
            .count();
        assert_eq!(moves, 2);
        assert_eq!(ends(&ex(1.0)).len(), 4);
        assert_eq!(ends(&triangle(1.0)).len(), 3);
    }
}
