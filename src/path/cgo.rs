//! Compiler from a [`Cgo`] command stream to [`DrawPrimitive`]s.
//!
//! # Stream rules
//!
//! - The first command is always treated as an absolute move, whatever its
//!   letter.
//! - Extra triplets after `M`/`m` are line-tos (polyline shorthand).
//! - `L`/`l` and `C`/`c` repeat for as long as whole coordinate groups
//!   remain; `Q`/`q` take a single segment.
//! - Lowercase coordinates are relative to the pen at the start of each
//!   segment, including the control points of a curve.
//! - `Z`/`z` closes the subpath and returns the pen to its start.
//! - Unknown letters are skipped together with their numbers, and a
//!   trailing partial coordinate group is dropped.

use glam::DVec3;

use crate::log::{debug, trace};

use super::{Cgo, DrawPrimitive, segments};

/// Pen position while compiling
#[derive(Debug, Clone, Copy, Default)]
struct Pen {
    pos: DVec3,
    subpath_start: DVec3,
}

impl Pen {
    /// Resolve a coordinate triplet against the pen.
    fn resolve(&self, t: &[f64], relative: bool) -> DVec3 {
        let v = DVec3::new(t[0], t[1], t[2]);
        if relative { self.pos + v } else { v }
    }
}

/// Compile a command stream into draw primitives.
pub fn compile(cgo: &Cgo) -> Vec<DrawPrimitive> {
    let mut prims = Vec::new();
    let mut pen = Pen::default();

    for (index, (letter, nums)) in segments(cgo.tokens()).into_iter().enumerate() {
        let letter = if index == 0 { 'M' } else { letter };
        let relative = letter.is_ascii_lowercase();

        match letter.to_ascii_uppercase() {
            'M' => {
                let mut triplets = nums.chunks_exact(3);
                if let Some(t) = triplets.next() {
                    pen.pos = pen.resolve(t, relative);
                    pen.subpath_start = pen.pos;
                    prims.push(DrawPrimitive::move_to(pen.pos));
                }
                for t in triplets {
                    pen.pos = pen.resolve(t, relative);
                    prims.push(DrawPrimitive::line_to(pen.pos));
                }
            }
            'L' => {
                for t in nums.chunks_exact(3) {
                    pen.pos = pen.resolve(t, relative);
                    prims.push(DrawPrimitive::line_to(pen.pos));
                }
            }
            'C' => {
                for g in nums.chunks_exact(9) {
                    let c1 = pen.resolve(&g[0..3], relative);
                    let c2 = pen.resolve(&g[3..6], relative);
                    let end = pen.resolve(&g[6..9], relative);
                    pen.pos = end;
                    prims.push(DrawPrimitive::cubic_to(c1, c2, end));
                }
            }
            'Q' => {
                if let Some(g) = nums.chunks_exact(6).next() {
                    let c1 = pen.resolve(&g[0..3], relative);
                    let end = pen.resolve(&g[3..6], relative);
                    pen.pos = end;
                    prims.push(DrawPrimitive::quad_to(c1, end));
                }
            }
            'Z' => {
                pen.pos = pen.subpath_start;
                prims.push(DrawPrimitive::ClosePath);
            }
            _ => trace!(%letter, "skipping unsupported path command"),
        }
    }

    debug!(primitives = prims.len(), "compiled path");
    prims
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends(prims: &[DrawPrimitive]) -> Vec<DVec3> {
        prims.iter().filter_map(|p| p.end()).map(|p| p.original).collect()
    }

    fn cgo(s: &str) -> Cgo {
        s.parse().unwrap()
    }

    #[test]
    fn first_command_is_absolute_move() {
        let prims = compile(&cgo("l 1 2 3 l 1 0 0"));
        assert!(matches!(prims[0], DrawPrimitive::MoveTo(_)));
        assert_eq!(ends(&prims), [DVec3::new(1.0, 2.0, 3.0), DVec3::new(2.0, 2.0, 3.0)]);
    }

    #[test]
    fn extra_move_triplets_become_lines() {
        let prims = compile(&cgo("M 0 0 0 1 0 0 1 1 0"));
        assert_eq!(prims.len(), 3);
        assert!(matches!(prims[1], DrawPrimitive::LineTo(_)));
        assert!(matches!(prims[2], DrawPrimitive::LineTo(_)));
    }

    #[test]
    fn relative_move_polyline_accumulates() {
        let prims = compile(&cgo("M 0 0 0 m 1 0 0 1 0 0"));
        assert_eq!(
            ends(&prims),
            [DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0), DVec3::new(2.0, 0.0, 0.0)]
        );
    }

    #[test]
    fn relative_cubic_is_relative_to_segment_start() {
        let prims = compile(&cgo("M 1 1 1 c 0 1 0 1 1 0 1 0 2"));
        let DrawPrimitive::CubicTo(pts) = &prims[1] else {
            panic!("expected cubic, got {:?}", prims[1]);
        };
        assert_eq!(pts[0].original, DVec3::new(1.0, 2.0, 1.0));
        assert_eq!(pts[1].original, DVec3::new(2.0, 2.0, 1.0));
        assert_eq!(pts[2].original, DVec3::new(2.0, 1.0, 3.0));
    }

    #[test]
    fn cubic_repeats_while_coordinates_remain() {
        let prims = compile(&cgo("M 0 0 0 C 0 1 0 1 1 0 1 0 0 1 -1 0 2 -1 0 2 0 0"));
        assert_eq!(prims.len(), 3);
        assert_eq!(prims[2].end().unwrap().original, DVec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn quadratic_takes_one_segment() {
        let prims = compile(&cgo("M 0 0 0 Q 1 1 0 2 0 0 3 1 0 4 0 0"));
        assert_eq!(prims.len(), 2);
        assert!(matches!(prims[1], DrawPrimitive::QuadTo(_)));
    }

    #[test]
    fn close_returns_pen_to_subpath_start() {
        let prims = compile(&cgo("M 5 0 0 l 1 0 0 z l 0 1 0"));
        assert_eq!(prims.len(), 4);
        assert!(matches!(prims[2], DrawPrimitive::ClosePath));
        assert_eq!(prims[3].end().unwrap().original, DVec3::new(5.0, 1.0, 0.0));
    }

    #[test]
    fn unknown_commands_are_ignored() {
        let prims = compile(&cgo("M 0 0 0 X 9 9 9 L 1 0 0"));
        assert_eq!(ends(&prims), [DVec3::ZERO, DVec3::X]);
    }

    #[test]
    fn short_coordinates_truncate_the_command() {
        let prims = compile(&cgo("M 0 0 0 L 1 0 0 2 0"));
        assert_eq!(ends(&prims), [DVec3::ZERO, DVec3::X]);
        let prims = compile(&cgo("M 0 0 0 C 1 1 0 2 2 0"));
        assert_eq!(prims.len(), 1);
    }

    #[test]
    fn empty_stream_compiles_to_nothing() {
        assert!(compile(&Cgo::new()).is_empty());
    }
}
