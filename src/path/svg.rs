//! Lowering of 2D SVG path data into a 3D command stream.
//!
//! SVG data is drawn y-down, the scene is y-up, so every y coordinate is
//! negated. All output commands are absolute with z = 0: `H V` become line
//! segments, `S T` get their reflected control point resolved, and each
//! `A` is replaced by the cubic pieces of its arc.

use glam::{DVec2, DVec3};

use crate::errors::PathError;
use crate::log::{debug, trace};

use super::arc::EllipticalArc;
use super::{Cgo, Token, segments, tokenize};

/// Lower SVG path data. `x_offset`/`y_offset` are added to every absolute
/// SVG coordinate before the flip, which moves a drawing made far from the
/// SVG origin back to it.
pub fn svg_to_cgo(d: &str, x_offset: f64, y_offset: f64) -> Result<Cgo, PathError> {
    let tokens = tokenize(d, "<svg path>")?;
    let mut lowering = Lowering::new(DVec2::new(x_offset, y_offset));
    for (index, (letter, nums)) in segments(&tokens).into_iter().enumerate() {
        let letter = if index == 0 { 'M' } else { letter };
        lowering.segment(letter, &nums);
    }
    debug!(tokens = lowering.out.tokens().len(), "lowered svg path");
    Ok(lowering.out)
}

/// What the previous segment left behind for a smooth curve to reflect.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LastControl {
    None,
    Cubic(DVec2),
    Quad(DVec2),
}

/// Pen state of the lowering pass, in SVG (y-down) coordinates.
struct Lowering {
    offset: DVec2,
    pen: DVec2,
    subpath_start: DVec2,
    last: LastControl,
    out: Cgo,
}

impl Lowering {
    fn new(offset: DVec2) -> Self {
        Lowering {
            offset,
            pen: DVec2::ZERO,
            subpath_start: DVec2::ZERO,
            last: LastControl::None,
            out: Cgo::new(),
        }
    }

    fn resolve(&self, x: f64, y: f64, relative: bool) -> DVec2 {
        if relative {
            self.pen + DVec2::new(x, y)
        } else {
            self.offset + DVec2::new(x, y)
        }
    }

    fn emit(&mut self, letter: char, pts: &[DVec2]) {
        self.out.push(Token::Cmd(letter));
        for p in pts {
            self.out.extend_point(DVec3::new(p.x, -p.y, 0.0));
        }
    }

    fn segment(&mut self, letter: char, nums: &[f64]) {
        let relative = letter.is_ascii_lowercase();
        match letter.to_ascii_uppercase() {
            'M' => {
                let mut pairs = nums.chunks_exact(2);
                if let Some(p) = pairs.next() {
                    self.pen = self.resolve(p[0], p[1], relative);
                    self.subpath_start = self.pen;
                    self.emit('M', &[self.pen]);
                }
                for p in pairs {
                    self.pen = self.resolve(p[0], p[1], relative);
                    self.emit('L', &[self.pen]);
                }
                self.last = LastControl::None;
            }
            'L' => {
                for p in nums.chunks_exact(2) {
                    self.pen = self.resolve(p[0], p[1], relative);
                    self.emit('L', &[self.pen]);
                }
                self.last = LastControl::None;
            }
            'H' => {
                for &x in nums {
                    self.pen.x = if relative { self.pen.x + x } else { self.offset.x + x };
                    self.emit('L', &[self.pen]);
                }
                self.last = LastControl::None;
            }
            'V' => {
                for &y in nums {
                    self.pen.y = if relative { self.pen.y + y } else { self.offset.y + y };
                    self.emit('L', &[self.pen]);
                }
                self.last = LastControl::None;
            }
            'C' => {
                for g in nums.chunks_exact(6) {
                    let c1 = self.resolve(g[0], g[1], relative);
                    let c2 = self.resolve(g[2], g[3], relative);
                    let end = self.resolve(g[4], g[5], relative);
                    self.cubic(c1, c2, end);
                }
            }
            'S' => {
                for g in nums.chunks_exact(4) {
                    let c1 = match self.last {
                        LastControl::Cubic(c) => 2.0 * self.pen - c,
                        _ => self.pen,
                    };
                    let c2 = self.resolve(g[0], g[1], relative);
                    let end = self.resolve(g[2], g[3], relative);
                    self.cubic(c1, c2, end);
                }
            }
            'Q' => {
                for g in nums.chunks_exact(4) {
                    let c = self.resolve(g[0], g[1], relative);
                    let end = self.resolve(g[2], g[3], relative);
                    self.quad(c, end);
                }
            }
            'T' => {
                for g in nums.chunks_exact(2) {
                    let c = match self.last {
                        LastControl::Quad(c) => 2.0 * self.pen - c,
                        _ => self.pen,
                    };
                    let end = self.resolve(g[0], g[1], relative);
                    self.quad(c, end);
                }
            }
            'A' => {
                for g in nums.chunks_exact(7) {
                    let end = self.resolve(g[5], g[6], relative);
                    self.arc(DVec2::new(g[0], g[1]), g[2], g[3] != 0.0, g[4] != 0.0, end);
                }
                self.last = LastControl::None;
            }
            'Z' => {
                self.out.push(Token::Cmd('Z'));
                self.pen = self.subpath_start;
                self.last = LastControl::None;
            }
            _ => trace!(%letter, "skipping unsupported svg command"),
        }
    }

    fn cubic(&mut self, c1: DVec2, c2: DVec2, end: DVec2) {
        self.emit('C', &[c1, c2, end]);
        self.pen = end;
        self.last = LastControl::Cubic(c2);
    }

    fn quad(&mut self, c: DVec2, end: DVec2) {
        self.emit('Q', &[c, end]);
        self.pen = end;
        self.last = LastControl::Quad(c);
    }

    /// The arc is converted in y-up space: the flip mirrors the rotation
    /// and reverses the sweep.
    fn arc(&mut self, radii: DVec2, x_rotation: f64, large_arc: bool, sweep: bool, end: DVec2) {
        let flip = |p: DVec2| DVec2::new(p.x, -p.y);
        let arc = EllipticalArc {
            start: flip(self.pen),
            radii,
            x_rotation: -x_rotation,
            large_arc,
            sweep: !sweep,
            end: flip(end),
        };
        let pieces = arc.to_cubics();
        if pieces.is_empty() {
            if end != self.pen {
                self.emit('L', &[end]);
            }
        } else {
            for piece in pieces {
                let [c1, c2, p] = piece.map(flip);
                self.emit('C', &[c1, c2, p]);
            }
        }
        self.pen = end;
    }
}
