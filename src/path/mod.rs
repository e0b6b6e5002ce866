//! Path geometry: draw primitives, the 3D command stream, and the SVG adapter.
//!
//! Geometry enters the scene as a [`Cgo`] stream, a flat list of command
//! letters and numbers in (x, y, z) triplets:
//!
//! ```text
//! M 0 0 0  L 10 0 0  10 10 0  Z
//! ```
//!
//! [`cgo::compile`] turns the stream into [`DrawPrimitive`]s. The
//! [`svg`] adapter lowers 2D SVG path data into the same stream, and
//! [`shapes`] provides a few ready-made outlines.

pub mod arc;
pub mod cgo;
pub mod shapes;
pub mod svg;

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use pest::Parser;
use pest::error::InputLocation;
use serde::{Deserialize, Serialize};

use crate::errors::{PathError, SourceContext};
use crate::point::Point3;
use crate::transform::Transform;
use crate::{PathParser, Rule};

pub use cgo::compile;

// ============================================================================
// Draw primitives
// ============================================================================

/// One drawing step of a leaf's outline.
///
/// Each variant stores its control points followed by its end point, so
/// the last entry of [`points`](Self::points) is always the end point.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    MoveTo([Point3; 1]),
    LineTo([Point3; 1]),
    /// Two control points, then the end point
    CubicTo([Point3; 3]),
    /// One control point, then the end point
    QuadTo([Point3; 2]),
    ClosePath,
}

impl DrawPrimitive {
    pub fn move_to(p: DVec3) -> Self {
        DrawPrimitive::MoveTo([p.into()])
    }

    pub fn line_to(p: DVec3) -> Self {
        DrawPrimitive::LineTo([p.into()])
    }

    pub fn cubic_to(c1: DVec3, c2: DVec3, end: DVec3) -> Self {
        DrawPrimitive::CubicTo([c1.into(), c2.into(), end.into()])
    }

    pub fn quad_to(c1: DVec3, end: DVec3) -> Self {
        DrawPrimitive::QuadTo([c1.into(), end.into()])
    }

    /// Control points followed by the end point; empty for `ClosePath`.
    pub fn points(&self) -> &[Point3] {
        match self {
            DrawPrimitive::MoveTo(p) | DrawPrimitive::LineTo(p) => p,
            DrawPrimitive::CubicTo(p) => p,
            DrawPrimitive::QuadTo(p) => p,
            DrawPrimitive::ClosePath => &[],
        }
    }

    pub fn points_mut(&mut self) -> &mut [Point3] {
        match self {
            DrawPrimitive::MoveTo(p) | DrawPrimitive::LineTo(p) => p,
            DrawPrimitive::CubicTo(p) => p,
            DrawPrimitive::QuadTo(p) => p,
            DrawPrimitive::ClosePath => &mut [],
        }
    }

    pub fn end(&self) -> Option<&Point3> {
        self.points().last()
    }

    pub fn controls(&self) -> &[Point3] {
        let pts = self.points();
        &pts[..pts.len().saturating_sub(1)]
    }

    /// The command letter used for this primitive in a [`Cgo`] stream.
    pub fn letter(&self) -> char {
        match self {
            DrawPrimitive::MoveTo(_) => 'M',
            DrawPrimitive::LineTo(_) => 'L',
            DrawPrimitive::CubicTo(_) => 'C',
            DrawPrimitive::QuadTo(_) => 'Q',
            DrawPrimitive::ClosePath => 'Z',
        }
    }

    pub fn hard_transform(&mut self, t: &Transform) {
        for p in self.points_mut() {
            p.hard_transform(t);
        }
    }

    pub fn soft_transform(&mut self, t: &Transform) {
        for p in self.points_mut() {
            p.soft_transform(t);
        }
    }

    pub fn project(&mut self, viewpoint_distance: f64) {
        for p in self.points_mut() {
            p.project(viewpoint_distance);
        }
    }
}

/// Mean of all end points. `None` when no primitive has an end point.
pub fn centroid(prims: &[DrawPrimitive]) -> Option<DVec3> {
    let (sum, n) = prims
        .iter()
        .filter_map(DrawPrimitive::end)
        .fold((DVec3::ZERO, 0usize), |(sum, n), p| (sum + p.original, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Unit normal of the plane through `p1`, `p2`, `p3`, following the right
/// hand rule on `(p2 - p1) x (p3 - p1)`. Degenerate input gives +Z.
pub fn calc_normal(p1: DVec3, p2: DVec3, p3: DVec3) -> DVec3 {
    (p2 - p1).cross(p3 - p1).try_normalize().unwrap_or(DVec3::Z)
}

/// Angle in degrees between `p2 - p1` and `p3 - p1`. Degenerate input gives 0.
pub fn calc_inc_angle(p1: DVec3, p2: DVec3, p3: DVec3) -> f64 {
    let a = p2 - p1;
    let b = p3 - p1;
    let denominator = a.length() * b.length();
    if denominator == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Face normal of an outline, from its centroid and the end points of the
/// second and third primitives. A two-primitive curve uses its first
/// control point in place of the missing third point.
pub fn face_normal(prims: &[DrawPrimitive], centroid: DVec3) -> DVec3 {
    let end = |i: usize| prims.get(i).and_then(DrawPrimitive::end).map(|p| p.original);
    match (end(1), end(2)) {
        (Some(a), Some(b)) => calc_normal(centroid, a, b),
        (Some(a), None) => match prims[1].controls().first() {
            Some(c) => calc_normal(centroid, a, c.original),
            None => DVec3::Z,
        },
        _ => DVec3::Z,
    }
}

// ============================================================================
// Command stream
// ============================================================================

/// One entry of a command stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Num(f64),
    Cmd(char),
}

/// A 3D command stream: command letters, each followed by (x, y, z) triplets.
///
/// Uppercase letters are absolute, lowercase are relative to the pen.
/// Supported commands are `M L C Q Z`; anything else is ignored when the
/// stream is compiled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cgo(Vec<Token>);

impl Cgo {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cmd(mut self, c: char) -> Self {
        self.0.push(Token::Cmd(c));
        self
    }

    #[must_use]
    pub fn pt(mut self, x: f64, y: f64, z: f64) -> Self {
        self.0.extend([Token::Num(x), Token::Num(y), Token::Num(z)]);
        self
    }

    pub fn push(&mut self, token: Token) {
        self.0.push(token);
    }

    pub fn extend_point(&mut self, p: DVec3) {
        self.0.extend([Token::Num(p.x), Token::Num(p.y), Token::Num(p.z)]);
    }

    pub fn extend(&mut self, other: &Cgo) {
        self.0.extend_from_slice(&other.0);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize primitives back into a stream, rounding to `decimals`
    /// places. Coordinates are the original (hard transformed) ones.
    pub fn from_primitives(prims: &[DrawPrimitive], decimals: i32) -> Cgo {
        let scale = 10f64.powi(decimals);
        let rnd = |v: f64| (v * scale).round() / scale;
        let mut out = Cgo::new();
        for prim in prims {
            out = out.cmd(prim.letter());
            for p in prim.points() {
                out = out.pt(rnd(p.original.x), rnd(p.original.y), rnd(p.original.z));
            }
        }
        out
    }

    /// Shift every coordinate triplet by `d`, leaving commands in place.
    pub(crate) fn shifted(&self, d: DVec3) -> Cgo {
        let mut out = Cgo::new();
        for (cmd, nums) in segments(&self.0) {
            out = out.cmd(cmd);
            for t in nums.chunks_exact(3) {
                out = out.pt(t[0] + d.x, t[1] + d.y, t[2] + d.z);
            }
        }
        out
    }
}

impl From<Vec<Token>> for Cgo {
    fn from(tokens: Vec<Token>) -> Self {
        Cgo(tokens)
    }
}

impl FromStr for Cgo {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        tokenize(s, "<cgo path>").map(Cgo)
    }
}

impl fmt::Display for Cgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match token {
                Token::Num(v) => write!(f, "{v}")?,
                Token::Cmd(c) => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

/// Split a token list at each command letter. Numbers before the first
/// command have no command to belong to and are dropped.
pub(crate) fn segments(tokens: &[Token]) -> Vec<(char, Vec<f64>)> {
    let mut segs: Vec<(char, Vec<f64>)> = Vec::new();
    for token in tokens {
        match *token {
            Token::Cmd(c) => segs.push((c, Vec::new())),
            Token::Num(v) => {
                if let Some((_, nums)) = segs.last_mut() {
                    nums.push(v);
                }
            }
        }
    }
    segs
}

/// Read path data into tokens.
pub(crate) fn tokenize(source: &str, name: &str) -> Result<Vec<Token>, PathError> {
    let ctx = SourceContext::new(name, source);
    let pairs = PathParser::parse(Rule::path_data, source).map_err(|e| {
        let (start, end) = match e.location {
            InputLocation::Pos(p) => (p, p + 1),
            InputLocation::Span(span) => span,
        };
        let start = start.min(source.len());
        let len = end.min(source.len()).saturating_sub(start);
        PathError::Syntax {
            message: e.variant.message().to_string(),
            src: ctx.named_source(),
            span: (start, len).into(),
        }
    })?;

    let mut tokens = Vec::new();
    for pair in pairs.flatten() {
        match pair.as_rule() {
            Rule::number => {
                let text = pair.as_str();
                let value = text
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| PathError::InvalidNumber {
                        text: text.to_string(),
                        src: ctx.named_source(),
                        span: (pair.as_span().start(), text.len()).into(),
                    })?;
                tokens.push(Token::Num(value));
            }
            Rule::command => {
                if let Some(c) = pair.as_str().chars().next() {
                    tokens.push(Token::Cmd(c));
                }
            }
            _ => {}
        }
    }
    Ok(tokens)
}
