//! Stroke font for text leaves.
//!
//! Text is drawn as line work, not filled glyphs, so a string becomes an
//! ordinary [`Cgo`] stream that rotates and projects like any other path.

mod glyphs;

use glam::DVec3;

use crate::log::trace;
use crate::path::Cgo;

use glyphs::GLYPHS;

/// Height of the character cell in glyph units; a font size of `n`
/// draws the cell `n` units high.
pub const CELL_HEIGHT: f64 = 33.0;

/// Reference height used for vertical alignment of a string.
pub const TEXT_HEIGHT: f64 = 29.0;

/// One glyph: polylines in glyph units and the horizontal advance.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    pub ch: char,
    pub advance: u8,
    pub strokes: &'static [&'static [(i8, i8)]],
}

pub fn glyph(ch: char) -> Option<&'static Glyph> {
    GLYPHS
        .binary_search_by_key(&ch, |g| g.ch)
        .ok()
        .map(|i| &GLYPHS[i])
}

/// The outline of a whole string, in glyph units.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOutline {
    pub cgo: Cgo,
    pub width: f64,
    pub height: f64,
}

/// Lay out `text` left to right from the origin on the baseline.
/// Characters without a glyph are skipped.
pub fn string_outline(text: &str) -> TextOutline {
    let mut cgo = Cgo::new();
    let mut advance = 0.0;
    for ch in text.chars() {
        let Some(g) = glyph(ch) else {
            trace!(?ch, "no glyph");
            continue;
        };
        for stroke in g.strokes {
            for (i, &(x, y)) in stroke.iter().enumerate() {
                if i < 2 {
                    cgo = cgo.cmd(if i == 0 { 'M' } else { 'L' });
                }
                cgo.extend_point(DVec3::new(f64::from(x) + advance, f64::from(y), 0.0));
            }
        }
        advance += f64::from(g.advance);
    }
    TextOutline {
        cgo,
        width: advance,
        height: TEXT_HEIGHT,
    }
}

/// Width of `text` drawn at `font_size`.
pub fn string_width(font_size: f64, text: &str) -> f64 {
    text.chars()
        .filter_map(glyph)
        .map(|g| f64::from(g.advance) * font_size / 25.0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{DrawPrimitive, compile};

    #[test]
    fn table_is_sorted_and_covers_ascii() {
        assert!(GLYPHS.windows(2).all(|w| w[0].ch < w[1].ch));
        for ch in ' '..='~' {
            assert!(glyph(ch).is_some(), "missing glyph for {ch:?}");
        }
        assert_eq!(glyph('\u{03A9}').map(|g| g.advance), Some(20));
        assert!(glyph('\u{263A}').is_none());
    }

    #[test]
    fn glyphs_are_shifted_by_previous_advances() {
        let one = string_outline("I");
        let two = string_outline("II");
        let advance = glyph('I').unwrap().advance as f64;
        assert_eq!(two.width, 2.0 * advance);
        assert_eq!(two.height, TEXT_HEIGHT);

        let prims = compile(&two.cgo);
        let first = compile(&one.cgo);
        assert_eq!(prims.len(), 2 * first.len());
        let x0 = first[0].end().unwrap().original.x;
        let x1 = prims[first.len()].end().unwrap().original.x;
        assert_eq!(x1 - x0, advance);
    }

    #[test]
    fn every_stroke_starts_with_a_move() {
        let prims = compile(&string_outline("!").cgo);
        let kinds: Vec<_> = prims.iter().map(DrawPrimitive::letter).collect();
        assert_eq!(kinds, ['M', 'L', 'M', 'L', 'L', 'L', 'L']);
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let text = string_outline("A\u{263A}A");
        assert_eq!(text.width, 2.0 * glyph('A').unwrap().advance as f64);
    }

    #[test]
    fn width_scales_with_font_size() {
        assert_eq!(string_width(25.0, "  "), 32.0);
        assert_eq!(string_width(12.5, " "), 8.0);
    }
}
