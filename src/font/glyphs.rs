//! Hershey simplex glyphs: printable ASCII plus Greek capitals and
//! lower case and a few symbols.
//!
//! Each glyph is a list of polylines on a 33 unit cell, baseline at y = 0,
//! cap height 21, descenders to -7. Sorted by code point.

use super::Glyph;

#[rustfmt::skip]
pub(super) static GLYPHS: &[Glyph] = &[
    Glyph {
        ch: ' ',
        advance: 16,
        strokes: &[],
    },
    Glyph {
        ch: '!',
        advance: 10,
        strokes: &[&[(5, 21), (5, 7)], &[(5, 2), (4, 1), (5, 0), (6, 1), (5, 2)]],
    },
    Glyph {
        ch: '"',
        advance: 16,
        strokes: &[&[(4, 21), (4, 14)], &[(12, 21), (12, 14)]],
    },
    Glyph {
        ch: '#',
        advance: 21,
        strokes: &[&[(11, 25), (4, -7)], &[(17, 25), (10, -7)], &[(4, 12), (18, 12)], &[(3, 6), (17, 6)]],
    },
    Glyph {
        ch: '$',
        advance: 20,
        strokes: &[&[(8, 25), (8, -4)], &[(12, 25), (12, -4)], &[(17, 18), (15, 20), (12, 21), (8, 21), (5, 20), (3, 18), (3, 16), (4, 14), (5, 13), (7, 12), (13, 10), (15, 9), (16, 8), (17, 6), (17, 3), (15, 1), (12, 0), (8, 0), (5, 1), (3, 3)]],
    },
    Glyph {
        ch: '%',
        advance: 24,
        strokes: &[&[(21, 21), (3, 0)], &[(8, 21), (10, 19), (10, 17), (9, 15), (7, 14), (5, 14), (3, 16), (3, 18), (4, 20), (6, 21), (8, 21), (10, 20), (13, 19), (16, 19), (19, 20), (21, 21)], &[(17, 7), (15, 6), (14, 4), (14, 2), (16, 0), (18, 0), (20, 1), (21, 3), (21, 5), (19, 7), (17, 7)]],
    },
    Glyph {
        ch: '&',
        advance: 26,
        strokes: &[&[(23, 12), (23, 13), (22, 14), (21, 14), (20, 13), (19, 11), (17, 6), (15, 3), (13, 1), (11, 0), (7, 0), (5, 1), (4, 2), (3, 4), (3, 6), (4, 8), (5, 9), (12, 13), (13, 14), (14, 16), (14, 18), (13, 20), (11, 21), (9, 20), (8, 18), (8, 16), (9, 13), (11, 10), (16, 3), (18, 1), (20, 0), (22, 0), (23, 1), (23, 2)]],
    },
    Glyph {
        ch: '\'',
        advance: 10,
        strokes: &[&[(5, 19), (4, 20), (5, 21), (6, 20), (6, 18), (5, 16), (4, 15)]],
    },
    Glyph {
        ch: '(',
        advance: 14,
        strokes: &[&[(11, 25), (9, 23), (7, 20), (5, 16), (4, 11), (4, 7), (5, 2), (7, -2), (9, -5), (11, -7)]],
    },
    Glyph {
        ch: ')',
        advance: 14,
        strokes: &[&[(3, 25), (5, 23), (7, 20), (9, 16), (10, 11), (10, 7), (9, 2), (7, -2), (5, -5), (3, -7)]],
    },
    Glyph {
        ch: '*',
        advance: 16,
        strokes: &[&[(8, 15), (8, 3)], &[(3, 12), (13, 6)], &[(13, 12), (3, 6)]],
    },
    Glyph {
        ch: '+',
        advance: 26,
        strokes: &[&[(13, 18), (13, 0)], &[(4, 9), (22, 9)]],
    },
    Glyph {
        ch: ',',
        advance: 8,
        strokes: &[&[(5, 4), (4, 3), (3, 4), (4, 5), (5, 4), (5, 2), (3, 0)]],
    },
    Glyph {
        ch: '-',
        advance: 26,
        strokes: &[&[(4, 9), (22, 9)]],
    },
    Glyph {
        ch: '.',
        advance: 8,
        strokes: &[&[(4, 5), (3, 4), (4, 3), (5, 4), (4, 5)]],
    },
    Glyph {
        ch: '/',
        advance: 22,
        strokes: &[&[(20, 25), (2, -7)]],
    },
    Glyph {
        ch: '0',
        advance: 20,
        strokes: &[&[(9, 21), (6, 20), (4, 17), (3, 12), (3, 9), (4, 4), (6, 1), (9, 0), (11, 0), (14, 1), (16, 4), (17, 9), (17, 12), (16, 17), (14, 20), (11, 21), (9, 21)]],
    },
    Glyph {
        ch: '1',
        advance: 20,
        strokes: &[&[(6, 17), (8, 18), (11, 21), (11, 0)]],
    },
    Glyph {
        ch: '2',
        advance: 20,
        strokes: &[&[(4, 16), (4, 17), (5, 19), (6, 20), (8, 21), (12, 21), (14, 20), (15, 19), (16, 17), (16, 15), (15, 13), (13, 10), (3, 0), (17, 0)]],
    },
    Glyph {
        ch: '3',
        advance: 20,
        strokes: &[&[(5, 21), (16, 21), (10, 13), (13, 13), (15, 12), (16, 11), (17, 8), (17, 6), (16, 3), (14, 1), (11, 0), (8, 0), (5, 1), (4, 2), (3, 4)]],
    },
    Glyph {
        ch: '4',
        advance: 20,
        strokes: &[&[(13, 21), (3, 7), (18, 7)], &[(13, 21), (13, 0)]],
    },
    Glyph {
        ch: '5',
        advance: 20,
        strokes: &[&[(15, 21), (5, 21), (4, 12), (5, 13), (8, 14), (11, 14), (14, 13), (16, 11), (17, 8), (17, 6), (16, 3), (14, 1), (11, 0), (8, 0), (5, 1), (4, 2), (3, 4)]],
    },
    Glyph {
        ch: '6',
        advance: 20,
        strokes: &[&[(16, 18), (15, 20), (12, 21), (10, 21), (7, 20), (5, 17), (4, 12), (4, 7), (5, 3), (7, 1), (10, 0), (11, 0), (14, 1), (16, 3), (17, 6), (17, 7), (16, 10), (14, 12), (11, 13), (10, 13), (7, 12), (5, 10), (4, 7)]],
    },
    Glyph {
        ch: '7',
        advance: 20,
        strokes: &[&[(17, 21), (7, 0)], &[(3, 21), (17, 21)]],
    },
    Glyph {
        ch: '8',
        advance: 20,
        strokes: &[&[(8, 21), (5, 20), (4, 18), (4, 16), (5, 14), (7, 13), (11, 12), (14, 11), (16, 9), (17, 7), (17, 4), (16, 2), (15, 1), (12, 0), (8, 0), (5, 1), (4, 2), (3, 4), (3, 7), (4, 9), (6, 11), (9, 12), (13, 13), (15, 14), (16, 16), (16, 18), (15, 20), (12, 21), (8, 21)]],
    },
    Glyph {
        ch: '9',
        advance: 20,
        strokes: &[&[(16, 14), (15, 11), (13, 9), (10, 8), (9, 8), (6, 9), (4, 11), (3, 14), (3, 15), (4, 18), (6, 20), (9, 21), (10, 21), (13, 20), (15, 18), (16, 14), (16, 9), (15, 4), (13, 1), (10, 0), (8, 0), (5, 1), (4, 3)]],
    },
    Glyph {
        ch: ':',
        advance: 8,
        strokes: &[&[(4, 12), (3, 11), (4, 10), (5, 11), (4, 12)], &[(4, 5), (3, 4), (4, 3), (5, 4), (4, 5)]],
    },
    Glyph {
        ch: ';',
        advance: 8,
        strokes: &[&[(4, 12), (3, 11), (4, 10), (5, 11), (4, 12)], &[(5, 4), (4, 3), (3, 4), (4, 5), (5, 4), (5, 2), (3, 0)]],
    },
    Glyph {
        ch: '<',
        advance: 24,
        strokes: &[&[(20, 18), (4, 9), (20, 0)]],
    },
    Glyph {
        ch: '=',
        advance: 26,
        strokes: &[&[(4, 12), (22, 12)], &[(4, 6), (22, 6)]],
    },
    Glyph {
        ch: '>',
        advance: 24,
        strokes: &[&[(4, 18), (20, 9), (4, 0)]],
    },
    Glyph {
        ch: '?',
        advance: 18,
        strokes: &[&[(3, 16), (3, 17), (4, 19), (5, 20), (7, 21), (11, 21), (13, 20), (14, 19), (15, 17), (15, 15), (14, 13), (13, 12), (9, 10), (9, 7)], &[(9, 2), (8, 1), (9, 0), (10, 1), (9, 2)]],
    },
    Glyph {
        ch: '@',
        advance: 27,
        strokes: &[&[(18, 13), (17, 15), (15, 16), (12, 16), (10, 15), (9, 14), (8, 11), (8, 8), (9, 6), (11, 5), (14, 5), (16, 6), (17, 8)], &[(12, 16), (10, 14), (9, 11), (9, 8), (10, 6), (11, 5)], &[(18, 16), (17, 8), (17, 6), (19, 5), (21, 5), (23, 7), (24, 10), (24, 12), (23, 15), (22, 17), (20, 19), (18, 20), (15, 21), (12, 21), (9, 20), (7, 19), (5, 17), (4, 15), (3, 12), (3, 9), (4, 6), (5, 4), (7, 2), (9, 1), (12, 0), (15, 0), (18, 1), (20, 2), (21, 3)], &[(19, 16), (18, 8), (18, 6), (19, 5)]],
    },
    Glyph {
        ch: 'A',
        advance: 18,
        strokes: &[&[(9, 21), (1, 0)], &[(9, 21), (17, 0)], &[(4, 7), (14, 7)]],
    },
    Glyph {
        ch: 'B',
        advance: 21,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (13, 21), (16, 20), (17, 19), (18, 17), (18, 15), (17, 13), (16, 12), (13, 11)], &[(4, 11), (13, 11), (16, 10), (17, 9), (18, 7), (18, 4), (17, 2), (16, 1), (13, 0), (4, 0)]],
    },
    Glyph {
        ch: 'C',
        advance: 21,
        strokes: &[&[(18, 16), (17, 18), (15, 20), (13, 21), (9, 21), (7, 20), (5, 18), (4, 16), (3, 13), (3, 8), (4, 5), (5, 3), (7, 1), (9, 0), (13, 0), (15, 1), (17, 3), (18, 5)]],
    },
    Glyph {
        ch: 'D',
        advance: 21,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (11, 21), (14, 20), (16, 18), (17, 16), (18, 13), (18, 8), (17, 5), (16, 3), (14, 1), (11, 0), (4, 0)]],
    },
    Glyph {
        ch: 'E',
        advance: 19,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (17, 21)], &[(4, 11), (12, 11)], &[(4, 0), (17, 0)]],
    },
    Glyph {
        ch: 'F',
        advance: 18,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (17, 21)], &[(4, 11), (12, 11)]],
    },
    Glyph {
        ch: 'G',
        advance: 21,
        strokes: &[&[(18, 16), (17, 18), (15, 20), (13, 21), (9, 21), (7, 20), (5, 18), (4, 16), (3, 13), (3, 8), (4, 5), (5, 3), (7, 1), (9, 0), (13, 0), (15, 1), (17, 3), (18, 5), (18, 8)], &[(13, 8), (18, 8)]],
    },
    Glyph {
        ch: 'H',
        advance: 22,
        strokes: &[&[(4, 21), (4, 0)], &[(18, 21), (18, 0)], &[(4, 11), (18, 11)]],
    },
    Glyph {
        ch: 'I',
        advance: 8,
        strokes: &[&[(4, 21), (4, 0)]],
    },
    Glyph {
        ch: 'J',
        advance: 16,
        strokes: &[&[(12, 21), (12, 5), (11, 2), (10, 1), (8, 0), (6, 0), (4, 1), (3, 2), (2, 5), (2, 7)]],
    },
    Glyph {
        ch: 'K',
        advance: 21,
        strokes: &[&[(4, 21), (4, 0)], &[(18, 21), (4, 7)], &[(9, 12), (18, 0)]],
    },
    Glyph {
        ch: 'L',
        advance: 17,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 0), (16, 0)]],
    },
    Glyph {
        ch: 'M',
        advance: 24,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (12, 0)], &[(20, 21), (12, 0)], &[(20, 21), (20, 0)]],
    },
    Glyph {
        ch: 'N',
        advance: 22,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (18, 0)], &[(18, 21), (18, 0)]],
    },
    Glyph {
        ch: 'O',
        advance: 22,
        strokes: &[&[(9, 21), (7, 20), (5, 18), (4, 16), (3, 13), (3, 8), (4, 5), (5, 3), (7, 1), (9, 0), (13, 0), (15, 1), (17, 3), (18, 5), (19, 8), (19, 13), (18, 16), (17, 18), (15, 20), (13, 21), (9, 21)]],
    },
    Glyph {
        ch: 'P',
        advance: 21,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (13, 21), (16, 20), (17, 19), (18, 17), (18, 14), (17, 12), (16, 11), (13, 10), (4, 10)]],
    },
    Glyph {
        ch: 'Q',
        advance: 22,
        strokes: &[&[(9, 21), (7, 20), (5, 18), (4, 16), (3, 13), (3, 8), (4, 5), (5, 3), (7, 1), (9, 0), (13, 0), (15, 1), (17, 3), (18, 5), (19, 8), (19, 13), (18, 16), (17, 18), (15, 20), (13, 21), (9, 21)], &[(12, 4), (18, -2)]],
    },
    Glyph {
        ch: 'R',
        advance: 21,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (13, 21), (16, 20), (17, 19), (18, 17), (18, 15), (17, 13), (16, 12), (13, 11), (4, 11)], &[(11, 11), (18, 0)]],
    },
    Glyph {
        ch: 'S',
        advance: 20,
        strokes: &[&[(17, 18), (15, 20), (12, 21), (8, 21), (5, 20), (3, 18), (3, 16), (4, 14), (5, 13), (7, 12), (13, 10), (15, 9), (16, 8), (17, 6), (17, 3), (15, 1), (12, 0), (8, 0), (5, 1), (3, 3)]],
    },
    Glyph {
        ch: 'T',
        advance: 16,
        strokes: &[&[(8, 21), (8, 0)], &[(1, 21), (15, 21)]],
    },
    Glyph {
        ch: 'U',
        advance: 22,
        strokes: &[&[(4, 21), (4, 6), (5, 3), (7, 1), (10, 0), (12, 0), (15, 1), (17, 3), (18, 6), (18, 21)]],
    },
    Glyph {
        ch: 'V',
        advance: 18,
        strokes: &[&[(1, 21), (9, 0)], &[(17, 21), (9, 0)]],
    },
    Glyph {
        ch: 'W',
        advance: 24,
        strokes: &[&[(2, 21), (7, 0)], &[(12, 21), (7, 0)], &[(12, 21), (17, 0)], &[(22, 21), (17, 0)]],
    },
    Glyph {
        ch: 'X',
        advance: 20,
        strokes: &[&[(3, 21), (17, 0)], &[(17, 21), (3, 0)]],
    },
    Glyph {
        ch: 'Y',
        advance: 18,
        strokes: &[&[(1, 21), (9, 11), (9, 0)], &[(17, 21), (9, 11)]],
    },
    Glyph {
        ch: 'Z',
        advance: 20,
        strokes: &[&[(17, 21), (3, 0)], &[(3, 21), (17, 21)], &[(3, 0), (17, 0)]],
    },
    Glyph {
        ch: '[',
        advance: 14,
        strokes: &[&[(4, 25), (4, -7)], &[(5, 25), (5, -7)], &[(4, 25), (11, 25)], &[(4, -7), (11, -7)]],
    },
    Glyph {
        ch: '\\',
        advance: 14,
        strokes: &[&[(0, 21), (14, -3)]],
    },
    Glyph {
        ch: ']',
        advance: 14,
        strokes: &[&[(9, 25), (9, -7)], &[(10, 25), (10, -7)], &[(3, 25), (10, 25)], &[(3, -7), (10, -7)]],
    },
    Glyph {
        ch: '^',
        advance: 16,
        strokes: &[&[(8, 23), (0, 9)], &[(8, 23), (16, 9)]],
    },
    Glyph {
        ch: '_',
        advance: 18,
        strokes: &[&[(0, -7), (18, -7)]],
    },
    Glyph {
        ch: '`',
        advance: 8,
        strokes: &[&[(5, 16), (3, 14), (3, 12), (4, 11), (5, 12), (4, 13), (3, 12)]],
    },
    Glyph {
        ch: 'a',
        advance: 19,
        strokes: &[&[(15, 14), (15, 0)], &[(15, 11), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)]],
    },
    Glyph {
        ch: 'b',
        advance: 19,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 11), (6, 13), (8, 14), (11, 14), (13, 13), (15, 11), (16, 8), (16, 6), (15, 3), (13, 1), (11, 0), (8, 0), (6, 1), (4, 3)]],
    },
    Glyph {
        ch: 'c',
        advance: 18,
        strokes: &[&[(15, 11), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)]],
    },
    Glyph {
        ch: 'd',
        advance: 19,
        strokes: &[&[(15, 21), (15, 0)], &[(15, 11), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)]],
    },
    Glyph {
        ch: 'e',
        advance: 18,
        strokes: &[&[(3, 8), (15, 8), (15, 10), (14, 12), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)]],
    },
    Glyph {
        ch: 'f',
        advance: 12,
        strokes: &[&[(10, 21), (8, 21), (6, 20), (5, 17), (5, 0)], &[(2, 14), (9, 14)]],
    },
    Glyph {
        ch: 'g',
        advance: 19,
        strokes: &[&[(15, 14), (15, -2), (14, -5), (13, -6), (11, -7), (8, -7), (6, -6)], &[(15, 11), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)]],
    },
    Glyph {
        ch: 'h',
        advance: 19,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 10), (7, 13), (9, 14), (12, 14), (14, 13), (15, 10), (15, 0)]],
    },
    Glyph {
        ch: 'i',
        advance: 8,
        strokes: &[&[(3, 21), (4, 20), (5, 21), (4, 22), (3, 21)], &[(4, 14), (4, 0)]],
    },
    Glyph {
        ch: 'j',
        advance: 10,
        strokes: &[&[(5, 21), (6, 20), (7, 21), (6, 22), (5, 21)], &[(6, 14), (6, -3), (5, -6), (3, -7), (1, -7)]],
    },
    Glyph {
        ch: 'k',
        advance: 17,
        strokes: &[&[(4, 21), (4, 0)], &[(14, 14), (4, 4)], &[(8, 8), (15, 0)]],
    },
    Glyph {
        ch: 'l',
        advance: 8,
        strokes: &[&[(4, 21), (4, 0)]],
    },
    Glyph {
        ch: 'm',
        advance: 30,
        strokes: &[&[(4, 14), (4, 0)], &[(4, 10), (7, 13), (9, 14), (12, 14), (14, 13), (15, 10), (15, 0)], &[(15, 10), (18, 13), (20, 14), (23, 14), (25, 13), (26, 10), (26, 0)]],
    },
    Glyph {
        ch: 'n',
        advance: 19,
        strokes: &[&[(4, 14), (4, 0)], &[(4, 10), (7, 13), (9, 14), (12, 14), (14, 13), (15, 10), (15, 0)]],
    },
    Glyph {
        ch: 'o',
        advance: 19,
        strokes: &[&[(8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3), (16, 6), (16, 8), (15, 11), (13, 13), (11, 14), (8, 14)]],
    },
    Glyph {
        ch: 'p',
        advance: 19,
        strokes: &[&[(4, 14), (4, -7)], &[(4, 11), (6, 13), (8, 14), (11, 14), (13, 13), (15, 11), (16, 8), (16, 6), (15, 3), (13, 1), (11, 0), (8, 0), (6, 1), (4, 3)]],
    },
    Glyph {
        ch: 'q',
        advance: 19,
        strokes: &[&[(15, 14), (15, -7)], &[(15, 11), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)]],
    },
    Glyph {
        ch: 'r',
        advance: 13,
        strokes: &[&[(4, 14), (4, 0)], &[(4, 8), (5, 11), (7, 13), (9, 14), (12, 14)]],
    },
    Glyph {
        ch: 's',
        advance: 17,
        strokes: &[&[(14, 11), (13, 13), (10, 14), (7, 14), (4, 13), (3, 11), (4, 9), (6, 8), (11, 7), (13, 6), (14, 4), (14, 3), (13, 1), (10, 0), (7, 0), (4, 1), (3, 3)]],
    },
    Glyph {
        ch: 't',
        advance: 12,
        strokes: &[&[(5, 21), (5, 4), (6, 1), (8, 0), (10, 0)], &[(2, 14), (9, 14)]],
    },
    Glyph {
        ch: 'u',
        advance: 19,
        strokes: &[&[(4, 14), (4, 4), (5, 1), (7, 0), (10, 0), (12, 1), (15, 4)], &[(15, 14), (15, 0)]],
    },
    Glyph {
        ch: 'v',
        advance: 16,
        strokes: &[&[(2, 14), (8, 0)], &[(14, 14), (8, 0)]],
    },
    Glyph {
        ch: 'w',
        advance: 22,
        strokes: &[&[(3, 14), (7, 0)], &[(11, 14), (7, 0)], &[(11, 14), (15, 0)], &[(19, 14), (15, 0)]],
    },
    Glyph {
        ch: 'x',
        advance: 17,
        strokes: &[&[(3, 14), (14, 0)], &[(14, 14), (3, 0)]],
    },
    Glyph {
        ch: 'y',
        advance: 16,
        strokes: &[&[(2, 14), (8, 0)], &[(14, 14), (8, 0), (6, -4), (4, -6), (2, -7), (1, -7)]],
    },
    Glyph {
        ch: 'z',
        advance: 17,
        strokes: &[&[(14, 14), (3, 0)], &[(3, 14), (14, 14)], &[(3, 0), (14, 0)]],
    },
    Glyph {
        ch: '{',
        advance: 14,
        strokes: &[&[(9, 25), (7, 24), (6, 23), (5, 21), (5, 19), (6, 17), (7, 16), (8, 14), (8, 12), (6, 10)], &[(7, 24), (6, 22), (6, 20), (7, 18), (8, 17), (9, 15), (9, 13), (8, 11), (4, 9), (8, 7), (9, 5), (9, 3), (8, 1), (7, 0), (6, -2), (6, -4), (7, -6)], &[(6, 8), (8, 6), (8, 4), (7, 2), (6, 1), (5, -1), (5, -3), (6, -5), (7, -6), (9, -7)]],
    },
    Glyph {
        ch: '|',
        advance: 8,
        strokes: &[&[(4, 25), (4, -7)]],
    },
    Glyph {
        ch: '}',
        advance: 14,
        strokes: &[&[(5, 25), (7, 24), (8, 23), (9, 21), (9, 19), (8, 17), (7, 16), (6, 14), (6, 12), (8, 10)], &[(7, 24), (8, 22), (8, 20), (7, 18), (6, 17), (5, 15), (5, 13), (6, 11), (10, 9), (6, 7), (5, 5), (5, 3), (6, 1), (7, 0), (8, -2), (8, -4), (7, -6)], &[(8, 8), (6, 6), (6, 4), (7, 2), (8, 1), (9, -1), (9, -3), (8, -5), (7, -6), (5, -7)]],
    },
    Glyph {
        ch: '~',
        advance: 24,
        strokes: &[&[(3, 6), (3, 8), (4, 11), (6, 12), (8, 12), (10, 11), (14, 8), (16, 7), (18, 7), (20, 8), (21, 10)], &[(3, 8), (4, 10), (6, 11), (8, 11), (10, 10), (14, 7), (16, 6), (18, 6), (20, 7), (21, 10), (21, 12)]],
    },
    Glyph {
        ch: '\u{00B0}',
        advance: 14,
        strokes: &[&[(6, 21), (4, 20), (3, 18), (3, 16), (4, 14), (6, 13), (8, 13), (10, 14), (11, 16), (11, 18), (10, 20), (8, 21), (6, 21)]],
    },
    Glyph {
        ch: '\u{00B7}',
        advance: 5,
        strokes: &[&[(2, 10), (2, 9), (3, 9), (3, 10), (2, 10)]],
    },
    Glyph {
        ch: '\u{00D7}',
        advance: 22,
        strokes: &[&[(4, 16), (18, 2)], &[(18, 16), (4, 2)]],
    },
    Glyph {
        ch: '\u{00F7}',
        advance: 26,
        strokes: &[&[(13, 18), (12, 17), (13, 16), (14, 17), (13, 18)], &[(4, 9), (22, 9)], &[(13, 2), (12, 1), (13, 0), (14, 1), (13, 2)]],
    },
    Glyph {
        ch: '\u{0391}',
        advance: 18,
        strokes: &[&[(9, 21), (1, 0)], &[(9, 21), (17, 0)], &[(4, 7), (14, 7)]],
    },
    Glyph {
        ch: '\u{0392}',
        advance: 21,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (13, 21), (16, 20), (17, 19), (18, 17), (18, 15), (17, 13), (16, 12), (13, 11)], &[(4, 11), (13, 11), (16, 10), (17, 9), (18, 7), (18, 4), (17, 2), (16, 1), (13, 0), (4, 0)]],
    },
    Glyph {
        ch: '\u{0393}',
        advance: 17,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (16, 21)]],
    },
    Glyph {
        ch: '\u{0394}',
        advance: 18,
        strokes: &[&[(9, 21), (1, 0)], &[(9, 21), (17, 0)], &[(1, 0), (17, 0)]],
    },
    Glyph {
        ch: '\u{0395}',
        advance: 19,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (17, 21)], &[(4, 11), (12, 11)], &[(4, 0), (17, 0)]],
    },
    Glyph {
        ch: '\u{0396}',
        advance: 20,
        strokes: &[&[(17, 21), (3, 0)], &[(3, 21), (17, 21)], &[(3, 0), (17, 0)]],
    },
    Glyph {
        ch: '\u{0397}',
        advance: 22,
        strokes: &[&[(4, 21), (4, 0)], &[(18, 21), (18, 0)], &[(4, 11), (18, 11)]],
    },
    Glyph {
        ch: '\u{0398}',
        advance: 22,
        strokes: &[&[(9, 21), (7, 20), (5, 18), (4, 16), (3, 13), (3, 8), (4, 5), (5, 3), (7, 1), (9, 0), (13, 0), (15, 1), (17, 3), (18, 5), (19, 8), (19, 13), (18, 16), (17, 18), (15, 20), (13, 21), (9, 21)], &[(8, 11), (14, 11)]],
    },
    Glyph {
        ch: '\u{0399}',
        advance: 8,
        strokes: &[&[(4, 21), (4, 0)]],
    },
    Glyph {
        ch: '\u{039A}',
        advance: 21,
        strokes: &[&[(4, 21), (4, 0)], &[(18, 21), (4, 7)], &[(9, 12), (18, 0)]],
    },
    Glyph {
        ch: '\u{039B}',
        advance: 18,
        strokes: &[&[(9, 21), (1, 0)], &[(9, 21), (17, 0)]],
    },
    Glyph {
        ch: '\u{039C}',
        advance: 24,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (12, 0)], &[(20, 21), (12, 0)], &[(20, 21), (20, 0)]],
    },
    Glyph {
        ch: '\u{039D}',
        advance: 22,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (18, 0)], &[(18, 21), (18, 0)]],
    },
    Glyph {
        ch: '\u{039E}',
        advance: 18,
        strokes: &[&[(2, 21), (16, 21)], &[(6, 11), (12, 11)], &[(2, 0), (16, 0)]],
    },
    Glyph {
        ch: '\u{039F}',
        advance: 22,
        strokes: &[&[(9, 21), (7, 20), (5, 18), (4, 16), (3, 13), (3, 8), (4, 5), (5, 3), (7, 1), (9, 0), (13, 0), (15, 1), (17, 3), (18, 5), (19, 8), (19, 13), (18, 16), (17, 18), (15, 20), (13, 21), (9, 21)]],
    },
    Glyph {
        ch: '\u{03A0}',
        advance: 22,
        strokes: &[&[(4, 21), (4, 0)], &[(18, 21), (18, 0)], &[(4, 21), (18, 21)]],
    },
    Glyph {
        ch: '\u{03A1}',
        advance: 21,
        strokes: &[&[(4, 21), (4, 0)], &[(4, 21), (13, 21), (16, 20), (17, 19), (18, 17), (18, 14), (17, 12), (16, 11), (13, 10), (4, 10)]],
    },
    Glyph {
        ch: '\u{03A3}',
        advance: 18,
        strokes: &[&[(2, 21), (9, 11), (2, 0)], &[(2, 21), (16, 21)], &[(2, 0), (16, 0)]],
    },
    Glyph {
        ch: '\u{03A4}',
        advance: 16,
        strokes: &[&[(8, 21), (8, 0)], &[(1, 21), (15, 21)]],
    },
    Glyph {
        ch: '\u{03A5}',
        advance: 18,
        strokes: &[&[(2, 16), (2, 18), (3, 20), (4, 21), (6, 21), (7, 20), (8, 18), (9, 14), (9, 0)], &[(16, 16), (16, 18), (15, 20), (14, 21), (12, 21), (11, 20), (10, 18), (9, 14)]],
    },
    Glyph {
        ch: '\u{03A6}',
        advance: 20,
        strokes: &[&[(10, 21), (10, 0)], &[(8, 16), (5, 15), (4, 14), (3, 12), (3, 9), (4, 7), (5, 6), (8, 5), (12, 5), (15, 6), (16, 7), (17, 9), (17, 12), (16, 14), (15, 15), (12, 16), (8, 16)]],
    },
    Glyph {
        ch: '\u{03A7}',
        advance: 20,
        strokes: &[&[(3, 21), (17, 0)], &[(3, 0), (17, 21)]],
    },
    Glyph {
        ch: '\u{03A8}',
        advance: 22,
        strokes: &[&[(11, 21), (11, 0)], &[(2, 15), (3, 15), (4, 14), (5, 10), (6, 8), (7, 7), (10, 6), (12, 6), (15, 7), (16, 8), (17, 10), (18, 14), (19, 15), (20, 15)]],
    },
    Glyph {
        ch: '\u{03A9}',
        advance: 20,
        strokes: &[&[(3, 0), (7, 0), (4, 7), (3, 11), (3, 15), (4, 18), (6, 20), (9, 21), (11, 21), (14, 20), (16, 18), (17, 15), (17, 11), (16, 7), (13, 0), (17, 0)]],
    },
    Glyph {
        ch: '\u{03B1}',
        advance: 21,
        strokes: &[&[(9, 14), (7, 13), (5, 11), (4, 9), (3, 6), (3, 3), (4, 1), (6, 0), (8, 0), (10, 1), (13, 4), (15, 7), (17, 11), (18, 14)], &[(9, 14), (11, 14), (12, 13), (13, 11), (15, 3), (16, 1), (17, 0), (18, 0)]],
    },
    Glyph {
        ch: '\u{03B2}',
        advance: 19,
        strokes: &[&[(12, 21), (10, 20), (8, 18), (6, 14), (5, 11), (4, 7), (3, 1), (2, -7)], &[(12, 21), (14, 21), (16, 19), (16, 16), (15, 14), (14, 13), (12, 12), (9, 12)], &[(9, 12), (11, 11), (13, 9), (14, 7), (14, 4), (13, 2), (12, 1), (10, 0), (8, 0), (6, 1), (5, 2), (4, 5)]],
    },
    Glyph {
        ch: '\u{03B3}',
        advance: 19,
        strokes: &[&[(1, 11), (3, 13), (5, 14), (6, 14), (8, 13), (9, 12), (10, 9), (10, 5), (9, 0)], &[(17, 14), (16, 11), (15, 9), (9, 0), (7, -4), (6, -7)]],
    },
    Glyph {
        ch: '\u{03B4}',
        advance: 18,
        strokes: &[&[(11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 5), (4, 2), (5, 1), (7, 0), (9, 0), (11, 1), (13, 3), (14, 6), (14, 9), (13, 12), (11, 14), (9, 16), (8, 18), (8, 20), (9, 21), (11, 21), (13, 20), (15, 18)]],
    },
    Glyph {
        ch: '\u{03B5}',
        advance: 16,
        strokes: &[&[(13, 12), (12, 13), (10, 14), (7, 14), (5, 13), (5, 11), (6, 9), (9, 8)], &[(9, 8), (5, 7), (3, 5), (3, 3), (4, 1), (6, 0), (9, 0), (11, 1), (13, 3)]],
    },
    Glyph {
        ch: '\u{03B6}',
        advance: 15,
        strokes: &[&[(10, 21), (8, 20), (7, 19), (7, 18), (8, 17), (11, 16), (14, 16)], &[(14, 16), (10, 14), (7, 12), (4, 9), (3, 6), (3, 4), (4, 2), (6, 0), (9, -2), (10, -4), (10, -6), (9, -7), (7, -7), (6, -5)]],
    },
    Glyph {
        ch: '\u{03B7}',
        advance: 20,
        strokes: &[&[(1, 10), (2, 12), (4, 14), (6, 14), (7, 13), (7, 11), (6, 7), (4, 0)], &[(6, 7), (8, 11), (10, 13), (12, 14), (14, 14), (16, 12), (16, 9), (15, 4), (12, -7)]],
    },
    Glyph {
        ch: '\u{03B8}',
        advance: 21,
        strokes: &[&[(12, 21), (9, 20), (7, 18), (5, 15), (4, 13), (3, 9), (3, 5), (4, 2), (5, 1), (7, 0), (9, 0), (12, 1), (14, 3), (16, 6), (17, 8), (18, 12), (18, 16), (17, 19), (16, 20), (14, 21), (12, 21)], &[(4, 11), (18, 11)]],
    },
    Glyph {
        ch: '\u{03B9}',
        advance: 11,
        strokes: &[&[(6, 14), (4, 7), (3, 3), (3, 1), (4, 0), (6, 0), (8, 2), (9, 4)]],
    },
    Glyph {
        ch: '\u{03BA}',
        advance: 18,
        strokes: &[&[(6, 14), (2, 0)], &[(16, 13), (15, 14), (14, 14), (12, 13), (8, 9), (6, 8), (5, 8)], &[(5, 8), (7, 7), (8, 6), (10, 1), (11, 0), (12, 0), (13, 1)]],
    },
    Glyph {
        ch: '\u{03BB}',
        advance: 16,
        strokes: &[&[(1, 21), (3, 21), (5, 20), (6, 19), (14, 0)], &[(8, 14), (2, 0)]],
    },
    Glyph {
        ch: '\u{03BC}',
        advance: 21,
        strokes: &[&[(7, 14), (1, -7)], &[(6, 10), (5, 5), (5, 2), (7, 0), (9, 0), (11, 1), (13, 3), (15, 7)], &[(17, 14), (15, 7), (14, 3), (14, 1), (15, 0), (17, 0), (19, 2), (20, 4)]],
    },
    Glyph {
        ch: '\u{03BD}',
        advance: 18,
        strokes: &[&[(3, 14), (6, 14), (5, 8), (4, 3), (3, 0)], &[(16, 14), (15, 11), (14, 9), (12, 6), (9, 3), (6, 1), (3, 0)]],
    },
    Glyph {
        ch: '\u{03BE}',
        advance: 16,
        strokes: &[&[(10, 21), (8, 20), (7, 19), (7, 18), (8, 17), (11, 16), (14, 16)], &[(11, 16), (8, 15), (6, 14), (5, 12), (5, 10), (7, 8), (10, 7), (12, 7)], &[(10, 7), (6, 6), (4, 5), (3, 3), (3, 1), (5, -1), (9, -3), (10, -4), (10, -6), (8, -7), (6, -7)]],
    },
    Glyph {
        ch: '\u{03BF}',
        advance: 17,
        strokes: &[&[(8, 14), (6, 13), (4, 11), (3, 8), (3, 5), (4, 2), (5, 1), (7, 0), (9, 0), (11, 1), (13, 3), (14, 6), (14, 9), (13, 12), (12, 13), (10, 14), (8, 14)]],
    },
    Glyph {
        ch: '\u{03C0}',
        advance: 22,
        strokes: &[&[(9, 14), (5, 0)], &[(14, 14), (15, 8), (16, 3), (17, 0)], &[(2, 11), (4, 13), (7, 14), (20, 14)]],
    },
    Glyph {
        ch: '\u{03C1}',
        advance: 18,
        strokes: &[&[(4, 8), (4, 5), (5, 2), (6, 1), (8, 0), (10, 0), (12, 1), (14, 3), (15, 6), (15, 9), (14, 12), (13, 13), (11, 14), (9, 14), (7, 13), (5, 11), (4, 8), (0, -7)]],
    },
    Glyph {
        ch: '\u{03C3}',
        advance: 20,
        strokes: &[&[(18, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 5), (4, 2), (5, 1), (7, 0), (9, 0), (11, 1), (13, 3), (14, 6), (14, 9), (13, 12), (12, 13), (10, 14)]],
    },
    Glyph {
        ch: '\u{03C4}',
        advance: 20,
        strokes: &[&[(11, 14), (8, 0)], &[(2, 11), (4, 13), (7, 14), (18, 14)]],
    },
    Glyph {
        ch: '\u{03C5}',
        advance: 20,
        strokes: &[&[(1, 10), (2, 12), (4, 14), (6, 14), (7, 13), (7, 11), (5, 5), (5, 2), (7, 0), (9, 0), (12, 1), (14, 3), (16, 7), (17, 11), (17, 14)]],
    },
    Glyph {
        ch: '\u{03C6}',
        advance: 22,
        strokes: &[&[(8, 13), (6, 12), (4, 10), (3, 7), (3, 4), (4, 2), (5, 1), (7, 0), (10, 0), (13, 1), (16, 3), (18, 6), (19, 9), (19, 12), (17, 14), (15, 14), (13, 12), (11, 8), (9, 3), (6, -7)]],
    },
    Glyph {
        ch: '\u{03C7}',
        advance: 18,
        strokes: &[&[(2, 14), (4, 14), (6, 12), (12, -5), (14, -7), (16, -7)], &[(17, 14), (16, 12), (14, 9), (4, -2), (2, -5), (1, -7)]],
    },
    Glyph {
        ch: '\u{03C8}',
        advance: 23,
        strokes: &[&[(16, 21), (8, -7)], &[(1, 10), (2, 12), (4, 14), (6, 14), (7, 13), (7, 11), (6, 6), (6, 3), (7, 1), (9, 0), (11, 0), (14, 1), (16, 3), (18, 6), (20, 11), (21, 14)]],
    },
    Glyph {
        ch: '\u{03C9}',
        advance: 23,
        strokes: &[&[(8, 14), (6, 13), (4, 10), (3, 7), (3, 4), (4, 1), (5, 0), (7, 0), (9, 1), (11, 4)], &[(12, 8), (11, 4), (12, 1), (13, 0), (15, 0), (17, 1), (19, 4), (20, 7), (20, 10), (19, 13), (18, 14)]],
    },
    Glyph {
        ch: '\u{03D1}',
        advance: 21,
        strokes: &[&[(1, 10), (2, 12), (4, 14), (6, 14), (7, 13), (7, 11), (6, 6), (6, 3), (7, 1), (8, 0), (10, 0), (12, 1), (14, 4), (15, 6), (16, 9), (17, 14), (17, 17), (16, 20), (14, 21), (12, 21), (11, 19), (11, 17), (12, 14), (14, 11), (16, 9), (19, 7)]],
    },
];
