//! Validated value types shared by the scene and the renderer.
//!
//! Style values that the user can set (colors, caps, font metrics, label
//! origins) are parsed into these types up front, so an invalid value is
//! rejected before it reaches a node.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StyleError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities, zero and negative values.
#[inline]
pub fn positive(val: f64) -> Result<f64, NumericError> {
    let val = finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

// ============================================================================
// Color
// ============================================================================

/// An RGBA color: 8-bit channels and a 0..=1 alpha.
///
/// Parses any CSS color (`red`, `#f80`, `rgb(1,2,3)`, `rgba(1,2,3,0.5)`) and
/// prints as `rgba(r,g,b,a)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const GREEN: Rgba = Rgba::rgb(0, 128, 0);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const STEEL_BLUE: Rgba = Rgba::rgb(70, 130, 180);
    pub const GRAY: Rgba = Rgba::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
        Rgba { r, g, b, a: 1.0 }
    }

    /// Alpha is clamped into 0..=1.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Rgba {
        let a = if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) };
        Rgba { r, g, b, a }
    }

    /// Scale the color channels by a luminance factor, keeping alpha.
    pub fn shaded(self, lum: f64) -> Rgba {
        let ch = |c: u8| (lum * f64::from(c)).round().clamp(0.0, 255.0) as u8;
        Rgba {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
            a: self.a,
        }
    }
}

impl FromStr for Rgba {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let css = csscolorparser::parse(s.trim()).map_err(|_| StyleError::Color {
            value: s.to_string(),
        })?;
        let ch = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Ok(Rgba::new(ch(css.r), ch(css.g), ch(css.b), css.a))
    }
}

impl TryFrom<String> for Rgba {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> String {
        c.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

// ============================================================================
// Line cap
// ============================================================================

/// Stroke end cap style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

impl FromStr for LineCap {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(LineCap::Butt),
            "round" => Ok(LineCap::Round),
            "square" => Ok(LineCap::Square),
            _ => Err(StyleError::LineCap {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Font metrics and label origin
// ============================================================================

/// Text size in pixels, 6..=60
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct FontSize(f64);

impl FontSize {
    pub const MIN: f64 = 6.0;
    pub const MAX: f64 = 60.0;

    pub(crate) const fn px(val: f64) -> FontSize {
        FontSize(val)
    }

    pub fn try_new(val: f64) -> Result<FontSize, StyleError> {
        if !(Self::MIN..=Self::MAX).contains(&val) {
            return Err(StyleError::FontSize { value: val });
        }
        Ok(FontSize(val))
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for FontSize {
    type Error = StyleError;

    fn try_from(val: f64) -> Result<Self, Self::Error> {
        FontSize::try_new(val)
    }
}

impl From<FontSize> for f64 {
    fn from(s: FontSize) -> f64 {
        s.0
    }
}

/// Font weight, 100..=900 (400 normal, 700 bold)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct FontWeight(u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    pub fn try_new(val: f64) -> Result<FontWeight, StyleError> {
        if !(100.0..=900.0).contains(&val) {
            return Err(StyleError::FontWeight { value: val });
        }
        Ok(FontWeight(val.round() as u16))
    }

    #[inline]
    pub fn raw(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<f64> for FontWeight {
    type Error = StyleError;

    fn try_from(val: f64) -> Result<Self, Self::Error> {
        FontWeight::try_new(val)
    }
}

impl From<FontWeight> for f64 {
    fn from(w: FontWeight) -> f64 {
        w.raw()
    }
}

/// Label origin: which point of the text box sits at the drawing origin.
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[repr(transparent)]
pub struct LabelOrigin(u8);

impl LabelOrigin {
    pub const TOP_LEFT: LabelOrigin = LabelOrigin(1);
    pub const CENTER: LabelOrigin = LabelOrigin(5);
    pub const BASELINE_LEFT: LabelOrigin = LabelOrigin(7);

    pub fn try_new(val: i64) -> Result<LabelOrigin, StyleError> {
        if !(1..=9).contains(&val) {
            return Err(StyleError::LabelOrigin { value: val });
        }
        Ok(LabelOrigin(val as u8))
    }

    #[inline]
    pub fn code(self) -> u8 {
        self.0
    }

    /// Anchor point within a `width` x `height` box, with y measured up
    /// from the baseline.
    pub fn anchor(self, width: f64, height: f64) -> (f64, f64) {
        let col = f64::from((self.0 - 1) % 3) / 2.0;
        let row = f64::from((self.0 - 1) / 3) / 2.0;
        (col * width, (1.0 - row) * height)
    }
}

impl Default for LabelOrigin {
    fn default() -> Self {
        LabelOrigin::BASELINE_LEFT
    }
}

impl TryFrom<i64> for LabelOrigin {
    type Error = StyleError;

    fn try_from(val: i64) -> Result<Self, Self::Error> {
        LabelOrigin::try_new(val)
    }
}

impl From<LabelOrigin> for i64 {
    fn from(l: LabelOrigin) -> i64 {
        i64::from(l.0)
    }
}
