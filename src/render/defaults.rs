//! Renderer-wide defaults used when a leaf leaves a style unset.

use glam::DVec3;

use crate::errors::{RenderError, StyleError, rejected};
use crate::log::warn;
use crate::types::{self, FontSize, FontWeight, LineCap, Rgba};

pub const PEN_COLOR: Rgba = Rgba::BLACK;
pub const PEN_WIDTH: f64 = 1.0;
pub const LINE_CAP: LineCap = LineCap::Butt;
pub const PAINT_COLOR: Rgba = Rgba::STEEL_BLUE;
pub const BACK_COLOR: Rgba = Rgba::GRAY;
pub const FONT_SIZE: FontSize = FontSize::px(10.0);
pub const FONT_WEIGHT: FontWeight = FontWeight::NORMAL;
/// Horizontal field of view in degrees
pub const FOV: f64 = 45.0;
pub const FOV_RANGE: std::ops::RangeInclusive<f64> = 20.0..=60.0;
pub const LIGHT_SOURCE: DVec3 = DVec3::new(0.0, 100.0, 500.0);
/// Distance from the axis, in pixels, under which a profile point counts
/// as lying on it
pub const AXIS_TOLERANCE_PX: f64 = 3.0;
/// Stroke width of text at font size 1 and weight 400
pub const TEXT_STROKE_FACTOR: f64 = 0.08;
/// Shaded faces fully lit by the light source get this much on top of
/// [`AMBIENT`]
pub const DIFFUSE: f64 = 0.6;
pub const AMBIENT: f64 = 0.4;

/// Styles applied to leaves that do not set their own.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDefaults {
    pub pen_color: Rgba,
    pub pen_width: f64,
    pub line_cap: LineCap,
    pub paint_color: Rgba,
    pub back_color: Rgba,
    pub font_size: FontSize,
    pub font_weight: FontWeight,
    /// Background painted by `clear`; `None` leaves the surface transparent
    pub background: Option<Rgba>,
    pub(crate) light_source: DVec3,
    pub(crate) plot_normals: bool,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        RenderDefaults {
            pen_color: PEN_COLOR,
            pen_width: PEN_WIDTH,
            line_cap: LINE_CAP,
            paint_color: PAINT_COLOR,
            back_color: BACK_COLOR,
            font_size: FONT_SIZE,
            font_weight: FONT_WEIGHT,
            background: None,
            light_source: LIGHT_SOURCE,
            plot_normals: false,
        }
    }
}

impl RenderDefaults {
    pub fn set_pen_color(&mut self, value: &str) -> Result<(), StyleError> {
        self.pen_color = rejected("pen color", value.parse())?;
        Ok(())
    }

    pub fn set_paint_color(&mut self, value: &str) -> Result<(), StyleError> {
        self.paint_color = rejected("paint color", value.parse())?;
        Ok(())
    }

    pub fn set_back_color(&mut self, value: &str) -> Result<(), StyleError> {
        self.back_color = rejected("back color", value.parse())?;
        Ok(())
    }

    pub fn set_background(&mut self, value: &str) -> Result<(), StyleError> {
        self.background = Some(rejected("background", value.parse())?);
        Ok(())
    }

    pub fn set_pen_width(&mut self, value: f64) -> Result<(), StyleError> {
        let width = types::positive(value).map_err(|source| StyleError::Numeric {
            what: "pen width",
            source,
        });
        self.pen_width = rejected("pen width", width)?;
        Ok(())
    }

    pub fn set_line_cap(&mut self, value: &str) -> Result<(), StyleError> {
        self.line_cap = rejected("line cap", value.parse())?;
        Ok(())
    }

    pub fn set_font_size(&mut self, value: f64) -> Result<(), StyleError> {
        self.font_size = rejected("font size", FontSize::try_new(value))?;
        Ok(())
    }

    pub fn set_font_weight(&mut self, value: f64) -> Result<(), StyleError> {
        self.font_weight = rejected("font weight", FontWeight::try_new(value))?;
        Ok(())
    }

    pub fn light_source(&self) -> DVec3 {
        self.light_source
    }

    /// Position of the light in world coordinates. It must be finite and
    /// away from the origin.
    pub fn set_light_source(&mut self, x: f64, y: f64, z: f64) -> Result<(), RenderError> {
        let light = DVec3::new(x, y, z);
        if !light.is_finite() || light.length_squared() == 0.0 {
            warn!(?light, "light source rejected");
            return Err(RenderError::InvalidLight);
        }
        self.light_source = light;
        Ok(())
    }

    pub fn plot_normals(&self) -> bool {
        self.plot_normals
    }

    /// Draw each leaf's normal on top of it: green when it points toward
    /// the viewer, red when away.
    pub fn set_plot_normals(&mut self, on: bool) {
        self.plot_normals = on;
    }
}
