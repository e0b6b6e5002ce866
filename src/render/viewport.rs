//! World coordinate system of a surface and the perspective viewpoint.
//!
//! The surface's lower left pixel is the viewport origin. World units map
//! to pixels by a uniform scale with y flipped, so world y points up.

use glam::DVec2;

use crate::errors::RenderError;
use crate::log::{debug, warn};

use super::defaults;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    /// Pixel position of the viewport's lower left corner
    lower_left: DVec2,
    /// Pixel offset of the world origin from `lower_left`
    offset: DVec2,
    xscl: f64,
    yscl: f64,
    fov: f64,
    /// Distance of the viewpoint from the z = 0 plane, in world units
    viewpoint_distance: f64,
}

impl Viewport {
    /// A viewport covering a `width` x `height` pixel surface with one
    /// world unit per pixel and the world origin at the lower left.
    pub fn new(width: f64, height: f64) -> Result<Self, RenderError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RenderError::MissingSurface { width, height });
        }
        let mut vp = Viewport {
            width,
            height,
            lower_left: DVec2::new(0.0, height),
            offset: DVec2::ZERO,
            xscl: 1.0,
            yscl: -1.0,
            fov: defaults::FOV,
            viewpoint_distance: 0.0,
        };
        vp.update_viewpoint();
        Ok(vp)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pixels per world unit along x.
    pub fn xscl(&self) -> f64 {
        self.xscl
    }

    pub fn yscl(&self) -> f64 {
        self.yscl
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn viewpoint_distance(&self) -> f64 {
        self.viewpoint_distance
    }

    /// Map world coordinates so that `left_x` is at the left edge,
    /// `lower_y` at the bottom edge and `span_x` units fit across. A
    /// non-positive span gives 100 units across with the origin at the
    /// lower left.
    pub fn set_world_coords(&mut self, left_x: f64, lower_y: f64, span_x: f64) {
        if span_x > 0.0 && span_x.is_finite() && left_x.is_finite() && lower_y.is_finite() {
            self.xscl = self.width / span_x;
            self.yscl = -self.xscl;
            self.offset = DVec2::new(-left_x * self.xscl, -lower_y * self.yscl);
        } else {
            self.xscl = self.width / 100.0;
            self.yscl = -self.xscl;
            self.offset = DVec2::ZERO;
        }
        debug!(xscl = self.xscl, offset = ?self.offset, "world coordinates set");
        self.update_viewpoint();
    }

    /// Set the horizontal field of view in degrees, 20..=60.
    pub fn set_fov(&mut self, degrees: f64) -> Result<(), RenderError> {
        if !defaults::FOV_RANGE.contains(&degrees) {
            warn!(degrees, "field of view rejected");
            return Err(RenderError::InvalidFov { degrees });
        }
        self.fov = degrees;
        self.update_viewpoint();
        Ok(())
    }

    /// The viewpoint sits where the widest half of the viewport spans the
    /// half field of view.
    fn update_viewpoint(&mut self) {
        let ll = self.offset.x.clamp(0.0, self.width);
        let half_span = ((0.5 * self.width - ll).abs() + 0.5 * self.width) / self.xscl;
        self.viewpoint_distance = half_span / (self.fov.to_radians() / 2.0).tan();
    }

    pub fn to_pixel(&self, world: DVec2) -> DVec2 {
        DVec2::new(
            self.lower_left.x + self.offset.x + world.x * self.xscl,
            self.lower_left.y + self.offset.y + world.y * self.yscl,
        )
    }

    pub fn to_world(&self, pixel: DVec2) -> DVec2 {
        DVec2::new(
            (pixel.x - self.lower_left.x - self.offset.x) / self.xscl,
            (pixel.y - self.lower_left.y - self.offset.y) / self.yscl,
        )
    }
}
