//! Visibility and Lambert shading of leaves.

use glam::DVec3;

use crate::scene::Leaf;
use crate::types::Rgba;

use super::defaults::{AMBIENT, DIFFUSE, RenderDefaults};

/// Whether the leaf's normal points toward the viewpoint `(0, 0, d)`.
pub fn front_facing(leaf: &Leaf, viewpoint_distance: f64) -> bool {
    let c = leaf.centroid().transformed;
    let n = leaf.normal().transformed - c;
    n.dot(DVec3::new(0.0, 0.0, viewpoint_distance) - c) > 0.0
}

/// Luminance of a face with unit normal `n` lit from direction `light`.
/// A face lit from behind its visible side only gets ambient light.
pub fn luminance(n: DVec3, light: DVec3, front: bool) -> f64 {
    let Some(light) = light.try_normalize() else {
        return AMBIENT;
    };
    let cos = n.dot(light);
    if (front && cos < 0.0) || (!front && cos > 0.0) {
        return AMBIENT;
    }
    (DIFFUSE * cos.abs() + AMBIENT).clamp(AMBIENT, 1.0)
}

/// Shaded color of a shape leaf: the fill color on the front side, the
/// back color on the back side.
pub fn shade(leaf: &Leaf, defaults: &RenderDefaults, front: bool) -> Rgba {
    let style = leaf.style();
    let base = if front {
        style.fill.unwrap_or(defaults.paint_color)
    } else {
        style.back.unwrap_or(defaults.back_color)
    };
    base.shaded(luminance(leaf.unit_normal(), defaults.light_source(), front))
}
