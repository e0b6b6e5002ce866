//! 3D vertices carrying original, transformed and projected coordinates.

use glam::{DVec2, DVec3};

use crate::transform::Transform;

/// A vertex of the scene.
///
/// `original` is the geometry as built (edited only by hard transforms),
/// `transformed` is recomputed from `original` every frame by the soft
/// transforms, and `projected` is the perspective-projected screen position
/// in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub original: DVec3,
    pub transformed: DVec3,
    pub projected: DVec2,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_vec(DVec3::new(x, y, z))
    }

    pub fn from_vec(v: DVec3) -> Self {
        Point3 {
            original: v,
            transformed: v,
            projected: DVec2::ZERO,
        }
    }

    /// Permanently move the point: both original and transformed change.
    pub fn hard_transform(&mut self, t: &Transform) {
        self.original = t.apply(self.original);
        self.transformed = self.original;
    }

    /// Recompute the transformed position from the original one.
    pub fn soft_transform(&mut self, t: &Transform) {
        self.transformed = t.apply(self.original);
    }

    /// Perspective projection onto the z = 0 plane seen from `(0, 0, d)`.
    pub fn project(&mut self, viewpoint_distance: f64) {
        let s = viewpoint_distance / (viewpoint_distance - self.transformed.z);
        self.projected = DVec2::new(self.transformed.x * s, self.transformed.y * s);
    }
}

impl From<DVec3> for Point3 {
    fn from(v: DVec3) -> Self {
        Point3::from_vec(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_transform_rewrites_original() {
        let mut p = Point3::new(1.0, 0.0, 0.0);
        p.hard_transform(&Transform::translation(DVec3::new(0.0, 2.0, 0.0)));
        assert_eq!(p.original, DVec3::new(1.0, 2.0, 0.0));
        assert_eq!(p.transformed, p.original);
    }

    #[test]
    fn soft_transform_is_not_cumulative() {
        let mut p = Point3::new(1.0, 0.0, 0.0);
        let t = Transform::translation(DVec3::new(0.0, 2.0, 0.0));
        p.soft_transform(&t);
        p.soft_transform(&t);
        assert_eq!(p.original, DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(p.transformed, DVec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn projection_magnifies_near_points() {
        let mut near = Point3::new(10.0, 10.0, 50.0);
        let mut far = Point3::new(10.0, 10.0, -100.0);
        near.project(100.0);
        far.project(100.0);
        assert_eq!(near.projected, DVec2::new(20.0, 20.0));
        assert_eq!(far.projected, DVec2::new(5.0, 5.0));
    }
}
