//! Affine 4x4 transforms and the queue of pending soft transforms.
//!
//! A [`Transform`] is an accumulator: every operation is applied *after*
//! the ones already in it, so `t.translate(..); t.rotate(..)` moves a point
//! and then rotates the moved point about the origin. [`Transform::compose`]
//! follows the same rule (`this` first, then `other`), which is what the
//! propagation pass relies on when it builds `offset x parent`.

use std::collections::VecDeque;

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::log::trace;

/// A homogeneous 4x4 affine transform (rotation, uniform scale, translation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 4]; 4]", into = "[[f64; 4]; 4]")]
pub struct Transform {
    matrix: DMat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        matrix: DMat4::IDENTITY,
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn translation(d: DVec3) -> Self {
        Transform {
            matrix: DMat4::from_translation(d),
        }
    }

    /// Right-handed rotation of `degrees` about `axis`.
    ///
    /// Returns `None` when the axis has zero length or a non-finite component.
    pub fn rotation(axis: DVec3, degrees: f64) -> Option<Self> {
        if !axis.is_finite() || !degrees.is_finite() || axis.length_squared() == 0.0 {
            return None;
        }
        Some(Transform {
            matrix: DMat4::from_axis_angle(axis.normalize(), degrees.to_radians()),
        })
    }

    /// Uniform scale by `|factor|`. Zero and non-finite factors give `None`.
    pub fn scaling(factor: f64) -> Option<Self> {
        if !factor.is_finite() || factor == 0.0 {
            return None;
        }
        Some(Transform {
            matrix: DMat4::from_scale(DVec3::splat(factor.abs())),
        })
    }

    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.compose(&Transform::translation(DVec3::new(dx, dy, dz)));
    }

    /// Rotate about `axis`; a degenerate axis leaves the transform unchanged.
    pub fn rotate(&mut self, axis: DVec3, degrees: f64) {
        match Transform::rotation(axis, degrees) {
            Some(rot) => self.compose(&rot),
            None => trace!(?axis, degrees, "ignoring rotation about degenerate axis"),
        }
    }

    pub fn scale(&mut self, factor: f64) {
        if let Some(scl) = Transform::scaling(factor) {
            self.compose(&scl);
        }
    }

    pub fn reset(&mut self) {
        self.matrix = DMat4::IDENTITY;
    }

    /// `this <- this x other`: the result applies `self` first, then `other`.
    pub fn compose(&mut self, other: &Transform) {
        self.matrix = other.matrix * self.matrix;
    }

    /// Pure form of [`compose`](Self::compose).
    #[must_use]
    pub fn then(mut self, other: &Transform) -> Transform {
        self.compose(other);
        self
    }

    pub fn apply(&self, p: DVec3) -> DVec3 {
        self.matrix.transform_point3(p)
    }

    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }
}

impl From<[[f64; 4]; 4]> for Transform {
    fn from(cols: [[f64; 4]; 4]) -> Self {
        Transform {
            matrix: DMat4::from_cols_array_2d(&cols),
        }
    }
}

impl From<Transform> for [[f64; 4]; 4] {
    fn from(t: Transform) -> Self {
        t.matrix.to_cols_array_2d()
    }
}

// ============================================================================
// Soft transform queue
// ============================================================================

/// A soft transform waiting for the next render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Translate(DVec3),
    Rotate { axis: DVec3, degrees: f64 },
    Scale(f64),
    /// Rotation about an axis through the parent's origin, applied after
    /// any queued translation.
    Revolve { axis: DVec3, degrees: f64 },
}

impl TransformOp {
    pub fn to_transform(self) -> Transform {
        match self {
            TransformOp::Translate(d) => Transform::translation(d),
            TransformOp::Rotate { axis, degrees } | TransformOp::Revolve { axis, degrees } => {
                Transform::rotation(axis, degrees).unwrap_or_default()
            }
            TransformOp::Scale(s) => Transform::scaling(s).unwrap_or_default(),
        }
    }

    /// Rotations and scales go to the front of the queue so they act on the
    /// geometry before any translation moves its drawing origin.
    fn goes_first(self) -> bool {
        match self {
            TransformOp::Rotate { .. } | TransformOp::Scale(_) => true,
            TransformOp::Translate(_) | TransformOp::Revolve { .. } => false,
        }
    }
}

/// Pending soft transforms of one node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingOps {
    ops: VecDeque<TransformOp>,
}

impl PendingOps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: TransformOp) {
        if op.goes_first() {
            self.ops.push_front(op);
        } else {
            self.ops.push_back(op);
        }
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransformOp> {
        self.ops.iter()
    }

    /// Compose every queued op into `acc` in queue order and empty the queue.
    pub fn drain_into(&mut self, acc: &mut Transform) {
        for op in self.ops.drain(..) {
            acc.compose(&op.to_transform());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_vec_eq(actual: DVec3, expected: DVec3) {
        assert!(
            (actual - expected).length() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    // ========================================================================
    // Transform tests
    // ========================================================================

    #[test]
    fn identity_leaves_points_alone() {
        let p = DVec3::new(1.0, -2.0, 3.5);
        assert_vec_eq(Transform::new().apply(p), p);
    }

    #[test]
    fn rotate_z_is_counter_clockwise() {
        let mut t = Transform::new();
        t.rotate(DVec3::Z, 90.0);
        assert_vec_eq(t.apply(DVec3::X), DVec3::Y);
    }

    #[test]
    fn rotate_axis_need_not_be_normalized() {
        let mut a = Transform::new();
        a.rotate(DVec3::new(0.0, 5.0, 0.0), 30.0);
        let mut b = Transform::new();
        b.rotate(DVec3::Y, 30.0);
        assert_vec_eq(a.apply(DVec3::new(1.0, 2.0, 3.0)), b.apply(DVec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn degenerate_rotation_is_noop() {
        let mut t = Transform::new();
        t.translate(1.0, 2.0, 3.0);
        let before = t;
        t.rotate(DVec3::ZERO, 45.0);
        t.rotate(DVec3::new(f64::NAN, 0.0, 1.0), 45.0);
        assert_eq!(t, before);
    }

    #[test]
    fn scale_uses_magnitude_and_ignores_zero() {
        let mut t = Transform::new();
        t.scale(-2.0);
        t.scale(0.0);
        assert_vec_eq(t.apply(DVec3::ONE), DVec3::splat(2.0));
    }

    #[test]
    fn operations_apply_in_call_order() {
        let mut t = Transform::new();
        t.translate(1.0, 0.0, 0.0);
        t.rotate(DVec3::Z, 90.0);
        // translated to (1,0,0) then rotated onto the y axis
        assert_vec_eq(t.apply(DVec3::ZERO), DVec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn compose_applies_self_then_other() {
        let mut a = Transform::new();
        a.rotate(DVec3::new(1.0, 1.0, 0.0), 40.0);
        a.scale(1.5);
        let mut b = Transform::new();
        b.translate(3.0, -1.0, 2.0);
        b.rotate(DVec3::Z, -70.0);

        let p = DVec3::new(0.5, 2.0, -1.0);
        let composed = a.then(&b);
        assert_vec_eq(composed.apply(p), b.apply(a.apply(p)));
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut t = Transform::new();
        t.translate(4.0, 4.0, 4.0);
        t.reset();
        assert_eq!(t, Transform::IDENTITY);
    }

    // ========================================================================
    // Pending queue tests
    // ========================================================================

    #[test]
    fn rotates_and_scales_jump_the_queue() {
        let mut q = PendingOps::new();
        q.push(TransformOp::Translate(DVec3::X));
        q.push(TransformOp::Rotate {
            axis: DVec3::Z,
            degrees: 90.0,
        });
        q.push(TransformOp::Scale(2.0));
        q.push(TransformOp::Revolve {
            axis: DVec3::Z,
            degrees: 90.0,
        });

        let kinds: Vec<_> = q
            .iter()
            .map(|op| match op {
                TransformOp::Translate(_) => "translate",
                TransformOp::Rotate { .. } => "rotate",
                TransformOp::Scale(_) => "scale",
                TransformOp::Revolve { .. } => "revolve",
            })
            .collect();
        assert_eq!(kinds, ["scale", "rotate", "translate", "revolve"]);
    }

    #[test]
    fn rotate_after_translate_keeps_drawing_origin() {
        let mut q = PendingOps::new();
        q.push(TransformOp::Translate(DVec3::new(5.0, 0.0, 0.0)));
        q.push(TransformOp::Rotate {
            axis: DVec3::Z,
            degrees: 90.0,
        });

        let mut acc = Transform::new();
        q.drain_into(&mut acc);
        assert!(q.is_empty());
        assert_vec_eq(acc.apply(DVec3::ZERO), DVec3::new(5.0, 0.0, 0.0));
        assert_vec_eq(acc.apply(DVec3::X), DVec3::new(5.0, 1.0, 0.0));
    }

    #[test]
    fn revolve_after_translate_orbits() {
        let mut q = PendingOps::new();
        q.push(TransformOp::Translate(DVec3::new(5.0, 0.0, 0.0)));
        q.push(TransformOp::Revolve {
            axis: DVec3::Z,
            degrees: 90.0,
        });

        let mut acc = Transform::new();
        q.drain_into(&mut acc);
        assert_vec_eq(acc.apply(DVec3::ZERO), DVec3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn serializes_as_column_arrays() {
        let t = Transform::translation(DVec3::new(1.0, 2.0, 3.0));
        let cols: [[f64; 4]; 4] = t.into();
        assert_eq!(cols[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(Transform::from(cols), t);
    }
}
