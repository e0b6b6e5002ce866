//! Transform propagation and perspective projection.
//!
//! Run once per render pass, root first. Every node folds its queued soft
//! transforms into its offset, combines the offset with the parent's net
//! transform and passes the result down. Geometry is then recomputed from
//! the original coordinates, so soft transforms never accumulate error.
//!
//! Groups and a root leaf keep their offset from pass to pass. A leaf
//! inside a group starts every pass from identity, so its soft transforms
//! only last for the pass they were queued for.

use glam::DVec3;

use crate::font;
use crate::scene::{Leaf, LeafKind, NodeBody, NodeId, Scene, Style, TextLayout};
use crate::transform::{Transform, TransformOp};
use crate::types::FontSize;

/// Per-pass values the propagation needs from the renderer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PassContext {
    /// Pixels per world unit
    pub xscl: f64,
    pub font_size: FontSize,
}

/// Propagate soft transforms from `id` down, `parent_net` being the net
/// transform of its parent (identity for the root).
pub(crate) fn propagate(scene: &mut Scene, id: NodeId, parent_net: &Transform, ctx: &PassContext) {
    let node = scene.node_mut(id);
    let placement = &mut node.placement;
    if let (Some(_), NodeBody::Leaf(leaf)) = (node.parent, &mut node.body) {
        placement.offset.reset();
        leaf.style.width_scale = placement
            .pending
            .iter()
            .filter_map(|op| match op {
                TransformOp::Scale(s) => Some(s.abs()),
                _ => None,
            })
            .product();
    }
    placement.pending.drain_into(&mut placement.offset);
    let soft = placement.offset.then(parent_net);

    let children = match &mut node.body {
        NodeBody::Group(g) => {
            g.centroid.soft_transform(&soft);
            node.placement.net = soft;
            g.children.clone()
        }
        NodeBody::Leaf(leaf) => {
            node.placement.net = place_leaf(leaf, &soft, ctx);
            Vec::new()
        }
    };
    let net = node.placement.net;
    node.placement.drawing_origin.soft_transform(&net);

    for child in children {
        propagate(scene, child, &net, ctx);
    }
}

/// Soft-transform a leaf's points and return its net transform.
fn place_leaf(leaf: &mut Leaf, soft: &Transform, ctx: &PassContext) -> Transform {
    leaf.centroid.soft_transform(soft);
    leaf.normal.soft_transform(soft);
    let net = leaf.hard_offset.then(soft);

    let full = match &mut leaf.kind {
        LeafKind::Text(layout) => {
            layout.label_transform = label_transform(layout, &leaf.style, ctx);
            let full = layout.label_transform.then(&net);
            for prim in &mut layout.bbox {
                prim.soft_transform(&full);
            }
            full
        }
        LeafKind::Path | LeafKind::Shape => net,
    };
    for prim in &mut leaf.prims {
        prim.soft_transform(&full);
    }
    net
}

/// Moves the label origin of the text box onto `(0, 0)` and scales glyph
/// units to the font size in pixels.
pub(crate) fn label_transform(layout: &TextLayout, style: &Style, ctx: &PassContext) -> Transform {
    let (ax, ay) = style.lorg.anchor(layout.width, layout.height);
    let shift = Transform::translation(DVec3::new(-ax, -ay + 0.25 * layout.height, 0.0));
    let size = style.font_size.unwrap_or(ctx.font_size).raw();
    let mag = size / ctx.xscl / font::CELL_HEIGHT;
    shift.then(&Transform::scaling(mag).unwrap_or_default())
}

/// Project every point below `id` onto the screen plane.
pub(crate) fn project(scene: &mut Scene, id: NodeId, viewpoint_distance: f64) {
    let children = match &mut scene.node_mut(id).body {
        NodeBody::Group(g) => {
            g.centroid.project(viewpoint_distance);
            g.children.clone()
        }
        NodeBody::Leaf(leaf) => {
            leaf.centroid.project(viewpoint_distance);
            leaf.normal.project(viewpoint_distance);
            for prim in &mut leaf.prims {
                prim.project(viewpoint_distance);
            }
            if let LeafKind::Text(layout) = &mut leaf.kind {
                for prim in &mut layout.bbox {
                    prim.project(viewpoint_distance);
                }
            }
            return;
        }
    };
    for child in children {
        project(scene, child, viewpoint_distance);
    }
}
