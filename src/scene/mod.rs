//! Scene graph arena.
//!
//! Nodes are owned by a [`Scene`] and addressed by [`NodeId`]. A node is
//! either a group with ordered children or a leaf carrying one outline.
//! Every attached node has exactly one parent; adding a node to a group
//! detaches it from its previous group.
//!
//! Two kinds of transforms act on nodes:
//! - hard transforms ([`Scene::translate`], [`Scene::rotate`],
//!   [`Scene::scale`]) rewrite geometry immediately and are meant for
//!   construction;
//! - soft transforms ([`Scene::transform`]) are queued and folded into the
//!   node's offset on the next render pass, leaving geometry untouched.

mod node;

pub use node::{
    Group, Leaf, LeafKind, Node, NodeBody, NodeId, NodeKind, Placement, Style, TextLayout,
};

use glam::DVec3;

use crate::drag::{DragBinding, DragCallbacks};
use crate::errors::{SceneError, StyleError};
use crate::font;
use crate::log::{debug, trace};
use crate::path::{Cgo, DrawPrimitive, compile};
use crate::point::Point3;
use crate::transform::{Transform, TransformOp};
use crate::types::{FontSize, FontWeight, LabelOrigin, LineCap, Rgba};

/// Arena of scene nodes.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Panics if `id` was not created by this scene.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Children of a group; empty for leaves.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).as_group().map_or(&[], Group::children)
    }

    pub fn leaf(&self, id: NodeId) -> Option<&Leaf> {
        self.node(id).as_leaf()
    }

    pub(crate) fn leaf_mut(&mut self, id: NodeId) -> Option<&mut Leaf> {
        self.node_mut(id).as_leaf_mut()
    }

    fn leaf_or_err(&mut self, id: NodeId) -> Result<&mut Leaf, StyleError> {
        self.leaf_mut(id).ok_or(StyleError::NotALeaf)
    }

    /// Drawing origin after the last render pass.
    pub fn drawing_origin(&self, id: NodeId) -> DVec3 {
        self.node(id).placement.drawing_origin()
    }

    /// `id` and every node below it, parents before children.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// Leaves at or below `id`, in child order.
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|&n| self.node(n).as_leaf().is_some())
            .collect()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    fn add_leaf(&mut self, kind: LeafKind, prims: Vec<DrawPrimitive>, style: Style) -> NodeId {
        self.insert_leaf(Leaf::new(kind, prims, style))
    }

    pub(crate) fn insert_leaf(&mut self, leaf: Leaf) -> NodeId {
        let id = self.insert(Node::new(NodeBody::Leaf(leaf)));
        debug!(%id, kind = %self.kind(id), "compiled leaf");
        id
    }

    /// A stroked outline. `None` uses the renderer's pen color and width.
    pub fn compile_path(&mut self, cgo: &Cgo, stroke: Option<Rgba>, line_width: Option<f64>) -> NodeId {
        let style = Style {
            stroke,
            line_width: line_width.filter(|w| w.is_finite() && *w > 0.0),
            ..Style::default()
        };
        self.add_leaf(LeafKind::Path, compile(cgo), style)
    }

    /// A filled outline, shaded front and back.
    pub fn compile_shape(&mut self, cgo: &Cgo, fill: Option<Rgba>, back: Option<Rgba>) -> NodeId {
        self.add_shape(compile(cgo), fill, back)
    }

    /// A shape from already compiled primitives.
    pub(crate) fn add_shape(&mut self, prims: Vec<DrawPrimitive>, fill: Option<Rgba>, back: Option<Rgba>) -> NodeId {
        let style = Style {
            fill,
            back,
            ..Style::default()
        };
        self.add_leaf(LeafKind::Shape, prims, style)
    }

    /// A string drawn in the stroke font. Its drawing origin is the point
    /// of the text box picked by `lorg`.
    pub fn compile_text(
        &mut self,
        text: &str,
        color: Option<Rgba>,
        size: Option<FontSize>,
        weight: Option<FontWeight>,
        lorg: LabelOrigin,
    ) -> NodeId {
        let outline = font::string_outline(text);
        let style = Style {
            stroke: color,
            line_width: Some(1.0),
            cap: LineCap::Round,
            font_size: size,
            font_weight: weight,
            lorg,
            ..Style::default()
        };
        let layout = TextLayout::new(outline.width, outline.height);
        self.add_leaf(LeafKind::Text(layout), compile(&outline.cgo), style)
    }

    /// A group holding `children`, each detached from any previous group.
    pub fn create_group(&mut self, children: &[NodeId]) -> NodeId {
        let id = self.insert(Node::new(NodeBody::Group(Group::default())));
        for &child in children {
            self.attach(id, child);
        }
        self.update_group_centroid(id);
        id
    }

    /// Append `child` to `group`, detaching it from its previous group.
    pub fn add_child(&mut self, group: NodeId, child: NodeId) -> Result<(), SceneError> {
        if self.node(group).as_group().is_none() {
            return Err(SceneError::NotAGroup);
        }
        if self.is_ancestor_or_self(child, group) {
            return Err(SceneError::Cycle);
        }
        self.attach(group, child);
        self.update_group_centroid(group);
        Ok(())
    }

    /// Remove `child` from `group`. Unrelated nodes are ignored.
    pub fn delete_child(&mut self, group: NodeId, child: NodeId) {
        let Some(g) = self.node_mut(group).as_group_mut() else {
            return;
        };
        let before = g.children.len();
        g.children.retain(|&c| c != child);
        if g.children.len() != before {
            self.node_mut(child).parent = None;
            self.update_group_centroid(group);
        }
    }

    fn attach(&mut self, group: NodeId, child: NodeId) {
        if let Some(old) = self.node(child).parent {
            self.delete_child(old, child);
        }
        let inherited = match self.node_mut(group).as_group_mut() {
            Some(g) => {
                g.children.push(child);
                g.drag.clone()
            }
            None => None,
        };
        self.node_mut(child).parent = Some(group);
        if let Some(binding) = inherited {
            self.inherit_drag(child, &binding);
        }
    }

    /// Give `binding` to every unbound node from `id` down.
    fn inherit_drag(&mut self, id: NodeId, binding: &DragBinding) {
        for n in self.descendants(id) {
            match &mut self.node_mut(n).body {
                NodeBody::Leaf(leaf) if leaf.drag.is_none() => leaf.drag = Some(binding.clone()),
                NodeBody::Group(g) if g.drag.is_none() => g.drag = Some(binding.clone()),
                _ => {}
            }
        }
    }

    /// Whether `candidate` is `node` or one of its ancestors.
    pub(crate) fn is_ancestor_or_self(&self, candidate: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == candidate {
                return true;
            }
            match self.node(node).parent {
                Some(p) => node = p,
                None => return false,
            }
        }
    }

    /// Recompute a group's centroid from its children. An empty group
    /// keeps the centroid it had.
    fn update_group_centroid(&mut self, group: NodeId) {
        let kids = self.children(group);
        if kids.is_empty() {
            return;
        }
        let sum: DVec3 = kids
            .iter()
            .map(|&c| self.node(c).centroid().original)
            .sum();
        let mean = sum / kids.len() as f64;
        if let Some(g) = self.node_mut(group).as_group_mut() {
            g.centroid = Point3::from_vec(mean);
        }
    }

    // ========================================================================
    // Hard transforms
    // ========================================================================

    fn hard_transform(&mut self, id: NodeId, t: &Transform) {
        for n in self.descendants(id) {
            match &mut self.node_mut(n).body {
                NodeBody::Leaf(leaf) => leaf.hard_transform(t),
                NodeBody::Group(g) => g.centroid.hard_transform(t),
            }
        }
    }

    /// Permanently move the geometry of `id` (and its descendants).
    pub fn translate(&mut self, id: NodeId, dx: f64, dy: f64, dz: f64) {
        self.hard_transform(id, &Transform::translation(DVec3::new(dx, dy, dz)));
    }

    /// Permanently rotate about `axis` through the drawing origin. A
    /// degenerate axis is ignored.
    pub fn rotate(&mut self, id: NodeId, axis: DVec3, degrees: f64) {
        match Transform::rotation(axis, degrees) {
            Some(t) => self.hard_transform(id, &t),
            None => trace!(%id, ?axis, "ignoring rotation about degenerate axis"),
        }
    }

    /// Permanently scale about the drawing origin by `|factor|`.
    pub fn scale(&mut self, id: NodeId, factor: f64) {
        if let Some(t) = Transform::scaling(factor) {
            self.hard_transform(id, &t);
        }
    }

    // ========================================================================
    // Soft transforms
    // ========================================================================

    /// Queue soft transforms on `id` for the next render pass.
    pub fn transform(&mut self, id: NodeId) -> SoftTransform<'_> {
        SoftTransform { scene: self, id }
    }

    // ========================================================================
    // Leaf utilities
    // ========================================================================

    pub fn flip_normal(&mut self, id: NodeId) -> Result<(), StyleError> {
        self.leaf_or_err(id)?.flip_normal();
        Ok(())
    }

    /// Validated access to a leaf's style.
    pub fn style_mut(&mut self, id: NodeId) -> Result<&mut Style, StyleError> {
        Ok(&mut self.leaf_or_err(id)?.style)
    }

    pub fn set_stroke_color(&mut self, id: NodeId, value: &str) -> Result<(), StyleError> {
        self.style_mut(id)?.set_stroke_color(value)
    }

    pub fn set_fill_color(&mut self, id: NodeId, value: &str) -> Result<(), StyleError> {
        self.style_mut(id)?.set_fill_color(value)
    }

    pub fn set_back_color(&mut self, id: NodeId, value: &str) -> Result<(), StyleError> {
        self.style_mut(id)?.set_back_color(value)
    }

    pub fn set_line_width(&mut self, id: NodeId, value: f64) -> Result<(), StyleError> {
        self.style_mut(id)?.set_line_width(value)
    }

    pub fn set_line_cap(&mut self, id: NodeId, value: &str) -> Result<(), StyleError> {
        self.style_mut(id)?.set_line_cap(value)
    }

    pub fn set_font_size(&mut self, id: NodeId, value: f64) -> Result<(), StyleError> {
        self.style_mut(id)?.set_font_size(value)
    }

    pub fn set_font_weight(&mut self, id: NodeId, value: f64) -> Result<(), StyleError> {
        self.style_mut(id)?.set_font_weight(value)
    }

    pub fn set_lorg(&mut self, id: NodeId, value: i64) -> Result<(), StyleError> {
        self.style_mut(id)?.set_lorg(value)
    }

    pub fn set_back_hidden(&mut self, id: NodeId, hidden: bool) -> Result<(), StyleError> {
        self.style_mut(id)?.back_hidden = hidden;
        Ok(())
    }

    /// Deep copy of `id`, detached from any group. Geometry, style and hard
    /// offsets are copied; soft transform state starts fresh and drag
    /// bindings are never copied.
    pub fn dup(&mut self, id: NodeId) -> NodeId {
        let children = match &self.node(id).body {
            NodeBody::Leaf(leaf) => {
                let copy = Leaf {
                    drag: None,
                    ..leaf.clone()
                };
                return self.insert(Node::new(NodeBody::Leaf(copy)));
            }
            NodeBody::Group(g) => g.children.clone(),
        };
        let copy = self.create_group(&[]);
        for child in children {
            let c = self.dup(child);
            self.attach(copy, c);
        }
        self.update_group_centroid(copy);
        copy
    }

    /// Attach `text` to a shape as a label: the text is moved by
    /// `(dx, dy)`, hidden from behind and given the shape's centroid and
    /// normal so that depth sorting keeps it on top of the shape. Returns
    /// the new group, or `None` when `shape` is not a shape.
    pub fn tag_shape(&mut self, shape: NodeId, text: NodeId, dx: f64, dy: f64) -> Option<NodeId> {
        if !self.adopt_tag(shape, text, dx, dy) {
            return None;
        }
        Some(self.create_group(&[shape, text]))
    }

    /// Add a label to a group made by [`tag_shape`](Self::tag_shape). The
    /// group's first child must be a shape; returns whether the text was
    /// added.
    pub fn append_tag(&mut self, group: NodeId, text: NodeId, dx: f64, dy: f64) -> bool {
        let Some(&shape) = self.children(group).first() else {
            return false;
        };
        if !self.adopt_tag(shape, text, dx, dy) {
            return false;
        }
        self.add_child(group, text).is_ok()
    }

    fn adopt_tag(&mut self, shape: NodeId, text: NodeId, dx: f64, dy: f64) -> bool {
        let Some(s) = self.leaf(shape).filter(|l| l.node_kind() == NodeKind::Shape) else {
            return false;
        };
        let (centroid, normal) = (s.centroid, s.normal);
        if self.leaf(text).is_none() {
            return false;
        }
        self.translate(text, dx, dy, 0.0);
        if let Some(t) = self.leaf_mut(text) {
            t.style.back_hidden = true;
            t.centroid = centroid;
            t.normal = normal;
        }
        true
    }

    // ========================================================================
    // Drag bindings
    // ========================================================================

    /// Make `id` draggable. For a group, every leaf below it that has no
    /// binding yet is bound with the group as the drag target.
    /// Leaves added to the group later pick up the same binding.
    pub fn enable_drag(&mut self, id: NodeId, callbacks: DragCallbacks) {
        let binding = DragBinding::new(callbacks, id);
        if let Some(leaf) = self.leaf_mut(id) {
            leaf.drag = Some(binding);
            return;
        }
        if let Some(g) = self.node_mut(id).as_group_mut() {
            g.drag = Some(binding.clone());
        }
        self.inherit_drag(id, &binding);
    }

    /// Remove drag bindings from `id` and every node below it.
    pub fn disable_drag(&mut self, id: NodeId) {
        for n in self.descendants(id) {
            match &mut self.node_mut(n).body {
                NodeBody::Leaf(leaf) => leaf.drag = None,
                NodeBody::Group(g) => g.drag = None,
            }
        }
    }
}

// ============================================================================
// Soft transform handle
// ============================================================================

/// Queues soft transforms on one node. Obtained from [`Scene::transform`].
pub struct SoftTransform<'a> {
    scene: &'a mut Scene,
    id: NodeId,
}

impl SoftTransform<'_> {
    fn push(&mut self, op: TransformOp) -> &mut Self {
        self.scene.node_mut(self.id).placement.pending.push(op);
        self
    }

    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) -> &mut Self {
        self.push(TransformOp::Translate(DVec3::new(dx, dy, dz)))
    }

    /// Spin about an axis through the drawing origin.
    pub fn rotate(&mut self, axis: DVec3, degrees: f64) -> &mut Self {
        if Transform::rotation(axis, degrees).is_none() {
            return self;
        }
        self.push(TransformOp::Rotate { axis, degrees })
    }

    /// Orbit about an axis through the parent's drawing origin.
    pub fn revolve(&mut self, axis: DVec3, degrees: f64) -> &mut Self {
        if Transform::rotation(axis, degrees).is_none() {
            return self;
        }
        self.push(TransformOp::Revolve { axis, degrees })
    }

    /// Scale about the drawing origin. Line widths scale too.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        if Transform::scaling(factor).is_none() {
            return self;
        }
        if let Some(leaf) = self.scene.leaf_mut(self.id) {
            leaf.style.width_scale *= factor.abs();
        }
        self.push(TransformOp::Scale(factor))
    }

    /// Drop queued transforms and the accumulated offset.
    pub fn reset(&mut self) -> &mut Self {
        let placement = &mut self.scene.node_mut(self.id).placement;
        placement.pending.clear();
        placement.offset.reset();
        if let Some(leaf) = self.scene.leaf_mut(self.id) {
            leaf.style.width_scale = 1.0;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::shapes;
    use std::rc::Rc;

    fn square(scene: &mut Scene, at: DVec3) -> NodeId {
        let id = scene.compile_shape(&shapes::square(2.0), None, None);
        scene.translate(id, at.x, at.y, at.z);
        id
    }

    // ========================================================================
    // Structure tests
    // ========================================================================

    #[test]
    fn group_centroid_is_mean_of_children() {
        let mut scene = Scene::new();
        let a = square(&mut scene, DVec3::new(2.0, 0.0, 0.0));
        let b = square(&mut scene, DVec3::new(0.0, 4.0, 0.0));
        let g = scene.create_group(&[a, b]);
        assert_eq!(scene.node(g).centroid().original, DVec3::new(1.0, 2.0, 0.0));
        assert_eq!(scene.parent(a), Some(g));
    }

    #[test]
    fn adding_moves_child_between_groups() {
        let mut scene = Scene::new();
        let a = square(&mut scene, DVec3::ZERO);
        let g1 = scene.create_group(&[a]);
        let g2 = scene.create_group(&[]);
        scene.add_child(g2, a).unwrap();
        assert!(scene.children(g1).is_empty());
        assert_eq!(scene.children(g2), [a]);
        assert_eq!(scene.parent(a), Some(g2));
    }

    #[test]
    fn cycles_and_leaf_parents_are_rejected() {
        let mut scene = Scene::new();
        let a = square(&mut scene, DVec3::ZERO);
        let inner = scene.create_group(&[a]);
        let outer = scene.create_group(&[inner]);
        assert_eq!(scene.add_child(inner, outer), Err(SceneError::Cycle));
        assert_eq!(scene.add_child(inner, inner), Err(SceneError::Cycle));
        assert_eq!(scene.add_child(a, outer), Err(SceneError::NotAGroup));
    }

    #[test]
    fn empty_group_keeps_its_centroid() {
        let mut scene = Scene::new();
        let a = square(&mut scene, DVec3::new(3.0, 0.0, 0.0));
        let g = scene.create_group(&[a]);
        scene.delete_child(g, a);
        assert_eq!(scene.parent(a), None);
        assert_eq!(scene.node(g).centroid().original, DVec3::new(3.0, 0.0, 0.0));
    }

    // ========================================================================
    // Transform tests
    // ========================================================================

    #[test]
    fn group_hard_transform_reaches_nested_leaves() {
        let mut scene = Scene::new();
        let a = square(&mut scene, DVec3::ZERO);
        let inner = scene.create_group(&[a]);
        let outer = scene.create_group(&[inner]);
        scene.translate(outer, 0.0, 0.0, 5.0);
        assert_eq!(scene.leaf(a).unwrap().centroid.original, DVec3::new(0.0, 0.0, 5.0));
        assert_eq!(scene.node(inner).centroid().original, DVec3::new(0.0, 0.0, 5.0));
        assert_eq!(scene.node(outer).centroid().original, DVec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn soft_scale_scales_line_width() {
        let mut scene = Scene::new();
        let p = scene.compile_path(&shapes::cross(2.0), None, Some(2.0));
        scene.transform(p).scale(-3.0).scale(0.0);
        let style = scene.leaf(p).unwrap().style();
        assert_eq!(style.effective_line_width(1.0), 6.0);
        assert_eq!(scene.node(p).placement().pending().len(), 1);
    }

    #[test]
    fn reset_clears_pending_and_offset() {
        let mut scene = Scene::new();
        let p = square(&mut scene, DVec3::ZERO);
        scene
            .transform(p)
            .translate(1.0, 0.0, 0.0)
            .rotate(DVec3::ZERO, 10.0)
            .rotate(DVec3::Y, 10.0);
        assert_eq!(scene.node(p).placement().pending().len(), 2);
        scene.transform(p).scale(2.0).reset();
        assert!(scene.node(p).placement().pending().is_empty());
        assert_eq!(*scene.node(p).placement().offset(), Transform::IDENTITY);
        assert_eq!(scene.leaf(p).unwrap().style().width_scale, 1.0);
    }

    // ========================================================================
    // Copy, tag and drag tests
    // ========================================================================

    #[test]
    fn dup_copies_geometry_but_not_drag() {
        let mut scene = Scene::new();
        let a = square(&mut scene, DVec3::new(1.0, 0.0, 0.0));
        scene.set_fill_color(a, "red").unwrap();
        scene.enable_drag(a, DragCallbacks::default());
        let g = scene.create_group(&[a]);

        let copy = scene.dup(a);
        let leaf = scene.leaf(copy).unwrap();
        assert!(leaf.drag().is_none());
        assert_eq!(leaf.style().fill, Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(leaf.centroid().original, DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(scene.parent(copy), None);

        let group_copy = scene.dup(g);
        assert_eq!(scene.children(group_copy).len(), 1);
        assert_ne!(scene.children(group_copy)[0], a);
    }

    #[test]
    fn tag_shape_shares_centroid_and_normal() {
        let mut scene = Scene::new();
        let shape = square(&mut scene, DVec3::new(0.0, 0.0, 4.0));
        let label = scene.compile_text("A", None, None, None, LabelOrigin::CENTER);
        let g = scene.tag_shape(shape, label, 1.0, 2.0).unwrap();

        assert_eq!(scene.children(g), [shape, label]);
        let text = scene.leaf(label).unwrap();
        let s = scene.leaf(shape).unwrap();
        assert!(text.style().back_hidden);
        assert_eq!(text.centroid().original, s.centroid().original);
        assert_eq!(text.normal().original, s.normal().original);
        assert_eq!(text.hard_offset().apply(DVec3::ZERO), DVec3::new(1.0, 2.0, 0.0));

        let path = scene.compile_path(&shapes::cross(1.0), None, None);
        assert_eq!(scene.tag_shape(path, label, 0.0, 0.0), None);

        let second = scene.compile_text("B", None, None, None, LabelOrigin::CENTER);
        assert!(scene.append_tag(g, second, 0.0, -2.0));
        assert_eq!(scene.children(g).len(), 3);
    }

    #[test]
    fn group_drag_targets_the_group_and_keeps_existing_bindings() {
        let mut scene = Scene::new();
        let a = square(&mut scene, DVec3::ZERO);
        let b = square(&mut scene, DVec3::X);
        scene.enable_drag(b, DragCallbacks::default());
        let g = scene.create_group(&[a, b]);

        let calls = Rc::new(std::cell::Cell::new(0));
        let seen = calls.clone();
        scene.enable_drag(
            g,
            DragCallbacks::default().on_grab(move |_, _| seen.set(seen.get() + 1)),
        );
        assert_eq!(scene.leaf(a).unwrap().drag().unwrap().target(), g);
        assert_eq!(scene.leaf(b).unwrap().drag().unwrap().target(), b);

        scene.disable_drag(g);
        assert!(scene.leaf(a).unwrap().drag().is_none());
        assert!(scene.leaf(b).unwrap().drag().is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn children_added_later_inherit_group_drag() {
        let mut scene = Scene::new();
        let a = square(&mut scene, DVec3::ZERO);
        let g = scene.create_group(&[a]);
        scene.enable_drag(g, DragCallbacks::default());

        let b = square(&mut scene, DVec3::X);
        scene.add_child(g, b).unwrap();
        assert_eq!(scene.leaf(b).unwrap().drag().unwrap().target(), g);

        // a sub-group and its leaves, one with its own binding
        let c = square(&mut scene, DVec3::Y);
        let d = square(&mut scene, DVec3::Z);
        scene.enable_drag(d, DragCallbacks::default());
        let sub = scene.create_group(&[c, d]);
        scene.add_child(g, sub).unwrap();
        assert_eq!(scene.leaf(c).unwrap().drag().unwrap().target(), g);
        assert_eq!(scene.leaf(d).unwrap().drag().unwrap().target(), d);
        assert_eq!(scene.node(sub).as_group().unwrap().drag().unwrap().target(), g);

        scene.disable_drag(g);
        let e = square(&mut scene, DVec3::NEG_X);
        scene.add_child(g, e).unwrap();
        assert!(scene.leaf(e).unwrap().drag().is_none());
        assert!(scene.leaf(c).unwrap().drag().is_none());
    }

    #[test]
    fn setters_on_groups_fail() {
        let mut scene = Scene::new();
        let g = scene.create_group(&[]);
        assert_eq!(scene.set_fill_color(g, "red"), Err(StyleError::NotALeaf));
        assert_eq!(scene.flip_normal(g), Err(StyleError::NotALeaf));
    }
}
