//! Node types stored in the scene arena.

use std::fmt;

use glam::DVec3;

use crate::drag::DragBinding;
use crate::errors::{StyleError, rejected};
use crate::path::DrawPrimitive;
use crate::point::Point3;
use crate::transform::{PendingOps, Transform};
use crate::types::{self, FontSize, FontWeight, LabelOrigin, LineCap, Rgba};

/// Handle to a node in a [`Scene`](super::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The four node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Group,
    /// Stroked outline
    Path,
    /// Filled and shaded outline
    Shape,
    /// Stroke-font string
    Text,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Group => "GROUP",
            NodeKind::Path => "PATH",
            NodeKind::Shape => "SHAPE",
            NodeKind::Text => "TEXT",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Per-node transform state
// ============================================================================

/// Soft transform state shared by groups and leaves.
#[derive(Debug, Clone, Default)]
pub struct Placement {
    /// Soft transforms waiting for the next render pass
    pub(crate) pending: PendingOps,
    /// Accumulated soft offset from the parent
    pub(crate) offset: Transform,
    /// Transform applied on the last render pass
    pub(crate) net: Transform,
    /// `(0,0,0)` carried through the last net transform
    pub(crate) drawing_origin: Point3,
}

impl Placement {
    pub fn offset(&self) -> &Transform {
        &self.offset
    }

    pub fn net(&self) -> &Transform {
        &self.net
    }

    pub fn drawing_origin(&self) -> DVec3 {
        self.drawing_origin.transformed
    }

    pub fn pending(&self) -> &PendingOps {
        &self.pending
    }
}

// ============================================================================
// Nodes
// ============================================================================

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) placement: Placement,
    pub(crate) body: NodeBody,
}

#[derive(Debug, Clone)]
pub enum NodeBody {
    Group(Group),
    Leaf(Leaf),
}

impl Node {
    pub(crate) fn new(body: NodeBody) -> Self {
        Node {
            parent: None,
            placement: Placement::default(),
            body,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn kind(&self) -> NodeKind {
        match &self.body {
            NodeBody::Group(_) => NodeKind::Group,
            NodeBody::Leaf(leaf) => leaf.node_kind(),
        }
    }

    pub fn centroid(&self) -> &Point3 {
        match &self.body {
            NodeBody::Group(g) => &g.centroid,
            NodeBody::Leaf(l) => &l.centroid,
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match &self.body {
            NodeBody::Leaf(l) => Some(l),
            NodeBody::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match &self.body {
            NodeBody::Group(g) => Some(g),
            NodeBody::Leaf(_) => None,
        }
    }

    pub(crate) fn as_leaf_mut(&mut self) -> Option<&mut Leaf> {
        match &mut self.body {
            NodeBody::Leaf(l) => Some(l),
            NodeBody::Group(_) => None,
        }
    }

    pub(crate) fn as_group_mut(&mut self) -> Option<&mut Group> {
        match &mut self.body {
            NodeBody::Group(g) => Some(g),
            NodeBody::Leaf(_) => None,
        }
    }
}

/// An ordered collection of child nodes.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub(crate) children: Vec<NodeId>,
    /// Mean of the children's centroids
    pub(crate) centroid: Point3,
    /// Binding handed to leaves added after drag was enabled on the group
    pub(crate) drag: Option<DragBinding>,
}

impl Group {
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn centroid(&self) -> &Point3 {
        &self.centroid
    }

    pub fn drag(&self) -> Option<&DragBinding> {
        self.drag.as_ref()
    }
}

/// Layout of a text leaf, in glyph units.
#[derive(Debug, Clone)]
pub struct TextLayout {
    pub(crate) width: f64,
    pub(crate) height: f64,
    /// Box used for hit testing
    pub(crate) bbox: Vec<DrawPrimitive>,
    /// Label origin offset and font scaling, rebuilt every render pass
    pub(crate) label_transform: Transform,
}

impl TextLayout {
    /// Build the layout and its bounding box for a string `width` x `height`.
    /// The box sits a quarter of the height below the baseline.
    pub(crate) fn new(width: f64, height: f64) -> Self {
        let dy = 0.25 * height;
        let bbox = vec![
            DrawPrimitive::move_to(DVec3::new(0.0, height - dy, 0.0)),
            DrawPrimitive::line_to(DVec3::new(0.0, -dy, 0.0)),
            DrawPrimitive::line_to(DVec3::new(width, -dy, 0.0)),
            DrawPrimitive::line_to(DVec3::new(width, height - dy, 0.0)),
            DrawPrimitive::ClosePath,
        ];
        TextLayout {
            width,
            height,
            bbox,
            label_transform: Transform::IDENTITY,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bbox(&self) -> &[DrawPrimitive] {
        &self.bbox
    }

    pub fn label_transform(&self) -> &Transform {
        &self.label_transform
    }
}

#[derive(Debug, Clone)]
pub enum LeafKind {
    Path,
    Shape,
    Text(TextLayout),
}

/// A drawable outline with its style.
#[derive(Debug, Clone)]
pub struct Leaf {
    pub(crate) kind: LeafKind,
    pub(crate) prims: Vec<DrawPrimitive>,
    pub(crate) centroid: Point3,
    /// End point of the unit normal drawn from the centroid
    pub(crate) normal: Point3,
    pub(crate) style: Style,
    /// Hard transforms of text leaves, whose geometry is never rewritten
    pub(crate) hard_offset: Transform,
    pub(crate) drag: Option<DragBinding>,
}

impl Leaf {
    pub(crate) fn new(kind: LeafKind, prims: Vec<DrawPrimitive>, style: Style) -> Self {
        let centroid = crate::path::centroid(&prims).unwrap_or_default();
        let normal = centroid + crate::path::face_normal(&prims, centroid);
        Leaf {
            kind,
            prims,
            centroid: centroid.into(),
            normal: normal.into(),
            style,
            hard_offset: Transform::IDENTITY,
            drag: None,
        }
    }

    pub fn node_kind(&self) -> NodeKind {
        match self.kind {
            LeafKind::Path => NodeKind::Path,
            LeafKind::Shape => NodeKind::Shape,
            LeafKind::Text(_) => NodeKind::Text,
        }
    }

    pub fn kind(&self) -> &LeafKind {
        &self.kind
    }

    pub fn text(&self) -> Option<&TextLayout> {
        match &self.kind {
            LeafKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.prims
    }

    pub fn centroid(&self) -> &Point3 {
        &self.centroid
    }

    pub fn normal(&self) -> &Point3 {
        &self.normal
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn hard_offset(&self) -> &Transform {
        &self.hard_offset
    }

    pub fn drag(&self) -> Option<&DragBinding> {
        self.drag.as_ref()
    }

    /// Current unit normal, after the last render pass.
    pub fn unit_normal(&self) -> DVec3 {
        (self.normal.transformed - self.centroid.transformed)
            .try_normalize()
            .unwrap_or(DVec3::Z)
    }

    /// Permanently transform the outline.
    pub(crate) fn hard_transform(&mut self, t: &Transform) {
        match self.kind {
            LeafKind::Text(_) => self.hard_offset.compose(t),
            LeafKind::Path | LeafKind::Shape => {
                for prim in &mut self.prims {
                    prim.hard_transform(t);
                }
            }
        }
        self.centroid.hard_transform(t);
        self.normal.hard_transform(t);
    }

    /// Reflect the normal end point through the centroid.
    pub(crate) fn flip_normal(&mut self) {
        let flipped = 2.0 * self.centroid.original - self.normal.original;
        self.normal = Point3::from_vec(flipped);
    }
}

// ============================================================================
// Style
// ============================================================================

/// Per-leaf style. `None` colors and font metrics fall back to the
/// renderer defaults at paint time.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub stroke: Option<Rgba>,
    pub fill: Option<Rgba>,
    pub back: Option<Rgba>,
    /// Skip painting when the back of the leaf faces the viewer
    pub back_hidden: bool,
    /// Line width in pixels; `None` uses the default pen width
    pub line_width: Option<f64>,
    /// Soft scales applied so far, multiplied into the line width
    pub width_scale: f64,
    pub cap: LineCap,
    pub font_size: Option<FontSize>,
    pub font_weight: Option<FontWeight>,
    pub lorg: LabelOrigin,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            stroke: None,
            fill: None,
            back: None,
            back_hidden: false,
            line_width: None,
            width_scale: 1.0,
            cap: LineCap::Butt,
            font_size: None,
            font_weight: None,
            lorg: LabelOrigin::default(),
        }
    }
}

impl Style {
    pub fn set_stroke_color(&mut self, value: &str) -> Result<(), StyleError> {
        self.stroke = Some(rejected("strokeColor", value.parse())?);
        Ok(())
    }

    pub fn set_fill_color(&mut self, value: &str) -> Result<(), StyleError> {
        self.fill = Some(rejected("fillColor", value.parse())?);
        Ok(())
    }

    pub fn set_back_color(&mut self, value: &str) -> Result<(), StyleError> {
        self.back = Some(rejected("backColor", value.parse())?);
        Ok(())
    }

    pub fn set_line_width(&mut self, value: f64) -> Result<(), StyleError> {
        let width = types::positive(value).map_err(|source| StyleError::Numeric {
            what: "line width",
            source,
        });
        self.line_width = Some(rejected("lineWidth", width)?);
        Ok(())
    }

    pub fn set_line_cap(&mut self, value: &str) -> Result<(), StyleError> {
        self.cap = rejected("strokeCap", value.parse())?;
        Ok(())
    }

    pub fn set_font_size(&mut self, value: f64) -> Result<(), StyleError> {
        self.font_size = Some(rejected("fontSize", FontSize::try_new(value))?);
        Ok(())
    }

    pub fn set_font_weight(&mut self, value: f64) -> Result<(), StyleError> {
        self.font_weight = Some(rejected("fontWeight", FontWeight::try_new(value))?);
        Ok(())
    }

    pub fn set_lorg(&mut self, value: i64) -> Result<(), StyleError> {
        self.lorg = rejected("lorg", LabelOrigin::try_new(value))?;
        Ok(())
    }

    /// Line width after soft scaling, or `default` scaled when unset.
    pub fn effective_line_width(&self, default: f64) -> f64 {
        self.line_width.unwrap_or(default) * self.width_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{compile, shapes};

    #[test]
    fn rejected_values_keep_the_previous_one() {
        let mut style = Style::default();
        style.set_fill_color("red").unwrap();
        assert!(style.set_fill_color("not-a-color").is_err());
        assert_eq!(style.fill, Some(Rgba::rgb(255, 0, 0)));

        style.set_lorg(5).unwrap();
        assert_eq!(
            style.set_lorg(10),
            Err(StyleError::LabelOrigin { value: 10 })
        );
        assert_eq!(style.lorg, LabelOrigin::CENTER);

        assert!(style.set_font_weight(950.0).is_err());
        assert!(style.set_font_size(4.0).is_err());
        assert!(style.set_line_cap("pointy").is_err());
        assert!(style.set_line_width(f64::NAN).is_err());
        assert_eq!(style.font_weight, None);
        assert_eq!(style.font_size, None);
        assert_eq!(style.cap, LineCap::Butt);
        assert_eq!(style.line_width, None);
    }

    #[test]
    fn effective_width_includes_soft_scale() {
        let mut style = Style::default();
        style.width_scale = 2.0;
        assert_eq!(style.effective_line_width(1.5), 3.0);
        style.set_line_width(4.0).unwrap();
        assert_eq!(style.effective_line_width(1.5), 8.0);
    }

    #[test]
    fn leaf_normal_is_stored_as_end_point() {
        let leaf = Leaf::new(LeafKind::Shape, compile(&shapes::square(2.0)), Style::default());
        assert_eq!(leaf.centroid.original, DVec3::ZERO);
        assert_eq!(leaf.normal.original, DVec3::Z);
    }

    #[test]
    fn flip_normal_reflects_through_centroid() {
        let mut leaf = Leaf::new(LeafKind::Shape, compile(&shapes::square(2.0)), Style::default());
        leaf.hard_transform(&Transform::translation(DVec3::new(1.0, 1.0, 1.0)));
        leaf.flip_normal();
        assert_eq!(leaf.normal.original, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn text_hard_transforms_go_to_the_offset() {
        let mut leaf = Leaf::new(
            LeafKind::Text(TextLayout::new(10.0, 29.0)),
            vec![DrawPrimitive::move_to(DVec3::ZERO), DrawPrimitive::line_to(DVec3::X)],
            Style::default(),
        );
        leaf.hard_transform(&Transform::translation(DVec3::new(0.0, 5.0, 0.0)));
        assert_eq!(leaf.prims[1].end().unwrap().original, DVec3::X);
        assert_eq!(leaf.hard_offset.apply(DVec3::ZERO), DVec3::new(0.0, 5.0, 0.0));
        assert_eq!(leaf.centroid.original, DVec3::new(0.5, 5.0, 0.0));
    }

    #[test]
    fn text_box_spans_the_string() {
        let layout = TextLayout::new(40.0, 20.0);
        let ends: Vec<_> = layout
            .bbox
            .iter()
            .filter_map(DrawPrimitive::end)
            .map(|p| p.original)
            .collect();
        assert_eq!(
            ends,
            [
                DVec3::new(0.0, 15.0, 0.0),
                DVec3::new(0.0, -5.0, 0.0),
                DVec3::new(40.0, -5.0, 0.0),
                DVec3::new(40.0, 15.0, 0.0),
            ]
        );
    }
}
