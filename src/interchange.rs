//! JSON interchange of scene trees.
//!
//! A saved scene is a `Component` document wrapping one [`Record`]. Leaves
//! store their outline in original coordinates rounded to 3 decimals, so a
//! scene survives a save and load with the same path data, centroids and
//! normals.
//!
//! ```json
//! {
//!   "type": "Component",
//!   "name": "Object1",
//!   "ComponentData": {
//!     "type": "GROUP",
//!     "children": [
//!       { "type": "SHAPE", "fillColor": "rgba(255,0,0,1)", "pathData": ["M", 1.0, 0.0, 0.0, ...] }
//!     ]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::InterchangeError;
use crate::log::debug;
use crate::path::{Cgo, compile};
use crate::point::Point3;
use crate::scene::{Leaf, LeafKind, NodeBody, NodeId, NodeKind, Scene, Style, TextLayout};
use crate::transform::Transform;
use crate::types::{FontSize, FontWeight, LabelOrigin, LineCap, Rgba};

const DOCUMENT_TYPE: &str = "Component";
const DEFAULT_NAME: &str = "Object1";
const DECIMALS: i32 = 3;

/// Top level wrapper of a saved scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(rename = "ComponentData")]
    pub data: Record,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

/// One node of a saved scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Record {
    Group {
        #[serde(default)]
        children: Vec<Record>,
    },
    Path(LeafRecord),
    Shape(LeafRecord),
    Text(LeafRecord),
}

impl Record {
    pub fn kind(&self) -> NodeKind {
        match self {
            Record::Group { .. } => NodeKind::Group,
            Record::Path(_) => NodeKind::Path,
            Record::Shape(_) => NodeKind::Shape,
            Record::Text(_) => NodeKind::Text,
        }
    }
}

/// Fields of a saved leaf. Unset style values are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeafRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_color: Option<Rgba>,
    pub back_hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_ofs_tfm: Option<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_cap: Option<LineCap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lorg: Option<LabelOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_data: Option<Cgo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_box_data: Option<Cgo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<[f64; 3]>,
}

fn rnd(v: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    (v * scale).round() / scale
}

fn rounded(p: &Point3) -> [f64; 3] {
    let v = p.original;
    [rnd(v.x), rnd(v.y), rnd(v.z)]
}

impl LeafRecord {
    fn from_leaf(leaf: &Leaf) -> Self {
        let style = leaf.style();
        let mut record = LeafRecord {
            fill_color: style.fill,
            stroke_color: style.stroke,
            back_color: style.back,
            back_hidden: style.back_hidden,
            hard_ofs_tfm: (*leaf.hard_offset() != Transform::IDENTITY).then_some(*leaf.hard_offset()),
            line_width: style.line_width,
            stroke_cap: Some(style.cap),
            font_size: style.font_size,
            font_weight: style.font_weight,
            lorg: Some(style.lorg),
            path_data: Some(Cgo::from_primitives(leaf.primitives(), DECIMALS)),
            centroid: Some(rounded(leaf.centroid())),
            normal: Some(rounded(leaf.normal())),
            ..LeafRecord::default()
        };
        if let Some(layout) = leaf.text() {
            record.width = Some(layout.width());
            record.height = Some(layout.height());
            record.text_box_data = Some(Cgo::from_primitives(layout.bbox(), DECIMALS));
        }
        record
    }

    fn style(&self) -> Result<Style, InterchangeError> {
        let line_width = self.line_width.unwrap_or(1.0);
        if !(line_width.is_finite() && line_width > 0.0) {
            return Err(InterchangeError::BadValue {
                field: "lineWidth",
                value: line_width.to_string(),
            });
        }
        Ok(Style {
            stroke: self.stroke_color,
            fill: self.fill_color,
            back: self.back_color,
            back_hidden: self.back_hidden,
            line_width: Some(line_width),
            cap: self.stroke_cap.unwrap_or(LineCap::Butt),
            font_size: self.font_size,
            font_weight: self.font_weight,
            lorg: self.lorg.unwrap_or_default(),
            ..Style::default()
        })
    }
}

impl Scene {
    /// The record tree of `root` and everything below it.
    pub fn encode(&self, root: NodeId) -> Record {
        match &self.node(root).body {
            NodeBody::Group(group) => Record::Group {
                children: group.children().iter().map(|&c| self.encode(c)).collect(),
            },
            NodeBody::Leaf(leaf) => {
                let record = LeafRecord::from_leaf(leaf);
                match leaf.kind() {
                    LeafKind::Path => Record::Path(record),
                    LeafKind::Shape => Record::Shape(record),
                    LeafKind::Text(_) => Record::Text(record),
                }
            }
        }
    }

    /// Serialize `root` as a `Component` document named `name`.
    pub fn to_json(&self, root: NodeId, name: Option<&str>) -> Result<String, InterchangeError> {
        let doc = Document {
            doc_type: DOCUMENT_TYPE.to_string(),
            name: name.unwrap_or(DEFAULT_NAME).to_string(),
            data: self.encode(root),
        };
        Ok(serde_json::to_string(&doc)?)
    }

    /// Rebuild a record tree as new nodes of this scene and return its root.
    /// Saved centroids and normals replace the ones computed from the outline.
    pub fn decode(&mut self, record: &Record) -> Result<NodeId, InterchangeError> {
        let (kind, leaf) = match record {
            Record::Group { children } => {
                let ids = children
                    .iter()
                    .map(|child| self.decode(child))
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(self.create_group(&ids));
            }
            Record::Path(leaf) | Record::Shape(leaf) | Record::Text(leaf) => (record.kind(), leaf),
        };

        let path = leaf
            .path_data
            .as_ref()
            .ok_or(InterchangeError::MissingPathData { kind: kind.as_str() })?;
        let prims = compile(path);
        if prims.is_empty() {
            return Err(InterchangeError::BadValue {
                field: "pathData",
                value: path.to_string(),
            });
        }

        let leaf_kind = match kind {
            NodeKind::Text => {
                let mut layout = TextLayout::new(leaf.width.unwrap_or(0.0), leaf.height.unwrap_or(0.0));
                if let Some(bbox) = &leaf.text_box_data {
                    layout.bbox = compile(bbox);
                }
                LeafKind::Text(layout)
            }
            NodeKind::Shape => LeafKind::Shape,
            _ => LeafKind::Path,
        };

        let mut node = Leaf::new(leaf_kind, prims, leaf.style()?);
        if let Some(t) = leaf.hard_ofs_tfm {
            node.hard_offset = t;
        }
        if let Some([x, y, z]) = leaf.centroid {
            node.centroid = Point3::new(x, y, z);
        }
        if let Some([x, y, z]) = leaf.normal {
            node.normal = Point3::new(x, y, z);
        }
        Ok(self.insert_leaf(node))
    }

    /// Load a `Component` document into this scene and return its root.
    pub fn from_json(&mut self, json: &str) -> Result<NodeId, InterchangeError> {
        let doc: Document = serde_json::from_str(json)?;
        if doc.doc_type != DOCUMENT_TYPE {
            return Err(InterchangeError::DocumentType { found: doc.doc_type });
        }
        debug!(name = %doc.name, kind = %doc.data.kind(), "loading scene document");
        self.decode(&doc.data)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use insta::assert_snapshot;
    use serde_json::{Value, json};

    use super::*;
    use crate::path::shapes;

    fn line() -> Cgo {
        Cgo::new().cmd('M').pt(0.0, 0.0, 0.0).cmd('L').pt(2.0, 0.0, 0.0)
    }

    fn reencode(json: &str) -> Record {
        let mut scene = Scene::new();
        let id = scene.from_json(json).unwrap();
        scene.encode(id)
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    #[test]
    fn path_record() {
        let mut scene = Scene::new();
        let id = scene.compile_path(&line(), Some(Rgba::RED), Some(2.0));
        let json = serde_json::to_string(&scene.encode(id)).unwrap();
        assert_snapshot!(json, @r#"{"type":"PATH","strokeColor":"rgba(255,0,0,1)","backHidden":false,"lineWidth":2.0,"strokeCap":"butt","lorg":7,"pathData":["M",0.0,0.0,0.0,"L",2.0,0.0,0.0],"centroid":[1.0,0.0,0.0],"normal":[1.0,0.0,1.0]}"#);
    }

    #[test]
    fn empty_group_document() {
        let mut scene = Scene::new();
        let g = scene.create_group(&[]);
        assert_snapshot!(scene.to_json(g, None).unwrap(), @r#"{"type":"Component","name":"Object1","ComponentData":{"type":"GROUP","children":[]}}"#);
    }

    #[test]
    fn coordinates_are_rounded() {
        let mut scene = Scene::new();
        let cgo = Cgo::new().cmd('M').pt(0.12345, 1.0 / 3.0, -2.0004).cmd('L').pt(1.0, 1.0, 0.0);
        let id = scene.compile_path(&cgo, None, None);
        let Record::Path(leaf) = scene.encode(id) else {
            panic!("expected a path record");
        };
        assert_eq!(leaf.path_data.unwrap().to_string(), "M 0.123 0.333 -2 L 1 1 0");
        assert_eq!(leaf.line_width, None);
    }

    #[test]
    fn text_records_carry_their_box() {
        let mut scene = Scene::new();
        let t = scene.compile_text("Hi", Some(Rgba::BLACK), None, Some(FontWeight::BOLD), LabelOrigin::CENTER);
        let value: Value = serde_json::from_str(&scene.to_json(t, Some("label")).unwrap()).unwrap();
        assert_eq!(value["name"], "label");
        let data = &value["ComponentData"];
        assert_eq!(data["type"], "TEXT");
        assert_eq!(data["lorg"], 5);
        assert_eq!(data["fontWeight"], json!(700.0));
        assert_eq!(data["strokeCap"], "round");
        assert!(data["textBoxData"].is_array());
        assert!(data["width"].as_f64().unwrap() > 0.0);
    }

    // ========================================================================
    // Round trips
    // ========================================================================

    #[test]
    fn shape_round_trip_keeps_path_and_colors() {
        let mut scene = Scene::new();
        let id = scene.compile_shape(&shapes::circle(10.0), "red".parse().ok(), "blue".parse().ok());
        let json = scene.to_json(id, None).unwrap();

        let Record::Shape(before) = scene.encode(id) else {
            panic!("expected a shape record");
        };
        let Record::Shape(after) = reencode(&json) else {
            panic!("expected a shape record");
        };
        assert_eq!(after.path_data, before.path_data);
        assert_eq!(after.fill_color, Some(Rgba::RED));
        assert_eq!(after.back_color, Some(Rgba::rgb(0, 0, 255)));
        assert_eq!(after.centroid, before.centroid);
        assert_eq!(after.normal, before.normal);
    }

    fn leaves(record: &Record) -> Vec<(NodeKind, &LeafRecord)> {
        match record {
            Record::Group { children } => children.iter().flat_map(leaves).collect(),
            Record::Path(leaf) | Record::Shape(leaf) | Record::Text(leaf) => vec![(record.kind(), leaf)],
        }
    }

    #[test]
    fn group_round_trip() {
        let mut scene = Scene::new();
        let a = scene.compile_shape(&shapes::square(4.0), None, None);
        scene.rotate(a, DVec3::X, 30.0);
        let b = scene.compile_path(&shapes::cross(2.0), None, None);
        let t = scene.compile_text("x", None, None, None, LabelOrigin::default());
        scene.translate(t, 3.0, 0.0, 0.0);
        let inner = scene.create_group(&[b, t]);
        let root = scene.create_group(&[a, inner]);

        let first = scene.encode(root);
        let second = reencode(&scene.to_json(root, None).unwrap());
        let (before, after) = (leaves(&first), leaves(&second));
        assert_eq!(before.len(), 3);
        assert_eq!(before.len(), after.len());
        for ((kind_a, a), (kind_b, b)) in before.into_iter().zip(after) {
            assert_eq!(kind_a, kind_b);
            assert_eq!(a.path_data, b.path_data);
            assert_eq!(a.text_box_data, b.text_box_data);
            assert_eq!(a.centroid, b.centroid);
            assert_eq!(a.normal, b.normal);
            assert_eq!(a.hard_ofs_tfm, b.hard_ofs_tfm);
        }
        // decoding fills in the default line width
        let Record::Group { children } = &second else {
            panic!("expected a group record");
        };
        assert!(matches!(&children[0], Record::Shape(leaf) if leaf.line_width == Some(1.0)));
    }

    #[test]
    fn saved_normal_wins_over_outline() {
        let json = r#"{"type":"Component","ComponentData":{"type":"SHAPE","pathData":["M",0,0,0,"L",1,0,0,"L",0,1,0,"Z"],"centroid":[5,5,5],"normal":[5,5,4]}}"#;
        let mut scene = Scene::new();
        let id = scene.from_json(json).unwrap();
        let leaf = scene.leaf(id).unwrap();
        assert_eq!(leaf.centroid().original, DVec3::new(5.0, 5.0, 5.0));
        assert_eq!(leaf.normal().original, DVec3::new(5.0, 5.0, 4.0));
    }

    // ========================================================================
    // Decoding defaults and errors
    // ========================================================================

    #[test]
    fn decode_defaults() {
        let json = r#"{"type":"Component","ComponentData":{"type":"PATH","pathData":["M",0,0,0,"L",1,0,0]}}"#;
        let mut scene = Scene::new();
        let id = scene.from_json(json).unwrap();
        let style = scene.leaf(id).unwrap().style();
        assert_eq!(style.line_width, Some(1.0));
        assert_eq!(style.lorg, LabelOrigin::BASELINE_LEFT);
        assert_eq!(style.cap, LineCap::Butt);
        assert!(!style.back_hidden);
        assert_eq!(style.stroke, None);
    }

    #[test]
    fn wrong_document_type() {
        let json = r#"{"type":"Scene","ComponentData":{"type":"GROUP"}}"#;
        let err = Scene::new().from_json(json).unwrap_err();
        assert!(matches!(err, InterchangeError::DocumentType { found } if found == "Scene"));
    }

    #[test]
    fn leaf_without_path_data() {
        let json = r#"{"type":"Component","ComponentData":{"type":"TEXT","width":10}}"#;
        let err = Scene::new().from_json(json).unwrap_err();
        assert!(matches!(err, InterchangeError::MissingPathData { kind: "TEXT" }));
    }

    #[test]
    fn rejects_bad_values() {
        let mut scene = Scene::new();
        let unknown = r#"{"type":"Component","ComponentData":{"type":"SPHERE"}}"#;
        assert!(matches!(scene.from_json(unknown), Err(InterchangeError::Json(_))));
        let lorg = r#"{"type":"Component","ComponentData":{"type":"PATH","lorg":12,"pathData":["M",0,0,0]}}"#;
        assert!(matches!(scene.from_json(lorg), Err(InterchangeError::Json(_))));
        let width = r#"{"type":"Component","ComponentData":{"type":"PATH","lineWidth":-1,"pathData":["M",0,0,0]}}"#;
        assert!(matches!(
            scene.from_json(width),
            Err(InterchangeError::BadValue { field: "lineWidth", .. })
        ));
        let empty = r#"{"type":"Component","ComponentData":{"type":"PATH","pathData":[]}}"#;
        assert!(matches!(
            scene.from_json(empty),
            Err(InterchangeError::BadValue { field: "pathData", .. })
        ));
        assert!(scene.is_empty());
    }
}
