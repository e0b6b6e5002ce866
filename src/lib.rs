//! A software 3D renderer for scene graphs of paths, shapes and text.
//!
//! Geometry is built into a [`Scene`] from 3D command streams ([`Cgo`]),
//! grouped, moved with hard and soft transforms, then painted by a
//! [`Renderer`] onto any [`Surface`]: perspective projection, painter's
//! depth sort and Lambert shading of filled shapes.
//!
//! ```no_run
//! use painter3d::{Renderer, RenderOptions, Rgba, Scene, SvgSurface, shapes};
//! use glam::DVec3;
//!
//! let mut scene = Scene::new();
//! let face = scene.compile_shape(&shapes::square(40.0), Some(Rgba::STEEL_BLUE), None);
//! scene.transform(face).rotate(DVec3::Y, 30.0);
//!
//! let mut renderer = Renderer::new(SvgSurface::new(400.0, 400.0))?;
//! renderer.render(&mut scene, face, RenderOptions::default());
//! let svg = renderer.surface().to_svg();
//! # Ok::<(), painter3d::RenderError>(())
//! ```

use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "path.pest"]
pub struct PathParser;

pub mod log;

pub mod drag;
pub mod errors;
pub mod font;
pub mod interchange;
pub mod path;
pub mod point;
pub mod render;
pub mod revolve;
pub mod scene;
pub mod transform;
pub mod types;

pub use drag::{DragCallbacks, DragEvent, DragState};
pub use errors::{InterchangeError, PathError, RenderError, SceneError, StyleError};
pub use interchange::{Document, LeafRecord, Record};
pub use path::{Cgo, DrawPrimitive, shapes};
pub use point::Point3;
pub use render::{
    DrawCall, Paint, RecordingSurface, RenderDefaults, RenderOptions, RenderStats, Renderer, Stroke, Surface,
    SurfacePath, SvgSurface, Viewport,
};
pub use revolve::RevolveOptions;
pub use scene::{Leaf, LeafKind, Node, NodeId, NodeKind, Scene, Style};
pub use transform::{Transform, TransformOp};
pub use types::{FontSize, FontWeight, LabelOrigin, LineCap, Rgba};
