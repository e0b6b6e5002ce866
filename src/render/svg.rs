//! SVG output surface.

use kurbo::PathEl;
use svg::Document;
use svg::node::element::{Path, Rectangle};

use crate::types::Rgba;

use super::surface::{Paint, Surface, SurfacePath};

/// Collects draw calls as SVG `<path>` elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Option<Rgba>,
    paths: Vec<Path>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        SvgSurface {
            width,
            height,
            background: None,
            paths: Vec::new(),
        }
    }

    /// Number of paths drawn since the last clear.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn document(&self) -> Document {
        let doc = Document::new()
            .set("width", num(self.width))
            .set("height", num(self.height))
            .set("viewBox", format!("0 0 {} {}", num(self.width), num(self.height)));
        let doc = match self.background {
            Some(bg) => doc.add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", bg.to_string()),
            ),
            None => doc,
        };
        self.paths.iter().cloned().fold(doc, Document::add)
    }

    /// The SVG document as a string.
    pub fn to_svg(&self) -> String {
        self.document().to_string()
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, background: Option<Rgba>) {
        self.background = background;
        self.paths.clear();
    }

    fn draw(&mut self, path: &SurfacePath, paint: &Paint) {
        let fill = paint.fill.map_or_else(|| "none".to_string(), |c| c.to_string());
        let mut el = Path::new().set("d", path_data(path)).set("fill", fill);
        if let Some(stroke) = &paint.stroke {
            el = el
                .set("stroke", stroke.color.to_string())
                .set("stroke-width", num(stroke.width))
                .set("stroke-linecap", stroke.cap.as_str())
                .set("stroke-linejoin", "round");
        }
        self.paths.push(el);
    }
}

/// Format a coordinate with at most two decimals.
fn num(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 { "0".to_string() } else { r.to_string() }
}

/// SVG path data for a pixel-space path.
pub fn path_data(path: &SurfacePath) -> String {
    let pt = |p: kurbo::Point| format!("{} {}", num(p.x), num(p.y));
    path.elements()
        .iter()
        .map(|el| match *el {
            PathEl::MoveTo(p) => format!("M{}", pt(p)),
            PathEl::LineTo(p) => format!("L{}", pt(p)),
            PathEl::QuadTo(c, p) => format!("Q{} {}", pt(c), pt(p)),
            PathEl::CurveTo(c1, c2, p) => format!("C{} {} {}", pt(c1), pt(c2), pt(p)),
            PathEl::ClosePath => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
