//! Error types with rich diagnostics using miette
//!
//! Path syntax errors carry source spans for readable error messages; the
//! other errors describe a rejected value and leave the previous state in
//! place.

use std::fmt;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::log::warn;
use crate::types::NumericError;

/// Log a rejected setter value and pass the result on unchanged.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn rejected<T, E: fmt::Display>(what: &str, result: Result<T, E>) -> Result<T, E> {
    if let Err(e) = &result {
        warn!(what, error = %e, "value rejected");
    }
    result
}

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (for example "<svg path>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Path Errors
// ============================================================================

/// Errors raised while reading path data strings
#[derive(Error, Diagnostic, Debug)]
pub enum PathError {
    #[error("invalid path data: {message}")]
    #[diagnostic(
        code(painter3d::path::syntax),
        help("path data is a sequence of command letters followed by numbers")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid number: {text}")]
    #[diagnostic(code(painter3d::path::invalid_number))]
    InvalidNumber {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a finite number")]
        span: SourceSpan,
    },
}

// ============================================================================
// Style Errors
// ============================================================================

/// A style value was rejected; the previous value is kept
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("unrecognized color: {value}")]
    #[diagnostic(code(painter3d::style::color))]
    Color { value: String },

    #[error("unknown line cap: {value}")]
    #[diagnostic(
        code(painter3d::style::line_cap),
        help("expected one of butt, round, square")
    )]
    LineCap { value: String },

    #[error("font size {value} is outside 6..=60")]
    #[diagnostic(code(painter3d::style::font_size))]
    FontSize { value: f64 },

    #[error("font weight {value} is outside 100..=900")]
    #[diagnostic(code(painter3d::style::font_weight))]
    FontWeight { value: f64 },

    #[error("label origin {value} is outside 1..=9")]
    #[diagnostic(code(painter3d::style::label_origin))]
    LabelOrigin { value: i64 },

    #[error("invalid {what}: {source}")]
    #[diagnostic(code(painter3d::style::numeric))]
    Numeric {
        what: &'static str,
        source: NumericError,
    },

    #[error("node is not a leaf")]
    #[diagnostic(code(painter3d::style::not_a_leaf))]
    NotALeaf,
}

// ============================================================================
// Scene Errors
// ============================================================================

/// Errors from restructuring the scene graph
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("node is not a group")]
    #[diagnostic(code(painter3d::scene::not_a_group))]
    NotAGroup,

    #[error("adding the node would make it its own ancestor")]
    #[diagnostic(
        code(painter3d::scene::cycle),
        help("a group cannot be added to itself or to one of its descendants")
    )]
    Cycle,
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors from renderer setup and configuration
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("raster surface is missing or has no area ({width} x {height})")]
    #[diagnostic(
        code(painter3d::render::missing_surface),
        help("the surface must report a finite, positive width and height")
    )]
    MissingSurface { width: f64, height: f64 },

    #[error("field of view {degrees} is outside 20..=60 degrees")]
    #[diagnostic(code(painter3d::render::invalid_fov))]
    InvalidFov { degrees: f64 },

    #[error("invalid light source")]
    #[diagnostic(code(painter3d::render::invalid_light))]
    InvalidLight,
}

// ============================================================================
// Interchange Errors
// ============================================================================

/// Errors decoding a scene record
#[derive(Error, Diagnostic, Debug)]
pub enum InterchangeError {
    #[error("malformed scene JSON")]
    #[diagnostic(code(painter3d::interchange::json))]
    Json(#[from] serde_json::Error),

    #[error("unexpected document type: {found}")]
    #[diagnostic(
        code(painter3d::interchange::document_type),
        help("scene documents start with \"type\": \"Component\"")
    )]
    DocumentType { found: String },

    #[error("{kind} record has no path data")]
    #[diagnostic(code(painter3d::interchange::missing_path))]
    MissingPathData { kind: &'static str },

    #[error("bad {field} value: {value}")]
    #[diagnostic(code(painter3d::interchange::bad_value))]
    BadValue { field: &'static str, value: String },
}
