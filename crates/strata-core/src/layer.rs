/// Core types for annotation layers.
///
/// A layer is one drawable element on the canvas. The schema is a closed,
/// owned tree: cloning a layer is a full deep copy, and nothing in it can
/// reference another layer, so a document snapshot can never alias live
/// state.
use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// A point in canvas coordinates, used by line, arrow, polygon, and path
/// layers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The drawable shape of a layer.
///
/// Wire names match the original layer JSON (`"rectangle"`, `"text"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Rectangle,
    Circle,
    Ellipse,
    Line,
    Arrow,
    Polygon,
    Star,
    Path,
    Text,
    Highlight,
    Blur,
}

/// One annotation layer.
///
/// Geometry is a bounding box (`x`/`y`/`width`/`height`) for box-like kinds
/// and a `points` list for line-like kinds; text kinds additionally carry
/// `text`/`font_size`. Unused fields stay at their defaults and are skipped
/// in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Layer {
    /// Stable identifier, unique within a layer set.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation around the box center, in degrees.
    pub rotation: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    pub visible: bool,
    /// Locked layers are skipped by editing tools but still rendered.
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<HexColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<HexColor>,
    pub stroke_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: LayerKind::Rectangle,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            opacity: 1.0,
            visible: true,
            locked: false,
            stroke: Some(HexColor::rgb(255, 0, 0)),
            fill: None,
            stroke_width: 2.0,
            text: None,
            font_size: None,
            points: Vec::new(),
        }
    }
}

impl Layer {
    /// Creates a layer of the given kind with a generated id and default
    /// styling.
    pub fn new(kind: LayerKind) -> Self {
        Self {
            id: generate_layer_id(),
            kind,
            ..Self::default()
        }
    }

    /// Creates a box-shaped layer (rectangle, ellipse, highlight, blur...).
    pub fn boxed(kind: LayerKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Self::new(kind)
        }
    }

    /// Creates a text layer at the given position.
    pub fn text(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: Some(text.into()),
            font_size: Some(16.0),
            ..Self::new(LayerKind::Text)
        }
    }

    /// Creates a line-like layer (line, arrow, polygon, path) from points.
    pub fn from_points(kind: LayerKind, points: Vec<Point>) -> Self {
        Self {
            points,
            ..Self::new(kind)
        }
    }
}

/// Generates a fresh layer id.
pub fn generate_layer_id() -> String {
    format!("layer-{}", uuid::Uuid::new_v4())
}
