//! The layer-set document: canvas size plus an ordered list of layers.
//!
//! A `LayerSet` is the unit the editor snapshots for undo/redo and the unit
//! stored as JSON. Index 0 is the bottom-most layer in z-order.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::layer::Layer;

/// Valid opacity range; hand-edited files sometimes use percentages by
/// mistake.
const OPACITY_RANGE: (f64, f64) = (0.0, 1.0);

/// Bounds applied to text sizes during sanitization.
const FONT_SIZE_RANGE: (f64, f64) = (4.0, 200.0);

/// A complete layer document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerSet {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Layers in z-order, bottom first.
    pub layers: Vec<Layer>,
}

impl Default for LayerSet {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            layers: Vec::new(),
        }
    }
}

impl LayerSet {
    /// Creates an empty document with the given canvas size.
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            layers: Vec::new(),
        }
    }

    /// Finds a layer by id.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Finds a layer by id for mutation.
    pub fn layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    /// Index of a layer in z-order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    /// Removes a layer by id, returning it if present.
    pub fn remove_layer(&mut self, id: &str) -> Option<Layer> {
        let at = self.position_of(id)?;
        Some(self.layers.remove(at))
    }

    /// Moves a layer to a new z-order position (clamped to the layer count).
    ///
    /// Returns false if no layer has that id.
    pub fn move_layer(&mut self, id: &str, to: usize) -> bool {
        let Some(from) = self.position_of(id) else {
            return false;
        };
        let layer = self.layers.remove(from);
        let to = to.min(self.layers.len());
        self.layers.insert(to, layer);
        true
    }

    /// Serializes the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize layer set")
    }

    /// Parses a document from JSON and sanitizes it.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut doc: Self =
            serde_json::from_str(json).context("Failed to parse layer set JSON")?;
        doc.sanitize();
        Ok(doc)
    }

    /// Loads a document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layer set: {}", path.display()))?;
        Self::from_json(&contents)
    }

    /// Saves the document as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write layer set: {}", path.display()))
    }

    /// Clamps out-of-range values and drops layers with unusable geometry.
    ///
    /// Hand-edited or older files can carry opacities above 1, negative
    /// stroke widths, or NaN coordinates; everything recoverable is clamped
    /// and anything non-finite is removed with a warning.
    pub fn sanitize(&mut self) {
        let before = self.layers.len();
        self.layers.retain(|l| {
            let finite = [l.x, l.y, l.width, l.height, l.rotation]
                .iter()
                .all(|v| v.is_finite())
                && l.points.iter().all(|p| p.x.is_finite() && p.y.is_finite());
            if !finite {
                tracing::warn!("dropping layer {} with non-finite geometry", l.id);
            }
            finite
        });
        if self.layers.len() != before {
            tracing::warn!(
                "sanitize removed {} of {} layers",
                before - self.layers.len(),
                before
            );
        }

        for layer in &mut self.layers {
            layer.opacity = layer.opacity.clamp(OPACITY_RANGE.0, OPACITY_RANGE.1);
            layer.stroke_width = layer.stroke_width.max(0.0);
            if let Some(size) = layer.font_size.as_mut() {
                *size = size.clamp(FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1);
            }
        }
    }
}
