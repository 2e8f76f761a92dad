/// Editor configuration: load, save, and sanitize.
use std::path::Path;

use serde::{Deserialize, Serialize};
use strata_mod_history::HistoryConfig;

use crate::color::HexColor;

/// Editor-wide defaults, persisted as JSON by the host integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Undo/redo capacity for new editing sessions.
    pub history: HistoryConfig,
    /// Canvas size for new documents.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Default stroke color for new layers.
    pub default_stroke: HexColor,
    /// Default fill color for new shape layers. `None` = unfilled.
    pub default_fill: Option<HexColor>,
    pub default_stroke_width: f64,
    pub default_font_size: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            canvas_width: 800,
            canvas_height: 600,
            default_stroke: HexColor::rgb(255, 0, 0),
            default_fill: None,
            default_stroke_width: 2.0,
            default_font_size: 16.0,
        }
    }
}

impl EditorConfig {
    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<EditorConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Return defaults on error (don't overwrite broken file)
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Clamps out-of-range values to something the editor can work with.
    ///
    /// A zero history capacity is coerced to 1 here because the config came
    /// from a file; `HistoryManager::new` still rejects a zero passed
    /// programmatically.
    pub fn sanitize(&mut self) {
        self.history.max_steps = self.history.max_steps.max(1);
        self.canvas_width = self.canvas_width.clamp(16, 8192);
        self.canvas_height = self.canvas_height.clamp(16, 8192);
        self.default_stroke_width = self.default_stroke_width.clamp(0.0, 100.0);
        self.default_font_size = self.default_font_size.clamp(4.0, 200.0);
    }
}
