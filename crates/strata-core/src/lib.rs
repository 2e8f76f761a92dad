//! Document model and editing session for the layer annotation editor.
//!
//! A document is a [`LayerSet`]: an ordered list of drawable [`Layer`]s over
//! a fixed-size canvas, serialized as JSON. An [`EditorSession`] owns one
//! live document together with its undo/redo history and is the only way
//! edits are committed.

pub mod color;
pub mod config;
pub mod document;
pub mod layer;
pub mod session;

pub use color::HexColor;
pub use config::EditorConfig;
pub use document::LayerSet;
pub use layer::{Layer, LayerKind, Point};
pub use session::EditorSession;
