/// Snapshot-based undo/redo history.
///
/// Provides a `HistoryManager` that keeps a capacity-bounded timeline of
/// full document snapshots and a cursor marking the current position.
/// History lives in memory only and is discarded with the editing session.
pub mod config;
pub mod manager;

pub use config::{HistoryConfig, DEFAULT_MAX_STEPS};
pub use manager::HistoryManager;
