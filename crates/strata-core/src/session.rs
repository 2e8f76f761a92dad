//! Editing session: the live document plus its undo/redo history.
//!
//! One `EditorSession` exists per open document and is the only owner of
//! its `HistoryManager`. Collaborators that need undo/redo go through the
//! session rather than a shared global manager, so history cannot outlive
//! or leak across documents.

use anyhow::Result;
use strata_mod_history::{HistoryConfig, HistoryManager};

use crate::document::LayerSet;
use crate::layer::Layer;

/// A single editing session over a layer document.
///
/// Every committed mutation snapshots the full document, so `undo`/`redo`
/// restore complete states rather than replaying individual operations.
/// The baseline state is recorded at construction; the first committed edit
/// therefore becomes undoable back to it.
pub struct EditorSession {
    doc: LayerSet,
    history: HistoryManager<LayerSet>,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("layers", &self.doc.layers.len())
            .field("history", &self.history)
            .finish()
    }
}

impl EditorSession {
    /// Starts a session over `doc` with the given history capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` carries a zero capacity.
    pub fn new(doc: LayerSet, config: HistoryConfig) -> Result<Self> {
        let mut history = HistoryManager::new(config)?;
        history.record(&doc);
        Ok(Self { doc, history })
    }

    /// The live document.
    pub fn document(&self) -> &LayerSet {
        &self.doc
    }

    /// Adds a layer on top of the z-order and commits.
    pub fn add_layer(&mut self, layer: Layer) {
        tracing::debug!("add layer {} ({:?})", layer.id, layer.kind);
        self.doc.layers.push(layer);
        self.commit();
    }

    /// Removes a layer and commits. Returns false if the id is unknown,
    /// in which case nothing is recorded.
    pub fn remove_layer(&mut self, id: &str) -> bool {
        if self.doc.remove_layer(id).is_none() {
            return false;
        }
        tracing::debug!("remove layer {id}");
        self.commit();
        true
    }

    /// Applies `edit` to a layer and commits. Returns false if the id is
    /// unknown, in which case nothing is recorded.
    pub fn update_layer(&mut self, id: &str, edit: impl FnOnce(&mut Layer)) -> bool {
        let Some(layer) = self.doc.layer_mut(id) else {
            return false;
        };
        edit(layer);
        tracing::debug!("update layer {id}");
        self.commit();
        true
    }

    /// Moves a layer in z-order and commits. Returns false if the id is
    /// unknown.
    pub fn move_layer(&mut self, id: &str, to: usize) -> bool {
        if !self.doc.move_layer(id, to) {
            return false;
        }
        tracing::debug!("move layer {id} to z-index {to}");
        self.commit();
        true
    }

    /// Steps the document back one committed edit.
    ///
    /// Returns false when there is nothing to undo; the document is
    /// untouched in that case.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.doc = snapshot;
                true
            }
            None => false,
        }
    }

    /// Steps the document forward one undone edit.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.doc = snapshot;
                true
            }
            None => false,
        }
    }

    /// Whether undo would change the document. Drives UI affordances.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would change the document.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replaces the document, discarding all history and re-baselining.
    ///
    /// Used when the underlying layer set is reloaded from storage.
    pub fn reload(&mut self, doc: LayerSet) {
        tracing::debug!("reload document, clearing history");
        self.history.clear();
        self.history.record(&doc);
        self.doc = doc;
    }

    fn commit(&mut self) {
        self.history.record(&self.doc);
    }
}
