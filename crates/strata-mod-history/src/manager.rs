/// Core undo/redo manager over full-document snapshots.
///
/// Every committed edit records a complete copy of the document. Undo and
/// redo step a cursor back and forth along that timeline and hand back an
/// independent copy of the snapshot at the new position, which the caller
/// applies onto the live document.
use anyhow::{bail, Result};

use crate::config::HistoryConfig;

/// Bounded snapshot timeline for a single editing session.
///
/// `S` is the snapshot type. Its `Clone` impl must be a full deep copy:
/// an owned tree with no shared mutable state, such as a plain
/// `#[derive(Clone)]` data model. Types holding `Rc`/`Arc` cells would
/// alias stored snapshots with live state and must not be used here.
///
/// Each editing session gets its own `HistoryManager`; access is not
/// synchronized internally, so a multi-threaded host must confine the
/// manager to the session that owns it.
pub struct HistoryManager<S> {
    /// Recorded snapshots, oldest first. Never longer than `max_steps`.
    timeline: Vec<S>,
    /// Index of the current snapshot; `None` while nothing is recorded.
    cursor: Option<usize>,
    /// Capacity bound on the timeline.
    max_steps: usize,
}

impl<S> std::fmt::Debug for HistoryManager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryManager")
            .field("timeline_len", &self.timeline.len())
            .field("cursor", &self.cursor)
            .field("max_steps", &self.max_steps)
            .finish()
    }
}

impl<S> Default for HistoryManager<S> {
    fn default() -> Self {
        Self {
            timeline: Vec::new(),
            cursor: None,
            max_steps: crate::config::DEFAULT_MAX_STEPS,
        }
    }
}

impl<S: Clone> HistoryManager<S> {
    /// Creates an empty manager with the configured timeline capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if `config.max_steps` is zero. A caller that wants
    /// the default capacity should use `HistoryManager::default()` instead
    /// of passing a made-up value.
    pub fn new(config: HistoryConfig) -> Result<Self> {
        if config.max_steps == 0 {
            bail!("history capacity must be at least 1 snapshot");
        }
        Ok(Self {
            timeline: Vec::new(),
            cursor: None,
            max_steps: config.max_steps,
        })
    }

    /// Records a snapshot of the document after a committed edit.
    ///
    /// Snapshots past the cursor are discarded first: a new edit forecloses
    /// the redo branch. A copy of `state` is then appended. When the
    /// timeline is over capacity the oldest snapshot is evicted instead of
    /// advancing the cursor; the eviction shifts every index down by one,
    /// which exactly cancels the advance, so the cursor still lands on the
    /// new entry. Never fails.
    pub fn record(&mut self, state: &S) {
        match self.cursor {
            Some(at) => self.timeline.truncate(at + 1),
            None => self.timeline.clear(),
        }
        self.timeline.push(state.clone());

        if self.timeline.len() > self.max_steps {
            self.timeline.remove(0);
        } else {
            self.cursor = Some(self.cursor.map_or(0, |at| at + 1));
        }
        tracing::trace!(
            "recorded snapshot, timeline {}/{}",
            self.timeline.len(),
            self.max_steps
        );
    }

    /// Steps back to the previous snapshot.
    ///
    /// Returns an independent copy of the snapshot at the new position, or
    /// `None` when there is nothing earlier to return to. `None` is the
    /// normal "nothing to do" signal, not an error; the cursor is left
    /// unchanged in that case. Mutating the returned value never affects
    /// the stored timeline.
    pub fn undo(&mut self) -> Option<S> {
        let at = self.cursor?;
        if at == 0 {
            return None;
        }
        self.cursor = Some(at - 1);
        Some(self.timeline[at - 1].clone())
    }

    /// Steps forward to the next snapshot.
    ///
    /// Returns an independent copy, or `None` when the cursor is already at
    /// the newest snapshot. Same no-op semantics as [`undo`](Self::undo).
    pub fn redo(&mut self) -> Option<S> {
        let at = self.cursor?;
        if at + 1 >= self.timeline.len() {
            return None;
        }
        self.cursor = Some(at + 1);
        Some(self.timeline[at + 1].clone())
    }

    /// Whether there is an earlier snapshot to step back to.
    ///
    /// False with zero or one recorded snapshots: a lone snapshot is the
    /// current state, not an undo target.
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(at) if at > 0)
    }

    /// Whether there is an undone snapshot to step forward to.
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(at) if at + 1 < self.timeline.len())
    }

    /// Borrows the snapshot at the cursor, if any.
    pub fn current(&self) -> Option<&S> {
        self.cursor.map(|at| &self.timeline[at])
    }

    /// Number of snapshots on the timeline.
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// Whether nothing has been recorded (or the manager was cleared).
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Configured timeline capacity.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Empties the timeline and resets the cursor.
    ///
    /// The manager stays usable afterwards; capacity is unchanged.
    pub fn clear(&mut self) {
        self.timeline.clear();
        self.cursor = None;
        tracing::trace!("cleared history timeline");
    }
}
