//! Sequence model combining slot storage and undo/redo history.
//!
//! A `RevSeq` ties together `Storage` and a `HistoryLog`. Every mutation is
//! normalized into `replace_range`, which records a `MutationRecord` and
//! truncates the redo log. The end/start shortcuts live in the `derived`
//! submodule, and index-style writes and reads are in the `host` submodule.

mod derived;
mod host;

use crate::history::{HistoryConfig, HistoryLog, MutationRecord, Slot};
use crate::storage::Storage;

/// An ordered sequence whose structural mutations can be undone and redone.
pub struct RevSeq<T> {
    /// Current contents.
    storage: Storage<T>,
    /// Undo/redo logs.
    history: HistoryLog<T>,
    /// Tracking options.
    config: HistoryConfig,
}

impl<T: std::fmt::Debug> std::fmt::Debug for RevSeq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevSeq")
            .field("slots", &self.storage.as_slice())
            .field("history", &self.history)
            .field("config", &self.config)
            .finish()
    }
}

impl<T> Default for RevSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for RevSeq<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> FromIterator<T> for RevSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_slots(iter.into_iter().map(Slot::Present).collect())
    }
}

impl<T> RevSeq<T> {
    /// Creates an empty sequence with empty history.
    pub fn new() -> Self {
        Self::from_slots(Vec::new())
    }

    /// Wraps existing slots, gaps included. History starts empty.
    pub fn from_slots(slots: Vec<Slot<T>>) -> Self {
        Self {
            storage: Storage::from(slots),
            history: HistoryLog::new(),
            config: HistoryConfig::default(),
        }
    }

    /// Replaces the tracking options.
    pub fn with_config(mut self, config: HistoryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Returns the undo/redo logs (read-only).
    pub fn history(&self) -> &HistoryLog<T> {
        &self.history
    }

    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Consumes the sequence, returning its slots and dropping the history.
    pub fn into_slots(self) -> Vec<Slot<T>> {
        self.storage.into_vec()
    }
}

impl<T: Clone> RevSeq<T> {
    /// Replaces `remove_count` items at `index` with `items`, recording the
    /// change.
    ///
    /// This is the one tracked mutation; every other write reduces to it.
    /// `remove_count` clamps to the items available after `index`. An
    /// `index` past the end first pads the sequence with gaps up to `index`.
    /// Any pending redo history is discarded.
    ///
    /// Returns the removed items in order, gaps included.
    pub fn replace_range<I>(&mut self, index: usize, remove_count: usize, items: I) -> Vec<Slot<T>>
    where
        I: IntoIterator,
        I::Item: Into<Slot<T>>,
    {
        let inserted = items.into_iter().map(Into::into).collect();
        self.record_splice(index, remove_count, inserted)
    }

    /// Alias for [`replace_range`](Self::replace_range).
    pub fn splice<I>(&mut self, index: usize, remove_count: usize, items: I) -> Vec<Slot<T>>
    where
        I: IntoIterator,
        I::Item: Into<Slot<T>>,
    {
        self.replace_range(index, remove_count, items)
    }

    /// Undoes the most recent mutation.
    ///
    /// Returns false (and changes nothing) if there's nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.undo() else {
            tracing::debug!("undo: history is empty");
            return false;
        };
        tracing::trace!(
            index = record.index,
            remove = record.inverse_remove_count(),
            restore = record.removed.len(),
            "undo"
        );
        // Untracked path; record_splice would clear the redo log.
        self.storage.splice(
            record.index,
            record.inverse_remove_count(),
            record.removed.iter().cloned(),
        );
        true
    }

    /// Re-applies the most recently undone mutation.
    ///
    /// Returns false (and changes nothing) if there's nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(record) = self.history.redo() else {
            tracing::debug!("redo: redo log is empty");
            return false;
        };
        tracing::trace!(
            index = record.index,
            remove = record.forward_remove_count(),
            insert = record.inserted.len(),
            "redo"
        );
        self.storage.splice(
            record.index,
            record.forward_remove_count(),
            record.inserted.iter().cloned(),
        );
        true
    }

    /// Applies and records a normalized splice.
    ///
    /// Writes past the end are rewritten to start at the current end with
    /// the padding gaps prepended, so the stored record always reverts to
    /// the exact prior length.
    fn record_splice(
        &mut self,
        index: usize,
        remove_count: usize,
        inserted: Vec<Slot<T>>,
    ) -> Vec<Slot<T>> {
        let len = self.storage.len();
        let (index, inserted) = if index > len {
            let mut padded = Slot::gaps(index - len);
            padded.extend(inserted);
            (len, padded)
        } else {
            (index, inserted)
        };

        let removed = self
            .storage
            .splice(index, remove_count, inserted.iter().cloned());

        tracing::trace!(
            index,
            removed = removed.len(),
            inserted = inserted.len(),
            "replace_range"
        );
        if self.config.trace_mutations {
            tracing::debug!(
                index,
                removed = removed.len(),
                inserted = inserted.len(),
                len = self.storage.len(),
                "recorded mutation"
            );
        }

        self.history
            .record(MutationRecord::new(index, removed.clone(), inserted));
        removed
    }
}
