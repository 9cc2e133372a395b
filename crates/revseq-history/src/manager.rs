/// Two-log undo/redo state machine.
///
/// Applied records live on the undo log, reverted records on the redo log.
/// The log only moves records between the two stacks; applying their effect
/// to the sequence is the caller's job, and that application must not go
/// back through [`HistoryLog::record`] or the redo log would be wiped.
use crate::operation::MutationRecord;

/// Undo/redo history for a single sequence.
///
/// Both logs are unbounded. A record leaves the history only when a fresh
/// mutation truncates the redo log.
pub struct HistoryLog<T> {
    /// Applied records, most recent last.
    undo_stack: Vec<MutationRecord<T>>,
    /// Reverted records, next to re-apply last.
    redo_stack: Vec<MutationRecord<T>>,
}

impl<T> std::fmt::Debug for HistoryLog<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryLog")
            .field("undo_len", &self.undo_stack.len())
            .field("redo_len", &self.redo_stack.len())
            .finish()
    }
}

impl<T> Default for HistoryLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HistoryLog<T> {
    /// Creates a history with both logs empty.
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Records a freshly applied mutation.
    ///
    /// Clears the redo log before pushing onto the undo log.
    pub fn record(&mut self, record: MutationRecord<T>) {
        if !self.redo_stack.is_empty() {
            tracing::trace!(
                discarded = self.redo_stack.len(),
                "fresh mutation discards redo log"
            );
            self.redo_stack.clear();
        }
        self.undo_stack.push(record);
    }

    /// Moves the most recent record to the redo log.
    ///
    /// Returns the record so the caller can revert it. Returns `None` if
    /// there's nothing to undo.
    pub fn undo(&mut self) -> Option<&MutationRecord<T>> {
        let record = self.undo_stack.pop()?;
        self.redo_stack.push(record);
        self.redo_stack.last()
    }

    /// Moves the most recently undone record back to the undo log.
    ///
    /// Returns the record so the caller can re-apply it. Returns `None` if
    /// there's nothing to redo.
    pub fn redo(&mut self) -> Option<&MutationRecord<T>> {
        let record = self.redo_stack.pop()?;
        self.undo_stack.push(record);
        self.undo_stack.last()
    }

    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Applied records, oldest first.
    pub fn undo_records(&self) -> &[MutationRecord<T>] {
        &self.undo_stack
    }

    /// Reverted records, the next one to redo last.
    pub fn redo_records(&self) -> &[MutationRecord<T>] {
        &self.redo_stack
    }
}
