/// Core type for a single reversible range replacement.
use crate::slot::Slot;

/// A single range replacement that can be undone/redone.
///
/// Reads as "at `index`, `removed` was replaced by `inserted`". Applying it
/// forward removes `removed.len()` slots at `index` and splices in
/// `inserted`; applying it in reverse removes `inserted.len()` slots at
/// `index` and splices `removed` back in.
///
/// Records are only created by the recorder and are never mutated afterwards.
/// `index` never exceeds the length of the sequence the record applies to:
/// writes past the end are stored at the old end with the padding gaps
/// folded into `inserted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord<T> {
    /// Slot index where the replacement starts.
    pub index: usize,
    /// Slots that were removed (empty for pure insertions).
    pub removed: Vec<Slot<T>>,
    /// Slots that were inserted (empty for pure removals).
    pub inserted: Vec<Slot<T>>,
}

impl<T> MutationRecord<T> {
    pub fn new(index: usize, removed: Vec<Slot<T>>, inserted: Vec<Slot<T>>) -> Self {
        Self {
            index,
            removed,
            inserted,
        }
    }

    /// Number of slots to remove when re-applying this record.
    pub fn forward_remove_count(&self) -> usize {
        self.removed.len()
    }

    /// Number of slots to remove when reverting this record.
    pub fn inverse_remove_count(&self) -> usize {
        self.inserted.len()
    }

    /// Change in sequence length caused by applying the record forward.
    pub fn len_delta(&self) -> isize {
        self.inserted.len() as isize - self.removed.len() as isize
    }
}
