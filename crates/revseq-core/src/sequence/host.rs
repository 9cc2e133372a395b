//! Index-style access: the surface callers use as if `RevSeq` were a plain
//! list.
//!
//! Reads go straight to storage. Index assignment always goes through the
//! recorder. Index deletion and length resets go through the recorder only
//! when `HistoryConfig::track_bulk_writes` is set; otherwise they edit
//! storage directly and leave the history unaware of them.

use std::fmt;
use std::ops::Index;

use super::RevSeq;
use crate::history::Slot;

impl<T> RevSeq<T> {
    /// Returns the number of slots, gaps included.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the sequence has no slots.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the value at `index`, or `None` for a gap or past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index).and_then(Slot::value)
    }

    /// Returns the slot at `index`, or `None` past the end.
    pub fn slot(&self, index: usize) -> Option<&Slot<T>> {
        self.storage.get(index)
    }

    /// Returns all slots in order.
    pub fn slots(&self) -> &[Slot<T>] {
        self.storage.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot<T>> {
        self.storage.as_slice().iter()
    }
}

impl<T: Clone> RevSeq<T> {
    /// Assigns `value` at `index`.
    ///
    /// Inside the sequence this replaces one slot. Past the end, the gap
    /// between the current length and `index` is padded first, so the
    /// length becomes `index + 1`. Either way it is one undoable step.
    ///
    /// Returns the slot that was overwritten, or `None` past the end.
    pub fn set(&mut self, index: usize, value: T) -> Option<Slot<T>> {
        if index < self.len() {
            self.record_splice(index, 1, vec![Slot::Present(value)])
                .into_iter()
                .next()
        } else {
            self.record_splice(index, 0, vec![Slot::Present(value)]);
            None
        }
    }

    /// Turns the slot at `index` into a gap without shifting anything.
    ///
    /// Returns the removed value. Gaps and indices past the end are left
    /// alone and return `None`.
    pub fn delete(&mut self, index: usize) -> Option<T> {
        if !self.slot(index).is_some_and(Slot::is_present) {
            return None;
        }
        let removed = if self.config.track_bulk_writes {
            self.record_splice(index, 1, vec![Slot::Empty])
                .into_iter()
                .next()
        } else {
            tracing::debug!(index, "untracked delete");
            self.storage.replace(index, Slot::Empty)
        };
        removed.and_then(Slot::into_option)
    }

    /// Truncates the sequence or pads it with gaps to `new_len` slots.
    ///
    /// Returns the slots cut off by a truncation.
    pub fn set_len(&mut self, new_len: usize) -> Vec<Slot<T>> {
        let len = self.len();
        if new_len == len {
            return Vec::new();
        }
        if !self.config.track_bulk_writes {
            tracing::debug!(from = len, to = new_len, "untracked length reset");
            let cut = if new_len < len {
                self.storage.splice(new_len, len - new_len, Vec::new())
            } else {
                Vec::new()
            };
            self.storage.resize(new_len);
            return cut;
        }
        if new_len < len {
            self.record_splice(new_len, len - new_len, Vec::new())
        } else {
            self.record_splice(len, 0, Slot::gaps(new_len - len))
        }
    }
}

impl<T> Index<usize> for RevSeq<T> {
    type Output = Slot<T>;

    /// # Panics
    ///
    /// Panics if `index` is past the end, like slice indexing.
    fn index(&self, index: usize) -> &Self::Output {
        &self.storage.as_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a RevSeq<T> {
    type Item = &'a Slot<T>;
    type IntoIter = std::slice::Iter<'a, Slot<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for RevSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{slot}")?;
        }
        f.write_str("]")
    }
}
