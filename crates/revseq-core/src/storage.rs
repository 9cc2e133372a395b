/// Gap-aware slot storage backing a `RevSeq`.
use crate::history::Slot;

/// The underlying ordered slots of a sequence.
///
/// Every method here is untracked. History bookkeeping happens one layer
/// up, in `RevSeq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Slot<T>>> for Storage<T> {
    fn from(slots: Vec<Slot<T>>) -> Self {
        Self { slots }
    }
}

impl<T> Storage<T> {
    /// Creates empty storage.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Returns the number of slots, gaps included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the slot at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Slot<T>> {
        self.slots.get(index)
    }

    /// Returns all slots in order.
    pub fn as_slice(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// Consumes the storage, returning its slots.
    pub fn into_vec(self) -> Vec<Slot<T>> {
        self.slots
    }

    /// Replaces up to `remove_count` slots at `index` with `items`.
    ///
    /// `index` clamps to the current length and `remove_count` clamps to the
    /// slots available after `index`. Returns the removed slots in order.
    pub fn splice<I>(&mut self, index: usize, remove_count: usize, items: I) -> Vec<Slot<T>>
    where
        I: IntoIterator<Item = Slot<T>>,
    {
        let start = index.min(self.slots.len());
        let end = start.saturating_add(remove_count).min(self.slots.len());
        self.slots.splice(start..end, items).collect()
    }

    /// Overwrites the slot at `index` in place, returning the old slot.
    ///
    /// Returns `None` and leaves storage untouched past the end.
    pub fn replace(&mut self, index: usize, slot: Slot<T>) -> Option<Slot<T>> {
        self.slots
            .get_mut(index)
            .map(|current| std::mem::replace(current, slot))
    }

    /// Truncates or pads with gaps to exactly `new_len` slots.
    pub fn resize(&mut self, new_len: usize) {
        self.slots.resize_with(new_len, || Slot::Empty);
    }
}
