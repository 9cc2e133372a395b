/// Gap-aware element storage.
use std::fmt;

/// One entry of a sequence: either a value or a gap.
///
/// A gap occupies an index and counts toward the length, but holds no value.
/// It is distinct from a present value that happens to be "empty" for `T`
/// (an empty string, `None`, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot<T> {
    /// An index inside the sequence that was never assigned.
    #[default]
    Empty,
    /// An assigned value.
    Present(T),
}

impl<T> Slot<T> {
    /// Builds `count` consecutive gaps.
    pub fn gaps(count: usize) -> Vec<Slot<T>> {
        std::iter::repeat_with(|| Slot::Empty).take(count).collect()
    }

    /// Returns true if this slot is a gap.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Returns true if this slot holds a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    /// Borrows the value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Empty => None,
            Slot::Present(value) => Some(value),
        }
    }

    /// Consumes the slot, returning the value if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Slot::Empty => None,
            Slot::Present(value) => Some(value),
        }
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Slot::Present(value)
    }
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Slot::Present(v),
            None => Slot::Empty,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Empty => f.write_str("<empty>"),
            Slot::Present(value) => value.fmt(f),
        }
    }
}
