//! End/start shortcuts expressed purely through `replace_range`.

use super::RevSeq;
use crate::history::Slot;

impl<T: Clone> RevSeq<T> {
    /// Appends items to the end. Returns the new length.
    pub fn push<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Slot<T>>,
    {
        self.replace_range(self.len(), 0, items);
        self.len()
    }

    /// Inserts items at the start, keeping their order. Returns the new length.
    pub fn unshift<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Slot<T>>,
    {
        self.replace_range(0, 0, items);
        self.len()
    }

    /// Removes the last slot.
    ///
    /// Returns `None` without recording anything when the sequence is empty.
    pub fn pop(&mut self) -> Option<Slot<T>> {
        let last = self.len().checked_sub(1)?;
        self.record_splice(last, 1, Vec::new()).into_iter().next()
    }

    /// Removes the first slot.
    ///
    /// Returns `None` without recording anything when the sequence is empty.
    pub fn shift(&mut self) -> Option<Slot<T>> {
        if self.is_empty() {
            return None;
        }
        self.record_splice(0, 1, Vec::new()).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_new_length() {
        let mut s: RevSeq<&str> = RevSeq::new();
        assert_eq!(s.push(["one"]), 1);
        assert_eq!(s.push(["two"]), 2);
        assert_eq!(s.get(0), Some(&"one"));
        assert_eq!(s.get(1), Some(&"two"));
    }

    #[test]
    fn test_push_many_is_one_step() {
        let mut s = RevSeq::from(vec!["a"]);
        assert_eq!(s.push(["b", "c", "d"]), 4);
        assert_eq!(s.history().undo_len(), 1);
        s.undo();
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_unshift_adds_to_start() {
        let mut s: RevSeq<&str> = RevSeq::new();
        assert_eq!(s.unshift(["two"]), 1);
        assert_eq!(s.unshift(["one"]), 2);
        assert_eq!(s.get(0), Some(&"one"));
        assert_eq!(s.get(1), Some(&"two"));
    }

    #[test]
    fn test_unshift_keeps_argument_order() {
        let mut s = RevSeq::from(vec!["c"]);
        s.unshift(["a", "b"]);
        assert_eq!(
            s.slots(),
            &[Slot::Present("a"), Slot::Present("b"), Slot::Present("c")]
        );
    }

    #[test]
    fn test_pop_on_empty_records_nothing() {
        let mut s: RevSeq<&str> = RevSeq::new();
        assert_eq!(s.pop(), None);
        assert_eq!(s.len(), 0);
        assert!(!s.can_undo());
    }

    #[test]
    fn test_pop_returns_last_item() {
        let mut s = RevSeq::from(vec!["one", "two"]);
        assert_eq!(s.pop(), Some(Slot::Present("two")));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_pop_returns_gap() {
        let mut s = RevSeq::from_slots(vec![Slot::Present("a"), Slot::Empty]);
        assert_eq!(s.pop(), Some(Slot::Empty));
        s.undo();
        assert_eq!(s.slots(), &[Slot::Present("a"), Slot::Empty]);
    }

    #[test]
    fn test_shift_on_empty_records_nothing() {
        let mut s: RevSeq<&str> = RevSeq::new();
        assert_eq!(s.shift(), None);
        assert!(!s.can_undo());
    }

    #[test]
    fn test_shift_returns_first_item() {
        let mut s = RevSeq::from(vec!["one", "two"]);
        assert_eq!(s.shift(), Some(Slot::Present("one")));
        assert_eq!(s.get(0), Some(&"two"));
        s.undo();
        assert_eq!(s.get(0), Some(&"one"));
    }

    #[test]
    fn test_derived_ops_truncate_redo() {
        let mut s = RevSeq::from(vec!["initial"]);
        s.pop();
        s.undo();
        assert!(s.can_redo());
        s.unshift(["new"]);
        assert!(!s.can_redo());
        s.redo();
        assert_eq!(s.get(0), Some(&"new"));
        assert_eq!(s.get(1), Some(&"initial"));
    }
}
