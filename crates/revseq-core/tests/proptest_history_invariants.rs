//! Property-based invariant tests for RevSeq history.
//!
//! 1. Undoing every mutation restores the starting slots, gaps included
//! 2. Undo followed by redo restores the pre-undo slots
//! 3. Redo past the end of the redo log changes nothing
//! 4. Any fresh mutation after an undo leaves nothing to redo
//! 5. push/unshift report the post-call length

use proptest::prelude::*;
use revseq_core::{RevSeq, Slot};

// ── Strategies ──────────────────────────────────────────────────────────

/// Mutations a host surface can issue.
#[derive(Debug, Clone)]
enum Op {
    Replace(usize, usize, Vec<Option<u8>>),
    Push(Vec<u8>),
    Unshift(Vec<u8>),
    Pop,
    Shift,
    Set(usize, u8),
    Delete(usize),
    SetLen(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (
            0usize..12,
            0usize..6,
            prop::collection::vec(any::<Option<u8>>(), 0..4)
        )
            .prop_map(|(i, n, items)| Op::Replace(i, n, items)),
        prop::collection::vec(any::<u8>(), 0..4).prop_map(Op::Push),
        prop::collection::vec(any::<u8>(), 0..4).prop_map(Op::Unshift),
        Just(Op::Pop),
        Just(Op::Shift),
        (0usize..12, any::<u8>()).prop_map(|(i, v)| Op::Set(i, v)),
        (0usize..12).prop_map(Op::Delete),
        (0usize..12).prop_map(Op::SetLen),
    ]
}

fn initial_strategy() -> impl Strategy<Value = Vec<Option<u8>>> {
    prop::collection::vec(any::<Option<u8>>(), 0..8)
}

fn build(initial: &[Option<u8>]) -> RevSeq<u8> {
    RevSeq::from_slots(initial.iter().copied().map(Slot::<u8>::from).collect())
}

/// Applies one mutation, returning how many records it added.
fn apply(seq: &mut RevSeq<u8>, op: &Op) -> usize {
    let before = seq.history().undo_len();
    match op {
        Op::Replace(i, n, items) => {
            seq.replace_range(*i, *n, items.iter().copied().map(Slot::<u8>::from));
        }
        Op::Push(items) => {
            seq.push(items.iter().copied());
        }
        Op::Unshift(items) => {
            seq.unshift(items.iter().copied());
        }
        Op::Pop => {
            seq.pop();
        }
        Op::Shift => {
            seq.shift();
        }
        Op::Set(i, v) => {
            seq.set(*i, *v);
        }
        Op::Delete(i) => {
            seq.delete(*i);
        }
        Op::SetLen(n) => {
            seq.set_len(*n);
        }
    }
    seq.history().undo_len() - before
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Full undo restores the start
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn undo_all_restores_initial_slots(
        initial in initial_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut seq = build(&initial);
        let start = seq.slots().to_vec();

        let recorded: usize = ops.iter().map(|op| apply(&mut seq, op)).sum();
        for _ in 0..recorded {
            prop_assert!(seq.undo());
        }

        prop_assert_eq!(seq.slots(), start.as_slice());
        prop_assert!(!seq.can_undo());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2-3. Undo/redo symmetry and redo exhaustion
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn undo_then_redo_is_identity(
        initial in initial_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..40),
        undo_count in 0usize..40,
    ) {
        let mut seq = build(&initial);
        for op in &ops {
            apply(&mut seq, op);
        }
        for _ in 0..undo_count {
            seq.undo();
        }

        let settled = seq.slots().to_vec();
        if seq.undo() {
            prop_assert!(seq.redo());
        }
        prop_assert_eq!(seq.slots(), settled.as_slice());

        while seq.redo() {}
        let tip = seq.slots().to_vec();
        prop_assert!(!seq.redo());
        prop_assert!(!seq.redo());
        prop_assert_eq!(seq.slots(), tip.as_slice());
    }

    #[test]
    fn redo_replays_exact_states(
        initial in initial_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..30),
    ) {
        let mut seq = build(&initial);
        let mut states = vec![seq.slots().to_vec()];
        for op in &ops {
            if apply(&mut seq, op) > 0 {
                states.push(seq.slots().to_vec());
            }
        }

        while seq.undo() {}
        prop_assert_eq!(seq.slots(), states[0].as_slice());
        for state in &states[1..] {
            prop_assert!(seq.redo());
            prop_assert_eq!(seq.slots(), state.as_slice());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Fresh mutations truncate the redo log
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fresh_mutation_clears_redo(
        initial in initial_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..20),
        fresh in op_strategy(),
    ) {
        let mut seq = build(&initial);
        for op in &ops {
            apply(&mut seq, op);
        }
        seq.undo();

        if apply(&mut seq, &fresh) > 0 {
            let after = seq.slots().to_vec();
            prop_assert!(!seq.can_redo());
            prop_assert!(!seq.redo());
            prop_assert_eq!(seq.slots(), after.as_slice());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Length bookkeeping
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn push_and_unshift_report_new_length(
        initial in initial_strategy(),
        items in prop::collection::vec(any::<u8>(), 0..6),
    ) {
        let mut seq = build(&initial);
        let pushed = seq.push(items.iter().copied());
        prop_assert_eq!(pushed, seq.len());
        prop_assert_eq!(pushed, initial.len() + items.len());

        let unshifted = seq.unshift(items.iter().copied());
        prop_assert_eq!(unshifted, seq.len());
    }
}
