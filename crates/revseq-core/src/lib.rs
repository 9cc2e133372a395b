//! Reversible ordered sequences.
//!
//! `RevSeq` wraps a list of values and records every structural mutation
//! (insert, remove, replace) as a single range-replace diff, so the list can
//! be rolled back and forward any number of steps.
pub mod history;
pub mod sequence;
pub mod storage;

pub use history::{HistoryConfig, MutationRecord, Slot};
pub use sequence::RevSeq;
