/// Undo/redo history for reversible sequences.
///
/// Provides the `MutationRecord` diff type, the gap-aware `Slot` element,
/// and a `HistoryLog` that shuttles records between an undo log and a redo
/// log. History lives in memory only and grows for the lifetime of the
/// sequence that owns it.
pub mod config;
pub mod manager;
pub mod operation;
pub mod slot;

pub use config::HistoryConfig;
pub use manager::HistoryLog;
pub use operation::MutationRecord;
pub use slot::Slot;
