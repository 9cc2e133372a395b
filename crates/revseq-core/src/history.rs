// Re-exports from revseq-history.
// The core crate applies records to storage; the history crate only keeps them.
pub use revseq_history::config::{resolve_config_path, CONFIG_ENV_VAR};
pub use revseq_history::{HistoryConfig, HistoryLog, MutationRecord, Slot};
