/// Configuration for sequence history tracking.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "REVSEQ_CONFIG";

/// Configuration for the history system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Route index deletion and length resets through the recorder.
    ///
    /// When false, those writes hit storage directly and leave no record,
    /// so a later undo does not see them.
    pub track_bulk_writes: bool,
    /// Emit a debug event for every recorded mutation.
    pub trace_mutations: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            track_bulk_writes: true,
            trace_mutations: false,
        }
    }
}

impl HistoryConfig {
    /// Config that reproduces the legacy untracked bulk writes.
    pub fn legacy() -> Self {
        Self {
            track_bulk_writes: false,
            ..Self::default()
        }
    }

    /// Loads config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Loads config from `path`, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e:#}");
                Self::default()
            }
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}

/// Resolves the config file path.
///
/// Resolution order:
/// 1. `REVSEQ_CONFIG` environment variable
/// 2. `revseq/config.json` under the platform config directory
/// 3. `revseq.json` in the working directory
pub fn resolve_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .map(|dir| dir.join("revseq").join("config.json"))
        .unwrap_or_else(|| PathBuf::from("revseq.json"))
}
