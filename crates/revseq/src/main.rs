mod script;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use revseq_core::history::resolve_config_path;
use revseq_core::{HistoryConfig, RevSeq};

/// Run an edit script against a reversible sequence.
#[derive(Parser, Debug)]
#[command(name = "revseq", version, about)]
struct Cli {
    /// Script file to run. Reads stdin when omitted.
    script: Option<PathBuf>,

    /// Config file (JSON). Defaults to `REVSEQ_CONFIG` or the platform config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial item; repeat for more. `_` is a gap.
    #[arg(long = "initial")]
    initial: Vec<String>,
}

fn load_config(explicit: Option<&PathBuf>) -> Result<HistoryConfig> {
    match explicit {
        Some(path) => HistoryConfig::load(path),
        None => Ok(HistoryConfig::load_or_default(&resolve_config_path())),
    }
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read script from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = load_config(cli.config.as_ref())?;
    tracing::debug!(?config, "loaded config");

    let text = read_script(cli.script.as_ref())?;
    let commands = script::parse_script(&text).context("Failed to parse script")?;

    let initial = cli.initial.iter().map(|item| script::parse_item(item)).collect();
    let mut seq = RevSeq::from_slots(initial).with_config(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    script::run(&mut seq, &commands, &mut out)?;

    tracing::debug!(
        len = seq.len(),
        undo = seq.history().undo_len(),
        redo = seq.history().redo_len(),
        "script finished"
    );
    Ok(())
}
