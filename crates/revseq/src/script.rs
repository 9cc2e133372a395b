/// Line-oriented edit scripts driving a `RevSeq<String>`.
use std::io::Write;

use anyhow::{bail, Context, Result};
use revseq_core::{RevSeq, Slot};

/// Literal item that stands for a gap.
pub const GAP_TOKEN: &str = "_";

/// One script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Push(Vec<Slot<String>>),
    Unshift(Vec<Slot<String>>),
    Pop,
    Shift,
    Set(usize, String),
    Delete(usize),
    Len(usize),
    Splice(usize, usize, Vec<Slot<String>>),
    Undo,
    Redo,
    Print,
    History,
}

/// Parses an item token, mapping `_` to a gap.
pub fn parse_item(token: &str) -> Slot<String> {
    if token == GAP_TOKEN {
        Slot::Empty
    } else {
        Slot::Present(token.to_string())
    }
}

fn parse_index(token: Option<&str>, what: &str) -> Result<usize> {
    let token = token.with_context(|| format!("missing {what}"))?;
    token
        .parse()
        .with_context(|| format!("invalid {what}: {token:?}"))
}

/// Parses a single line. Blank lines and `#` comments yield `None`.
///
/// # Errors
///
/// Returns an error for unknown commands or malformed arguments.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };

    let command = match name {
        "push" => Command::Push(tokens.map(parse_item).collect()),
        "unshift" => Command::Unshift(tokens.map(parse_item).collect()),
        "pop" => Command::Pop,
        "shift" => Command::Shift,
        "set" => {
            let index = parse_index(tokens.next(), "index")?;
            let value = tokens.next().context("missing value")?;
            Command::Set(index, value.to_string())
        }
        "delete" => Command::Delete(parse_index(tokens.next(), "index")?),
        "len" => Command::Len(parse_index(tokens.next(), "length")?),
        "splice" => {
            let index = parse_index(tokens.next(), "index")?;
            let count = parse_index(tokens.next(), "count")?;
            Command::Splice(index, count, tokens.map(parse_item).collect())
        }
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "print" => Command::Print,
        "history" => Command::History,
        other => bail!("unknown command: {other:?}"),
    };
    Ok(Some(command))
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns the first parse error, tagged with its 1-based line number.
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(command) = parse_line(line).with_context(|| format!("line {}", i + 1))? {
            commands.push(command);
        }
    }
    Ok(commands)
}

fn format_slots(slots: &[Slot<String>]) -> String {
    let items: Vec<String> = slots.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn format_removed(removed: Option<Slot<String>>) -> String {
    match removed {
        Some(slot) => slot.to_string(),
        None => "nothing".to_string(),
    }
}

/// Runs commands against `seq`, writing command output to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run<W: Write>(seq: &mut RevSeq<String>, commands: &[Command], out: &mut W) -> Result<()> {
    for command in commands {
        tracing::trace!(?command, "running");
        match command {
            Command::Push(items) => writeln!(out, "{}", seq.push(items.iter().cloned()))?,
            Command::Unshift(items) => writeln!(out, "{}", seq.unshift(items.iter().cloned()))?,
            Command::Pop => writeln!(out, "{}", format_removed(seq.pop()))?,
            Command::Shift => writeln!(out, "{}", format_removed(seq.shift()))?,
            Command::Set(index, value) => {
                seq.set(*index, value.clone());
            }
            Command::Delete(index) => {
                seq.delete(*index);
            }
            Command::Len(len) => {
                seq.set_len(*len);
            }
            Command::Splice(index, count, items) => {
                let removed = seq.splice(*index, *count, items.iter().cloned());
                writeln!(out, "{}", format_slots(&removed))?;
            }
            Command::Undo => {
                if !seq.undo() {
                    tracing::info!("nothing to undo");
                }
            }
            Command::Redo => {
                if !seq.redo() {
                    tracing::info!("nothing to redo");
                }
            }
            Command::Print => writeln!(out, "{seq}")?,
            Command::History => writeln!(
                out,
                "undo: {}, redo: {}",
                seq.history().undo_len(),
                seq.history().redo_len()
            )?,
        }
    }
    Ok(())
}
