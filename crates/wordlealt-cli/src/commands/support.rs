use std::io::{Read, Write};
use std::{fs, io};

use anyhow::{Context, Result};

use crate::cli::SourceArgs;

pub(super) fn print_text(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}

pub(super) fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub(super) fn read_source(source: &SourceArgs) -> Result<String> {
    validate_source_selection(source)?;

    if let Some(content) = &source.content {
        return Ok(content.clone());
    }
    if let Some(path) = &source.from {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript from {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read transcript from stdin")?;
    Ok(buffer)
}

pub(super) fn validate_source_selection(source: &SourceArgs) -> Result<()> {
    let selected = bool_to_count(source.content.is_some())
        + bool_to_count(source.from.is_some())
        + bool_to_count(source.stdin);
    ensure_single_source_selection(
        selected,
        "transcript source is required: use one of --content, --from <path>, --stdin",
        "exactly one transcript source is accepted: choose one of --content, --from, --stdin",
    )
}

const fn bool_to_count(value: bool) -> u8 {
    if value { 1 } else { 0 }
}

fn ensure_single_source_selection(
    selected: u8,
    missing_message: &str,
    multiple_message: &str,
) -> Result<()> {
    if selected == 0 {
        anyhow::bail!("{missing_message}");
    }
    if selected > 1 {
        anyhow::bail!("{multiple_message}");
    }
    Ok(())
}
