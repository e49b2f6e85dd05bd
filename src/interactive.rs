use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::config::Config;

/// Interview mode: ask for the output prefix and split size on stdin.
/// Empty answers keep the configured defaults; a non-numeric split size
/// reads as "no split".
pub fn apply_prompts(config: &mut Config) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let default_prefix = config.resolve_prefix()?;
    let name = prompt(&mut lines, &format!("project name [{default_prefix}]: "))?;
    if !name.is_empty() {
        config.prefix = Some(name);
    }

    let size = prompt(
        &mut lines,
        &format!(
            "source split size in KiB (0 for no split) [{}]: ",
            config.chunk_kb
        ),
    )?;
    if !size.is_empty() {
        config.chunk_kb = size.parse().unwrap_or(0);
    }
    Ok(())
}

// Prompts go to stderr so piped stdout stays clean.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<String> {
    eprint!("{text}");
    let _ = io::stderr().flush();
    match lines.next() {
        Some(line) => Ok(line.context("reading stdin")?.trim().to_string()),
        None => Ok(String::new()),
    }
}
