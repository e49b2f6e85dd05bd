use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Cli;
use crate::constants::{DEFAULT_SETTING_PATTERNS, DEFAULT_SOURCE_PATTERNS};

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub prefix: Option<String>,
    /// Source split size in KiB; zero disables chunking.
    pub chunk_kb: usize,
    pub out_dir: PathBuf,
    pub exclude: Vec<String>,
    pub no_default_excludes: bool,
    pub setting_patterns: Vec<String>,
    pub source_patterns: Vec<String>,
    pub max_size: u64,
    pub interactive: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Ok(Cli::parse().into())
    }

    /// Output prefix: the explicit flag, else the root directory's name.
    pub fn resolve_prefix(&self) -> Result<String> {
        if let Some(prefix) = &self.prefix {
            return Ok(prefix.clone());
        }
        let root = dunce::canonicalize(&self.root)
            .with_context(|| format!("cannot open root {:?}", self.root))?;
        Ok(root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "project".to_string()))
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let setting_patterns = if cli.setting_patterns.is_empty() {
            DEFAULT_SETTING_PATTERNS.iter().map(|s| s.to_string()).collect()
        } else {
            cli.setting_patterns
        };
        let source_patterns = if cli.source_patterns.is_empty() {
            DEFAULT_SOURCE_PATTERNS.iter().map(|s| s.to_string()).collect()
        } else {
            cli.source_patterns
        };
        Config {
            root: cli.root,
            prefix: cli.prefix,
            chunk_kb: cli.chunk_size,
            out_dir: cli.out_dir,
            exclude: cli.exclude,
            no_default_excludes: cli.no_default_excludes,
            setting_patterns,
            source_patterns,
            max_size: cli.max_size,
            interactive: cli.interactive,
        }
    }
}
