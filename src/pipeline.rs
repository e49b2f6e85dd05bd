use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use globset::Glob;
use tracing::info;

use crate::config::Config;
use crate::constants::DEFAULT_EXCLUDES;
use crate::ingest::{self, Digest, IngestOptions};
use crate::output;
use crate::pack::{blocks, chunker};

#[derive(Debug)]
pub struct InvalidExcludePatterns {
    pub patterns: Vec<String>,
}

impl std::fmt::Display for InvalidExcludePatterns {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "Every --exclude pattern was invalid: {:?}",
            self.patterns
        )
    }
}

impl std::error::Error for InvalidExcludePatterns {}

/// Pipeline driving the structure, settings and source passes.
pub struct Pipeline {
    config: Config,
    prefix: String,
    excludes: Vec<String>,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self> {
        let prefix = config.resolve_prefix()?;

        let user_patterns: Vec<String> =
            config.exclude.iter().map(|p| p.replace('\\', "/")).collect();
        let valid = user_patterns
            .iter()
            .filter(|p| Glob::new(p).is_ok())
            .count();
        if !user_patterns.is_empty() && valid == 0 {
            return Err(anyhow!(InvalidExcludePatterns {
                patterns: user_patterns,
            }));
        }

        let mut excludes: Vec<String> = if config.no_default_excludes {
            Vec::new()
        } else {
            DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
        };
        excludes.extend(user_patterns);

        fs::create_dir_all(&config.out_dir)?;
        Ok(Self {
            config,
            prefix,
            excludes,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn opts(
        &self,
        include: &[String],
    ) -> IngestOptions {
        IngestOptions {
            include: include.to_vec(),
            exclude: self.excludes.clone(),
            max_file_size: self.config.max_size,
        }
    }

    pub fn run(&self) -> Result<()> {
        info!(
            "analyzing {} (prefix {})",
            self.config.root.display(),
            self.prefix
        );
        self.run_structure()?;
        self.run_settings()?;
        self.run_source()?;
        info!("done; upload the generated files alongside your prompt");
        Ok(())
    }

    /// Structure pass: summary and tree only.
    pub fn run_structure(&self) -> Result<PathBuf> {
        let digest = ingest::ingest(&self.config.root, &self.opts(&[]))?;
        let path = output::artifact_path(&self.config.out_dir, &self.prefix, "structure");
        output::write_text(&path, &format!("{}\n{}", digest.summary, digest.tree))?;
        Ok(path)
    }

    /// Settings pass: build files, configs and docs, contents included.
    pub fn run_settings(&self) -> Result<PathBuf> {
        let digest = ingest::ingest(
            &self.config.root,
            &self.opts(&self.config.setting_patterns),
        )?;
        let path = output::artifact_path(&self.config.out_dir, &self.prefix, "setting");
        output::write_text(&path, &full_digest(&digest))?;
        Ok(path)
    }

    /// Source pass: source files, optionally split into byte-bounded chunks.
    pub fn run_source(&self) -> Result<Vec<PathBuf>> {
        let digest = ingest::ingest(&self.config.root, &self.opts(&self.config.source_patterns))?;
        if self.config.chunk_kb == 0 {
            let path = output::artifact_path(&self.config.out_dir, &self.prefix, "source");
            output::write_text(&path, &full_digest(&digest))?;
            return Ok(vec![path]);
        }

        let file_blocks = blocks::split_into_blocks(&digest.content);
        if file_blocks.is_empty() {
            info!("no file blocks matched the source patterns; skipping source output");
            return Ok(Vec::new());
        }
        info!(
            "packing {} file blocks into {} KiB chunks",
            file_blocks.len(),
            self.config.chunk_kb
        );
        let header = format!("{}\n\n{}\n\n", digest.summary, digest.tree);
        let chunks = chunker::build_chunks(&header, &file_blocks, self.config.chunk_kb * 1024);
        let mut written = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let path = output::chunk_path(&self.config.out_dir, &self.prefix, chunk.index);
            output::write_text(&path, &chunk.text)?;
            written.push(path);
        }
        Ok(written)
    }
}

fn full_digest(digest: &Digest) -> String {
    format!("{}\n\n{}\n\n{}", digest.summary, digest.tree, digest.content)
}
