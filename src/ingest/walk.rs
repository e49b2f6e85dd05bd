use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use path_slash::PathExt as _;

use crate::ingest::IngestOptions;

/// Compile glob patterns, skipping invalid ones with a warning.
///
/// Patterns keep globset's default semantics: `*` may cross `/`, so `*.json`
/// matches nested files and `build/*` covers a whole subtree.
fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    let mut valid = 0usize;
    for pattern in patterns {
        let pattern = pattern.replace('\\', "/");
        match Glob::new(&pattern) {
            Ok(glob) => {
                builder.add(glob);
                valid += 1;
            }
            Err(e) => tracing::warn!("ignoring invalid glob pattern {pattern}: {e}"),
        }
    }
    if valid == 0 {
        return Ok(None);
    }
    Ok(Some(builder.build()?))
}

// The walker only applies .gitignore inside a git checkout; top-level "/dir"
// entries are honored manually so plain directories behave the same.
fn top_level_ignored_dirs(root: &Path) -> Vec<String> {
    let mut ignore_dirs = Vec::new();
    if let Ok(s) = fs::read_to_string(root.join(".gitignore")) {
        for line in s.lines() {
            let pat = line.trim();
            if pat.is_empty() || pat.starts_with('#') {
                continue;
            }
            if let Some(dir) = pat.strip_prefix('/') {
                ignore_dirs.push(dir.trim_end_matches('/').to_string());
            }
        }
    }
    ignore_dirs
}

/// Recursively discover files under `root` that pass the options' filters.
/// Returned paths are root-relative and sorted.
pub fn discover(
    root: &Path,
    opts: &IngestOptions,
) -> Result<Vec<PathBuf>> {
    let include = build_globset(&opts.include)?;
    let exclude = build_globset(&opts.exclude)?;
    let ignore_dirs = top_level_ignored_dirs(root);

    let mut results = Vec::new();
    let walker = WalkBuilder::new(root)
        .follow_links(false)
        .standard_filters(true)
        .build();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("could not process entry under {:?}: {:?}", root, e);
                continue;
            }
        };
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        if let Some(comp) = rel.components().next() {
            let name = comp.as_os_str().to_string_lossy();
            if ignore_dirs.iter().any(|d| d == name.as_ref()) {
                continue;
            }
        }
        let slash = rel.to_slash_lossy();
        if let Some(matcher) = &exclude {
            if matcher.is_match(slash.as_ref()) {
                continue;
            }
        }
        if let Some(matcher) = &include {
            if !matcher.is_match(slash.as_ref()) {
                continue;
            }
        }
        results.push(rel.to_path_buf());
    }

    results.sort();
    results.dedup();
    Ok(results)
}
