pub mod digest;
pub mod types;
pub mod walk;

pub use types::{Digest, FileContents, IngestOptions};

use std::{fs, path::Path};

use anyhow::{Result, anyhow};
use path_slash::PathExt as _;

use crate::tokenizer;

/// Walk `root`, apply the options' glob filters, and serialize the selection
/// as (summary, tree, content).
pub fn ingest(
    root: &Path,
    opts: &IngestOptions,
) -> Result<Digest> {
    let root = dunce::canonicalize(root).map_err(|e| anyhow!("cannot open root {:?}: {}", root, e))?;
    if !root.is_dir() {
        return Err(anyhow!("root {:?} is not a directory", root));
    }
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let rel_paths = walk::discover(&root, opts)?;
    let mut files = Vec::with_capacity(rel_paths.len());
    for rel in &rel_paths {
        match read_file(&root.join(rel), opts.max_file_size) {
            Ok(contents) => files.push(FileContents {
                path: rel.to_slash_lossy().to_string(),
                contents,
            }),
            Err(e) => tracing::warn!("{e}"),
        }
    }

    let content = digest::render_content(&files);
    let paths: Vec<String> = files.iter().map(|f| f.path.clone()).collect();
    let tree = digest::render_tree(&root_name, &paths);
    let estimate =
        tokenizer::format_estimate(tokenizer::count(&tree) + tokenizer::count(&content));
    let summary = digest::render_summary(&root_name, files.len(), &estimate);

    Ok(Digest {
        summary,
        tree,
        content,
    })
}

/// Reads one file, enforcing the size cap and skipping binaries.
pub fn read_file(
    path: &Path,
    max_size: u64,
) -> Result<String> {
    let metadata = fs::metadata(path)?;
    if metadata.len() > max_size {
        return Err(anyhow!(
            "skipping {:?}: exceeds {} bytes",
            path,
            max_size
        ));
    }
    let bytes = fs::read(path)?;
    // Binary detection: treat invalid UTF-8 in a sample as binary
    let sample_size = bytes.len().min(4096);
    if sample_size > 0 && std::str::from_utf8(&bytes[..sample_size]).is_err() {
        return Err(anyhow!(
            "skipping {:?}: appears to be a binary file",
            path
        ));
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
