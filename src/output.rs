use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

/// Path of a non-chunked output file: `<out_dir>/<prefix>-<kind>.txt`.
pub fn artifact_path(
    out_dir: &Path,
    prefix: &str,
    kind: &str,
) -> PathBuf {
    out_dir.join(format!("{prefix}-{kind}.txt"))
}

/// Path of one source chunk: `<out_dir>/<prefix>-source-<index>.txt`.
pub fn chunk_path(
    out_dir: &Path,
    prefix: &str,
    index: usize,
) -> PathBuf {
    out_dir.join(format!("{prefix}-source-{index}.txt"))
}

/// Write one artifact and report its size.
pub fn write_text(
    path: &Path,
    text: &str,
) -> Result<()> {
    fs::write(path, text).with_context(|| format!("writing {:?}", path))?;
    info!("wrote {} ({} KiB)", path.display(), text.len() / 1024);
    Ok(())
}
