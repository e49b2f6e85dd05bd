// Byte-bounded chunk builder: never cuts a file block in the middle
use tracing::warn;

use crate::pack::blocks::FileBlock;

/// One output chunk: the shared header plus a run of whole file blocks.
pub struct Chunk {
    /// 1-based, used in the output file name.
    pub index: usize,
    pub text: String,
    pub bytes: usize,
}

/// Packs blocks into chunks of at most `max_bytes`, splitting only between
/// blocks. `header` is prepended to every chunk and counts against the
/// budget. A limit of zero yields a single chunk holding everything.
pub fn build_chunks(
    header: &str,
    blocks: &[FileBlock],
    max_bytes: usize,
) -> Vec<Chunk> {
    if blocks.is_empty() {
        return Vec::new();
    }

    let mut bodies: Vec<String> = Vec::new();
    let mut current = String::new();
    for block in blocks {
        if max_bytes > 0
            && !current.is_empty()
            && header.len() + current.len() + block.text.len() > max_bytes
        {
            bodies.push(std::mem::take(&mut current));
        }
        current.push_str(&block.text);
    }
    if !current.is_empty() {
        bodies.push(current);
    }

    let mut chunks = Vec::with_capacity(bodies.len());
    for (i, body) in bodies.into_iter().enumerate() {
        let text = format!("{header}{body}");
        let bytes = text.len();
        // A chunk can only overflow when it holds a single oversize block
        if max_bytes > 0 && bytes > max_bytes {
            warn!(
                "chunk {} is {} bytes, over the {} byte limit (oversize file block)",
                i + 1,
                bytes,
                max_bytes
            );
        }
        chunks.push(Chunk {
            index: i + 1,
            text,
            bytes,
        });
    }
    chunks
}
