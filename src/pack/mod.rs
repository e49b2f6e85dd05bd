pub mod blocks;
pub mod chunker;

pub use blocks::{FileBlock, split_into_blocks};
pub use chunker::{Chunk, build_chunks};
