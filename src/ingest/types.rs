use crate::constants::DEFAULT_MAX_FILE_SIZE;

/// One ingested file: root-relative slash path plus its text.
#[derive(Debug, Clone)]
pub struct FileContents {
    pub path: String,
    pub contents: String,
}

/// Filters applied by a single ingestion pass.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Include patterns; an empty list includes everything.
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Serialized view of a directory tree.
#[derive(Debug, Clone)]
pub struct Digest {
    pub summary: String,
    pub tree: String,
    pub content: String,
}
