use crate::constants::SEPARATOR_LINE;

/// One whole file block cut out of serialized content.
#[derive(Debug, Clone)]
pub struct FileBlock {
    /// Path from the `FILE:` header line, when one was found.
    pub path: Option<String>,
    pub text: String,
}

impl FileBlock {
    pub fn bytes(&self) -> usize {
        self.text.len()
    }
}

/// Split serialized content into whole file blocks.
///
/// A block is a (separator, header, separator, body) run whose header part
/// carries a `FILE:` line; parts that do not look like a file header are
/// skipped. Concatenating the returned blocks reproduces the content exactly
/// when it was produced by the digest serializer.
pub fn split_into_blocks(content: &str) -> Vec<FileBlock> {
    let parts: Vec<&str> = content.split(SEPARATOR_LINE).collect();
    let mut blocks = Vec::new();
    let mut i = 1;
    while i + 1 < parts.len() {
        let header = parts[i];
        if header.contains("FILE:") {
            let body = parts[i + 1];
            blocks.push(FileBlock {
                path: parse_path(header),
                text: format!("{SEPARATOR_LINE}{header}{SEPARATOR_LINE}{body}"),
            });
            i += 2;
        } else {
            i += 1;
        }
    }
    blocks
}

fn parse_path(header: &str) -> Option<String> {
    header
        .lines()
        .find_map(|line| line.trim().strip_prefix("FILE:"))
        .map(|p| p.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::FileContents;
    use crate::ingest::digest::render_content;

    fn sample_content() -> String {
        render_content(&[
            FileContents {
                path: "src/main.c".to_string(),
                contents: "int main(void) { return 0; }\n".to_string(),
            },
            FileContents {
                path: "include/util.h".to_string(),
                contents: "#pragma once\n".to_string(),
            },
        ])
    }

    #[test]
    fn blocks_reassemble_to_original_content() {
        let content = sample_content();
        let blocks = split_into_blocks(&content);
        assert_eq!(blocks.len(), 2);
        let glued: String = blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(glued, content);
    }

    #[test]
    fn paths_are_parsed_from_headers() {
        let blocks = split_into_blocks(&sample_content());
        assert_eq!(blocks[0].path.as_deref(), Some("src/main.c"));
        assert_eq!(blocks[1].path.as_deref(), Some("include/util.h"));
    }

    #[test]
    fn preamble_without_file_header_is_skipped() {
        let content = format!("stray text\n{}", sample_content());
        let blocks = split_into_blocks(&content);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn empty_content_yields_no_blocks() {
        assert!(split_into_blocks("").is_empty());
    }
}
