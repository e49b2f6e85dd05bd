use proptest::prelude::*;
use repo_pack::FileContents;
use repo_pack::ingest::digest::render_content;
use repo_pack::pack::{build_chunks, split_into_blocks};

proptest! {
    // "For every input" correctness of the packer: whatever the file
    // contents and budget, re-assembling the chunk bodies must reproduce
    // the serialized content byte for byte.
    #[test]
    fn reassembled_equals_original(contents in prop::collection::vec("[a-z \\n]{0,120}", 1..20),
                                   limit in 64usize..2048) {
        let files: Vec<FileContents> = contents
            .iter()
            .enumerate()
            .map(|(i, text)| FileContents {
                path: format!("f{i}.txt"),
                contents: text.clone(),
            })
            .collect();
        let content = render_content(&files);
        let blocks = split_into_blocks(&content);
        prop_assert_eq!(blocks.len(), files.len());

        let header = "summary\n\ntree\n\n";
        let chunks = build_chunks(header, &blocks, limit);
        for chunk in &chunks {
            prop_assert!(chunk.text.starts_with(header));
        }
        let glued: String = chunks
            .iter()
            .map(|c| &c.text[header.len()..])
            .collect();
        prop_assert_eq!(glued, content);
    }

    #[test]
    fn chunks_respect_limit_for_small_blocks(count in 1usize..20, limit in 400usize..1000) {
        let files: Vec<FileContents> = (0..count)
            .map(|i| FileContents {
                path: format!("f{i}.txt"),
                contents: "x".repeat(40),
            })
            .collect();
        let blocks = split_into_blocks(&render_content(&files));
        // every block is small relative to the budget, so no chunk may overflow
        for chunk in build_chunks("h\n\n", &blocks, limit) {
            prop_assert!(chunk.bytes <= limit);
        }
    }
}
