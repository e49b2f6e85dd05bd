use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{SecondsFormat, Utc};

use crate::constants::SEPARATOR_LINE;
use crate::ingest::FileContents;

/// Summary lines for the top of every output file.
pub fn render_summary(
    root_name: &str,
    files_analyzed: usize,
    token_estimate: &str,
) -> String {
    let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        "Directory: {root_name}\nGenerated: {ts}\nFiles analyzed: {files_analyzed}\nEstimated tokens: {token_estimate}"
    )
}

#[derive(Default)]
struct DirNode {
    dirs: BTreeMap<String, DirNode>,
    files: Vec<String>,
}

impl DirNode {
    fn insert(
        &mut self,
        path: &str,
    ) {
        match path.split_once('/') {
            Some((dir, rest)) => self.dirs.entry(dir.to_string()).or_default().insert(rest),
            None => self.files.push(path.to_string()),
        }
    }
}

/// Box-drawing tree of the ingested paths, rooted at the directory's name.
/// Directories come before files, each group sorted by name.
pub fn render_tree(
    root_name: &str,
    paths: &[String],
) -> String {
    let mut root = DirNode::default();
    for path in paths {
        root.insert(path);
    }
    let mut out = String::from("Directory structure:\n");
    let _ = write!(&mut out, "└── {root_name}/");
    render_node(&root, "    ", &mut out);
    out
}

fn render_node(
    node: &DirNode,
    prefix: &str,
    out: &mut String,
) {
    let mut files = node.files.clone();
    files.sort();
    let total = node.dirs.len() + files.len();
    let mut seen = 0usize;
    for (name, child) in &node.dirs {
        seen += 1;
        let last = seen == total;
        let connector = if last { "└── " } else { "├── " };
        let _ = write!(out, "\n{prefix}{connector}{name}/");
        let extension = if last { "    " } else { "│   " };
        render_node(child, &format!("{prefix}{extension}"), out);
    }
    for name in &files {
        seen += 1;
        let connector = if seen == total { "└── " } else { "├── " };
        let _ = write!(out, "\n{prefix}{connector}{name}");
    }
}

/// Concatenated file blocks: separator, `FILE:` header, separator, contents.
pub fn render_content(files: &[FileContents]) -> String {
    let mut out = String::new();
    for file in files {
        out.push_str(SEPARATOR_LINE);
        out.push('\n');
        out.push_str("FILE: ");
        out.push_str(&file.path);
        out.push('\n');
        out.push_str(SEPARATOR_LINE);
        out.push('\n');
        out.push_str(&file.contents);
        out.push_str("\n\n");
    }
    out
}
