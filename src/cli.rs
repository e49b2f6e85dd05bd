use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "repo-pack")]
#[command(
    about = "Package a source tree into structure/settings/source text files for LLM upload, \
                   splitting the source output into size-bounded chunks."
)]
pub struct Cli {
    /// Project root to ingest.
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output file prefix; defaults to the root directory's name.
    #[arg(short = 'p', long = "prefix")]
    pub prefix: Option<String>,

    /// Split the source output into chunks no larger than this many KiB. Default = 0 means no chunking.
    #[arg(short = 'c', long = "chunk-size", default_value_t = 0)]
    pub chunk_size: usize,

    /// Directory the output files are written to.
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Glob patterns to exclude files from every pass.
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Do not apply the built-in exclude patterns.
    #[arg(long = "no-default-excludes")]
    pub no_default_excludes: bool,

    /// Replace the include patterns of the settings pass.
    #[arg(long = "setting-pattern")]
    pub setting_patterns: Vec<String>,

    /// Replace the include patterns of the source pass.
    #[arg(long = "source-pattern")]
    pub source_patterns: Vec<String>,

    /// Maximum file size in bytes before skipping files.
    #[arg(short = 's', long = "max-size", default_value_t = crate::constants::DEFAULT_MAX_FILE_SIZE)]
    pub max_size: u64,

    /// Prompt for the prefix and split size instead of taking them from flags.
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,
}
