// Centralized magic numbers & default values
pub const SEPARATOR_WIDTH: usize = 48;
pub const SEPARATOR_LINE: &str = "================================================";

pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Patterns excluded from every pass unless `--no-default-excludes` is set.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "archive/*",
    "build/*",
    "target/*",
    ".git/*",
    "*.o",
    "*.d",
    "*.elf",
    "*.sav",
    "*.gba",
];

/// Include patterns for the settings pass (build files, configs, docs).
pub const DEFAULT_SETTING_PATTERNS: &[&str] = &[
    "Makefile",
    "makefile",
    "CMakeLists.txt",
    "*.cmake",
    "*.md",
    "*.json",
    "*.toml",
    "*.yaml",
    "*.yml",
];

/// Include patterns for the source pass.
pub const DEFAULT_SOURCE_PATTERNS: &[&str] = &[
    "*.c", "*.h", "*.s", "*.asm", "*.cpp", "*.hpp", "*.rs", "src/*", "include/*",
];
