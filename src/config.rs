use std::path::PathBuf;

pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";
pub const DEFAULT_OUTPUT_FILE: &str = "codebase.txt";

/// Token budget of a single LLM request, used for the "requests needed" estimate.
pub const TOKENS_PER_REQUEST: usize = 4096;

/// Number of leading bytes inspected when deciding whether a file is binary.
pub const SNIFF_LEN: usize = 512;

/// Names that are never included, whether they are files or directories.
pub const DEFAULT_IGNORED_BASENAMES: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".bzr",
    ".gitattributes",
    ".gitmodules",
    ".env",
    "vendor",
    "node_modules",
    ".DS_Store",
    "Thumbs.db",
    "Cargo.lock",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Gemfile.lock",
    "composer.lock",
    "poetry.lock",
    "uv.lock",
    "go.sum",
];

/// Extensions of files that are not considered source code.
pub const DEFAULT_IGNORED_EXTENSIONS: &[&str] = &[
    // Images
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "svg", "webp", "tif", "tiff", "psd",
    // Fonts
    "ttf", "otf", "woff", "woff2", "eot",
    // Audio and video
    "mp3", "mp4", "wav", "ogg", "flac", "avi", "mov", "webm",
    // Archives
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar",
    // Compiled artifacts
    "exe", "dll", "so", "dylib", "o", "a", "lib", "class", "pyc", "pyo", "wasm", "bin",
    // Documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    // Markup, config and plain text
    "md", "markdown", "rst", "txt", "json", "yaml", "yml", "toml", "xml", "csv", "tsv",
    "ini", "cfg", "lock", "log",
];

#[derive(Debug, Clone)]
pub struct CopyRepoConfig {
    pub root: PathBuf,
    pub ignore_file: PathBuf,
    pub output_file: PathBuf,
    pub tokens_per_request: usize,
    pub sniff_len: usize,
    pub ignored_basenames: Vec<String>,
    pub ignored_extensions: Vec<String>,
}

impl Default for CopyRepoConfig {
    fn default() -> Self {
        CopyRepoConfig {
            root: PathBuf::from("."),
            ignore_file: PathBuf::from(DEFAULT_IGNORE_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            tokens_per_request: TOKENS_PER_REQUEST,
            sniff_len: SNIFF_LEN,
            ignored_basenames: DEFAULT_IGNORED_BASENAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ignored_extensions: DEFAULT_IGNORED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CopyRepoConfig {
    /// Config for a run rooted at `root`, with the ignore file and the output
    /// artifact both living inside it.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        CopyRepoConfig {
            ignore_file: root.join(DEFAULT_IGNORE_FILE),
            output_file: root.join(DEFAULT_OUTPUT_FILE),
            root,
            ..Default::default()
        }
    }
}
