use serde::Serialize;
use std::collections::BTreeSet;

/// Extensions included in a snapshot unless overridden.
pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".js", ".jsx", ".css", ".scss", ".sass", ".less", ".json", ".md", ".txt",
    ".yml", ".yaml", ".html", ".xml", ".svg", ".env", ".gitignore", ".eslintrc", ".py",
];

/// Names skipped at any depth, for files and directories alike.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    "dist",
    "build",
    ".turbo",
    "coverage",
    ".nyc_output",
    "logs",
    "__pycache__",
    ".pytest_cache",
    "venv",
    "env",
    ".venv",
    ".DS_Store",
    "Thumbs.db",
];

pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024;
pub const DEFAULT_MAX_DEPTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotOptions {
    /// Lower-cased extensions with a leading dot.
    pub include_extensions: BTreeSet<String>,
    /// Exact names matched against every path segment.
    pub exclude_patterns: BTreeSet<String>,
    pub max_file_size: u64,
    pub max_depth: usize,
}
impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            include_extensions: DEFAULT_INCLUDE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            exclude_patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    options: SnapshotOptions,
}
impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Replaces the extension set. Entries are normalized to `.ext` in lower case.
    pub fn include_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.include_extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        self
    }
    pub fn exclude_patterns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exclude_patterns = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.options.max_file_size = bytes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }
    pub fn build(self) -> SnapshotOptions {
        self.options
    }
}
fn normalize_extension(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}
