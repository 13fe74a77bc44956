use std::path::{Path, PathBuf};

/// A file or directory found under the snapshot root.
#[derive(Debug, Clone)]
pub struct FsEntry {
    /// Full path on disk.
    pub path: PathBuf,
    /// Path relative to the snapshot root.
    pub relative_path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    /// Size in bytes; zero for directories.
    pub size: u64,
}

impl FsEntry {
    /// Relative path joined with `/` regardless of platform.
    pub fn display_path(&self) -> String {
        slash_path(&self.relative_path)
    }
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// One node of the filtered hierarchy. Files never have children.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub entry: FsEntry,
    pub children: Vec<TreeNode>,
}

/// Counters gathered while scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub directories: usize,
    pub files: usize,
    pub oversized: usize,
    pub unreadable: usize,
    pub pruned_directories: usize,
}

/// The filtered directory hierarchy, computed once and shared by the tree
/// diagram and the contents section.
#[derive(Debug, Clone)]
pub struct SnapshotTree {
    pub root: PathBuf,
    pub root_name: String,
    /// Children of the root, already sorted for display.
    pub children: Vec<TreeNode>,
    pub stats: ScanStats,
}

/// Result of one [`crate::create_snapshot`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOutcome {
    Written {
        path: PathBuf,
        files: usize,
        bytes: u64,
    },
    /// Nothing includable was found; no document was written.
    NoFiles,
}
