use crate::error::SnapmdError;
use crate::filter::Filter;
use crate::options::SnapshotOptions;
use crate::types::{FsEntry, ScanStats, SnapshotTree, TreeNode};
use ignore::{DirEntry, WalkBuilder};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

fn walker(root: &Path, options: &SnapshotOptions, filter: Filter) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(true)
        // Files one level below the deepest listed directory are still shown.
        .max_depth(Some(options.max_depth.saturating_add(1)));
    builder.filter_entry(move |entry| {
        entry.depth() == 0 || !filter.is_excluded_name(&entry.file_name().to_string_lossy())
    });
    builder.build()
}

/// Walks `root` once and returns the filtered, display-sorted hierarchy.
///
/// Recoverable problems (unreadable directories, failed `stat` calls,
/// oversized files) are logged and counted in [`ScanStats`]; the entry is
/// left out and the walk continues.
pub fn scan(root: &Path, options: &SnapshotOptions) -> Result<SnapshotTree, SnapmdError> {
    if !root.exists() {
        return Err(SnapmdError::SourceNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(SnapmdError::NotADirectory(root.to_path_buf()));
    }
    debug!("Scanning {}", root.display());
    let filter = Filter::new(options);
    let mut stats = ScanStats::default();
    let mut pending: HashMap<PathBuf, Vec<FsEntry>> = HashMap::new();
    for result in walker(root, options, filter.clone()) {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                stats.unreadable += 1;
                warn!("Cannot read directory entry: {}", e);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        if let Some(fs_entry) = classify(root, &entry, &filter, options, &mut stats) {
            let parent = fs_entry
                .relative_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            pending.entry(parent).or_default().push(fs_entry);
        }
    }
    let children = assemble(Path::new(""), &mut pending);
    let root_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    Ok(SnapshotTree {
        root: root.to_path_buf(),
        root_name,
        children,
        stats,
    })
}

fn classify(
    root: &Path,
    entry: &DirEntry,
    filter: &Filter,
    options: &SnapshotOptions,
    stats: &mut ScanStats,
) -> Option<FsEntry> {
    let path = entry.path();
    let file_type = entry.file_type()?;
    let name = entry.file_name().to_string_lossy().into_owned();
    let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    if file_type.is_dir() {
        if entry.depth() > options.max_depth {
            stats.pruned_directories += 1;
            debug!(
                "Depth limit {} reached, not listing {}",
                options.max_depth,
                path.display()
            );
            return None;
        }
        stats.directories += 1;
        return Some(FsEntry {
            path: path.to_path_buf(),
            relative_path,
            name,
            is_dir: true,
            size: 0,
        });
    }
    if !file_type.is_file() {
        debug!("Skipping non-regular entry {}", path.display());
        return None;
    }
    if !filter.is_included_file(&name) {
        return None;
    }
    let size = match entry.metadata() {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            stats.unreadable += 1;
            warn!("Cannot stat file {}: {}", path.display(), e);
            return None;
        }
    };
    if size > options.max_file_size {
        stats.oversized += 1;
        warn!("File {} skipped (size {} KB)", path.display(), size / 1024);
        return None;
    }
    stats.files += 1;
    Some(FsEntry {
        path: path.to_path_buf(),
        relative_path,
        name,
        is_dir: false,
        size,
    })
}

fn assemble(dir: &Path, pending: &mut HashMap<PathBuf, Vec<FsEntry>>) -> Vec<TreeNode> {
    let mut entries = pending.remove(dir).unwrap_or_default();
    sort_for_display(&mut entries);
    entries
        .into_iter()
        .map(|entry| {
            let children = if entry.is_dir {
                assemble(&entry.relative_path, pending)
            } else {
                Vec::new()
            };
            TreeNode { entry, children }
        })
        .collect()
}

/// Directories first, then case-insensitive name order.
fn sort_for_display(entries: &mut [FsEntry]) {
    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Flattens the tree into its files, ordered by forward-slash relative path.
pub fn collect_files(tree: &SnapshotTree) -> Vec<&FsEntry> {
    fn visit<'a>(nodes: &'a [TreeNode], out: &mut Vec<&'a FsEntry>) {
        for node in nodes {
            if node.entry.is_dir {
                visit(&node.children, out);
            } else {
                out.push(&node.entry);
            }
        }
    }
    let mut files = Vec::with_capacity(tree.stats.files);
    visit(&tree.children, &mut files);
    files.sort_by_cached_key(|entry| entry.display_path());
    files
}
