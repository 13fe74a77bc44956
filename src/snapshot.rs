//! End-to-end snapshot creation: resolve the source, scan it once, render the
//! document and write it into the output directory.

use crate::engine::{collect_files, scan};
use crate::error::SnapmdError;
use crate::options::SnapshotOptions;
use crate::output::{SnapshotDocument, format_timestamp, write_document};
use crate::tree::render_tree;
use crate::types::SnapshotOutcome;
use chrono::Local;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Directory every snapshot is written into, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "snapshots";

#[derive(Debug, Clone)]
pub struct SnapshotRequest {
    pub source: PathBuf,
    /// Requested output file. Only its file name is used.
    pub output: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub options: SnapshotOptions,
}

impl SnapshotRequest {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            options: SnapshotOptions::default(),
        }
    }
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
    pub fn options(mut self, options: SnapshotOptions) -> Self {
        self.options = options;
        self
    }
}

/// `<folder-basename>-snapshot.md`. Falls back to the resolved folder's name
/// when `source` has none (`.`, `..`).
pub fn default_output_name(source: &Path, resolved: &Path) -> String {
    let name = source
        .file_name()
        .or_else(|| resolved.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}-snapshot.md", name)
}

/// Places the file name of `requested` inside `output_dir`, discarding any
/// directory components of `requested`.
pub fn resolve_output_path(output_dir: &Path, requested: &Path) -> Result<PathBuf, SnapmdError> {
    let name = requested
        .file_name()
        .ok_or_else(|| SnapmdError::InvalidOutputName(requested.display().to_string()))?;
    Ok(output_dir.join(name))
}

fn resolve_source(source: &Path) -> Result<PathBuf, SnapmdError> {
    let resolved = fs::canonicalize(source).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SnapmdError::SourceNotFound(source.to_path_buf()),
        _ => SnapmdError::io(source, e),
    })?;
    if !resolved.is_dir() {
        return Err(SnapmdError::NotADirectory(resolved));
    }
    Ok(resolved)
}

fn ensure_output_dir(dir: &Path) -> Result<(), SnapmdError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| SnapmdError::io(dir, e))?;
    info!("Created directory {}", dir.display());
    Ok(())
}

/// Creates a snapshot stamped with the current local time.
pub fn create_snapshot(request: &SnapshotRequest) -> Result<SnapshotOutcome, SnapmdError> {
    create_snapshot_at(request, &format_timestamp(&Local::now()))
}

/// Same as [`create_snapshot`] with a caller-supplied header timestamp.
///
/// Returns [`SnapshotOutcome::NoFiles`] without writing anything when the
/// scan finds no includable file.
pub fn create_snapshot_at(
    request: &SnapshotRequest,
    timestamp: &str,
) -> Result<SnapshotOutcome, SnapmdError> {
    let source = resolve_source(&request.source)?;
    ensure_output_dir(&request.output_dir)?;
    let requested = request
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_output_name(&request.source, &source)));
    let output_path = resolve_output_path(&request.output_dir, &requested)?;
    info!("Creating snapshot of {}", request.source.display());
    info!("Output file: {}", output_path.display());

    let tree = scan(&source, &request.options)?;
    let mut document = SnapshotDocument::new(&tree.root_name, timestamp);
    document.push_tree(&render_tree(&tree));

    let files = collect_files(&tree);
    info!("Found {} files", files.len());
    if files.is_empty() {
        warn!("No files to include in the snapshot");
        return Ok(SnapshotOutcome::NoFiles);
    }

    document.begin_contents();
    let mut failed = 0;
    for (i, entry) in files.iter().enumerate() {
        info!("Processing [{}/{}]: {}", i + 1, files.len(), entry.display_path());
        if !document.append_entry(entry) {
            failed += 1;
        }
    }
    if failed > 0 {
        warn!("{} files could not be read", failed);
    }

    let bytes = write_document(&document, &output_path)?;
    info!(
        "Snapshot written: {} ({} KB)",
        output_path.display(),
        bytes / 1024
    );
    Ok(SnapshotOutcome::Written {
        path: output_path,
        files: files.len(),
        bytes,
    })
}
