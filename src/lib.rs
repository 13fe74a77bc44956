//! # Snapmd
//!
//! `snapmd` turns a source folder into a single Markdown snapshot: a filtered
//! file tree followed by the contents of every included file, each in a fenced
//! block tagged for syntax highlighting.
//!
//! The folder is walked once. Names in the exclusion set and hidden names are
//! skipped at any depth, files are kept by extension (or when their name is
//! all upper case, like `README`), and files over the size limit are left out
//! of both the tree and the contents. File contents are decoded lossily:
//! invalid UTF-8 is replaced, never rejected.
//!
//! # Example
//!
//! ```no_run
//! use snapmd::{SnapshotBuilder, SnapshotOutcome, SnapshotRequest, create_snapshot};
//!
//! let options = SnapshotBuilder::new().max_depth(4).build();
//! let request = SnapshotRequest::new("src").output("src-snapshot.md").options(options);
//!
//! match create_snapshot(&request).expect("Failed to create snapshot") {
//!     SnapshotOutcome::Written { path, files, .. } => {
//!         println!("{} files written to {}", files, path.display());
//!     }
//!     SnapshotOutcome::NoFiles => println!("nothing to snapshot"),
//! }
//! ```

mod engine;
mod error;
mod filter;
mod language;
mod options;
pub mod output;
mod snapshot;
mod tree;
mod types;

pub use engine::{collect_files, scan};
pub use error::SnapmdError;
pub use filter::Filter;
pub use language::language_for;
pub use options::{
    DEFAULT_EXCLUDE_PATTERNS, DEFAULT_INCLUDE_EXTENSIONS, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_FILE_SIZE, SnapshotBuilder, SnapshotOptions,
};
pub use snapshot::{
    DEFAULT_OUTPUT_DIR, SnapshotRequest, create_snapshot, create_snapshot_at,
    default_output_name, resolve_output_path,
};
pub use tree::render_tree;
pub use types::{FsEntry, ScanStats, SnapshotOutcome, SnapshotTree, TreeNode};
