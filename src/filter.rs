//! Inclusion and exclusion rules shared by the whole pipeline.

use crate::options::SnapshotOptions;
use std::collections::BTreeSet;
use std::path::Path;

/// Name-based predicates built from a [`SnapshotOptions`].
///
/// The size limit is not part of the filter: it needs file metadata and is
/// applied by the traversal.
#[derive(Debug, Clone)]
pub struct Filter {
    include_extensions: BTreeSet<String>,
    exclude_patterns: BTreeSet<String>,
}

impl Filter {
    pub fn new(options: &SnapshotOptions) -> Self {
        Self {
            include_extensions: options.include_extensions.clone(),
            exclude_patterns: options.exclude_patterns.clone(),
        }
    }

    /// True for exact members of the exclusion set and for hidden names.
    pub fn is_excluded_name(&self, name: &str) -> bool {
        self.exclude_patterns.contains(name) || name.starts_with('.')
    }

    /// True if the extension is in the include set, or the name has no
    /// extension and is written in upper case (`README`, `LICENSE`).
    pub fn is_included_file(&self, name: &str) -> bool {
        match extension_of(name) {
            Some(ext) => self.include_extensions.contains(&ext),
            None => is_upper_case(name),
        }
    }
}

/// Lower-cased extension with its leading dot. A leading dot alone
/// (`.gitignore`) or a trailing dot (`notes.`) is not an extension.
pub(crate) fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

fn is_upper_case(name: &str) -> bool {
    let mut cased = false;
    for c in name.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
