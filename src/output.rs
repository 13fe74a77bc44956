//! Markdown document assembly for snapshots.
//!
//! The document is built in memory in three parts (header, tree section,
//! contents section) and written to disk in one call. Headings are kept in
//! Russian to match existing snapshot files.

use crate::error::SnapmdError;
use crate::language::language_for;
use crate::types::FsEntry;
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Timestamp format used in the document header, e.g. `07.03.2025 14:05:09`.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// An in-memory snapshot document. Sections must be pushed in order:
/// [`push_tree`](Self::push_tree), [`begin_contents`](Self::begin_contents),
/// then any number of file blocks.
#[derive(Debug, Clone)]
pub struct SnapshotDocument {
    buf: String,
}

impl SnapshotDocument {
    /// Starts a document with the title and generation time.
    pub fn new(source_name: &str, timestamp: &str) -> Self {
        let mut buf = String::with_capacity(16 * 1024);
        let _ = write!(
            buf,
            "# Снапшот папки {}\n\n*Создано: {}*\n\n",
            source_name, timestamp
        );
        Self { buf }
    }

    /// Appends the fenced tree diagram followed by the section separator.
    pub fn push_tree(&mut self, tree: &str) {
        self.buf.push_str("## Структура файлов\n\n```\n");
        self.buf.push_str(tree);
        if !tree.is_empty() && !tree.ends_with('\n') {
            self.buf.push('\n');
        }
        self.buf.push_str("```\n\n---\n\n");
    }

    pub fn begin_contents(&mut self) {
        self.buf.push_str("## Содержимое файлов\n\n");
    }

    /// Appends one file's content as a fenced block tagged with `language`.
    pub fn push_file(&mut self, path: &str, language: &str, content: &str) {
        let _ = write!(self.buf, "### {}\n```{}\n", path, language);
        self.buf.push_str(content);
        self.buf.push_str("\n```\n\n");
    }

    /// Appends a heading with an inline note instead of content.
    pub fn push_read_error(&mut self, path: &str, error: &dyn Display) {
        let _ = write!(self.buf, "### {}\n*Ошибка чтения файла: {}*\n\n", path, error);
    }

    /// Reads `entry` and appends its block. A read failure is logged and
    /// recorded in the document; it never aborts the snapshot.
    pub fn append_entry(&mut self, entry: &FsEntry) -> bool {
        let path = entry.display_path();
        match read_file_lossy(&entry.path) {
            Ok(content) => {
                self.push_file(&path, language_for(&entry.name), &content);
                true
            }
            Err(e) => {
                warn!("Failed to read file {}: {}", entry.path.display(), e);
                self.push_read_error(&path, &e);
                false
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Reads a file as text. Invalid UTF-8 sequences are replaced with U+FFFD,
/// so the result is lossy for non-text input.
pub fn read_file_lossy(path: &Path) -> Result<String, SnapmdError> {
    let bytes = fs::read(path).map_err(|e| SnapmdError::io(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Writes the document in one call and returns the number of bytes written.
pub fn write_document(
    document: &SnapshotDocument,
    path: impl AsRef<Path>,
) -> Result<u64, SnapmdError> {
    let path = path.as_ref();
    fs::write(path, document.as_str()).map_err(|e| SnapmdError::io(path, e))?;
    Ok(document.as_str().len() as u64)
}
