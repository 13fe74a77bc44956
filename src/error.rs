use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SnapmdError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Source folder {0} does not exist")]
    SourceNotFound(PathBuf),
    #[error("Source path {0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("Invalid output name: {0}")]
    InvalidOutputName(String),
}
impl SnapmdError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapmdError::Io {
            path: path.into(),
            source,
        }
    }
}
