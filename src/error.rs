use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DirTreeError {
    #[error("Directory not found: {}", path.display())]
    PathNotFound { path: PathBuf },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Serialization failed: {0}")]
    Serialize(String),
}
impl DirTreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DirTreeError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn not_found(path: impl Into<PathBuf>) -> Self {
        DirTreeError::PathNotFound { path: path.into() }
    }
    /// The path the failure is attached to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            DirTreeError::PathNotFound { path } | DirTreeError::Io { path, .. } => Some(path),
            DirTreeError::Serialize(_) => None,
        }
    }
}
