//! Typed archive errors.

use std::io;
use std::path::{Path, PathBuf};

/// Failure while compressing a path into an archive.
#[derive(Debug)]
pub enum ArchiveError {
    /// The source path, or the directory the archive should land in, does not exist.
    NotFound { path: PathBuf },
    /// The source could not be read or the archive could not be written.
    PermissionDenied { path: PathBuf, detail: String },
    /// Any other failure while building the archive.
    Archive { detail: String },
}

impl ArchiveError {
    /// Classify an I/O error raised while working on `path`.
    pub(crate) fn from_io(err: &io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
                detail: err.to_string(),
            },
            _ => Self::Archive {
                detail: format!("{}: {err}", path.display()),
            },
        }
    }
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "{} not found", path.display()),
            Self::PermissionDenied { path, detail } => {
                write!(f, "permission denied for {}: {detail}", path.display())
            }
            Self::Archive { detail } => write!(f, "archive error: {detail}"),
        }
    }
}

impl std::error::Error for ArchiveError {}
