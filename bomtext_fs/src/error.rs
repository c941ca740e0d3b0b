use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by text file sessions and readers.
///
/// Every variant names the file and the operation that failed.
#[derive(Debug, Error)]
pub enum FileTextError {
    /// Operation attempted outside the state it requires
    #[error("file not opened - can't {op} '{}'", .path.display())]
    NotOpen { path: PathBuf, op: &'static str },

    /// Underlying stream failure on open, probe, read or write
    #[error("I/O error during {op} on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        op: &'static str,
        #[source]
        source: io::Error,
    },

    /// Encoding the backend cannot produce, or text it cannot represent
    #[error("unsupported encoding during {op} on '{}': {detail}", .path.display())]
    UnsupportedEncoding {
        path: PathBuf,
        op: &'static str,
        detail: String,
    },

    /// Rejected caller input
    #[error("invalid argument for {op}: {reason}")]
    InvalidArgument { op: &'static str, reason: String },
}

impl FileTextError {
    pub(crate) fn not_open(path: &Path, op: &'static str) -> Self {
        FileTextError::NotOpen {
            path: path.to_path_buf(),
            op,
        }
    }

    pub(crate) fn io<'a>(
        path: &'a Path,
        op: &'static str,
    ) -> impl FnOnce(io::Error) -> Self + 'a {
        move |source| FileTextError::Io {
            path: path.to_path_buf(),
            op,
            source,
        }
    }

    /// Name of the failed operation.
    pub fn op(&self) -> &'static str {
        match self {
            FileTextError::NotOpen { op, .. }
            | FileTextError::Io { op, .. }
            | FileTextError::UnsupportedEncoding { op, .. }
            | FileTextError::InvalidArgument { op, .. } => op,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            FileTextError::NotOpen { path, .. }
            | FileTextError::Io { path, .. }
            | FileTextError::UnsupportedEncoding { path, .. } => Some(path),
            FileTextError::InvalidArgument { .. } => None,
        }
    }
}

/// Result type for text file operations
pub type FileTextResult<T> = Result<T, FileTextError>;
