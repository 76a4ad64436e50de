use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Categories of file loading failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The file does not exist
    NotFound,
    /// The process may not read the file
    PermissionDenied,
    /// The file is not valid UTF-8
    Decode,
    /// Any other I/O failure
    Io,
}

/// A failure to read an AGENTS.md file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Get the error category.
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::NotFound { .. } => LoadErrorKind::NotFound,
            Self::PermissionDenied { .. } => LoadErrorKind::PermissionDenied,
            Self::Decode { .. } => LoadErrorKind::Decode,
            Self::Io { .. } => LoadErrorKind::Io,
        }
    }

    /// The path that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Decode { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}

/// A violated invariant when constructing a [`Document`](crate::Document)
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("project_name must not be empty")]
    EmptyProjectName,

    #[error("extra section heading must not be empty")]
    EmptySectionHeading,

    #[error("extra section heading '{0}' names a canonical section")]
    ReservedSectionHeading(String),
}

/// Failure to encode or decode the exported key/value tree.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("imported document is invalid: {0}")]
    Document(#[from] DocumentError),
}
