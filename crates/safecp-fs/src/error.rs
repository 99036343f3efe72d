//! Error types for safecp-fs

use std::path::PathBuf;

/// Result type for safecp-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in safecp-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot copy non-regular source file {path} ({kind})")]
    NonRegularSource { path: PathBuf, kind: &'static str },

    #[error("Cannot copy over non-regular destination file {path} ({kind})")]
    NonRegularDestination { path: PathBuf, kind: &'static str },

    #[error("Do not use a trailing slash when specifying directories: {path}")]
    TrailingSeparator { path: PathBuf },

    #[error("Directory argument must not be empty")]
    EmptyRoot,

    #[error("Path {path} is not inside root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path the error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. }
            | Self::NonRegularSource { path, .. }
            | Self::NonRegularDestination { path, .. }
            | Self::TrailingSeparator { path }
            | Self::OutsideRoot { path, .. } => Some(path),
            Self::EmptyRoot => None,
        }
    }

    /// Whether this error comes from a bad command-line root argument.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::TrailingSeparator { .. } | Self::EmptyRoot)
    }
}
