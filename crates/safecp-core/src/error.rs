//! Error types for safecp-core

use std::path::PathBuf;

/// Result type for safecp-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning or executing a merge
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An overlapping file differs between source and destination
    #[error(
        "Hashes are NOT the same: {source_digest} and {destination_digest}\n\
         Problematic files: {source_path} and {destination_path}. Bailing out!"
    )]
    ContentMismatch {
        source_path: PathBuf,
        destination_path: PathBuf,
        source_digest: String,
        destination_digest: String,
    },

    /// The source tree could not be walked
    #[error("Failed to walk source tree at {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Filesystem error from safecp-fs
    #[error(transparent)]
    Fs(#[from] safecp_fs::Error),

    /// Failure writing the action report
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a content mismatch detected during planning.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::ContentMismatch { .. })
    }
}
