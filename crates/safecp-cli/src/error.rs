//! Error types for safecp-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit status for a content mismatch or filesystem failure
pub const EXIT_FAILURE: i32 = 1;

/// Exit status for bad command-line arguments, matching clap's own
pub const EXIT_USAGE: i32 = 2;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from safecp-core
    #[error(transparent)]
    Core(#[from] safecp_core::Error),

    /// Error from safecp-fs
    #[error(transparent)]
    Fs(#[from] safecp_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// Bad directory arguments exit with [`EXIT_USAGE`]; everything else,
    /// content mismatches included, exits with [`EXIT_FAILURE`].
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fs(e) if e.is_usage() => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
