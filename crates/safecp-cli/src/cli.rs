//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use safecp_core::{CopyStrategy, ExecuteOptions};

const COMMIT_WORD: &str = "--commit";

const NOTES: &str = "\
NOTE: never use trailing slashes for source_dir or target_dir.
NOTE: use --commit to execute (default is always dry run).
NOTE: files are compared by content digest when they exist in source and target;
      when the digests don't match the program bails out, always before
      making any changes to the filesystem.";

/// safecp - merge one directory tree into another, verifying overlapping files
#[derive(Parser, Debug)]
#[command(name = "safecp")]
#[command(author, version, about, long_about = None, after_help = NOTES)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory to merge from
    pub source_dir: PathBuf,

    /// Directory to merge into
    pub target_dir: PathBuf,

    /// Pass exactly `--commit` to apply the plan; anything else is a dry run
    #[arg(value_name = "--commit", allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Always copy file contents instead of hard-linking
    #[arg(long)]
    pub no_hardlink: bool,

    /// Words after the mode argument; any of them keeps the dry run
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Commit only when `--commit` directly follows the two directories and
    /// ends the command line.
    pub fn is_commit(&self) -> bool {
        self.mode.as_deref() == Some(COMMIT_WORD) && self.rest.is_empty()
    }

    /// Execution options selected on the command line.
    pub fn execute_options(&self) -> ExecuteOptions {
        let strategy = if self.no_hardlink {
            CopyStrategy::CopyOnly
        } else {
            CopyStrategy::HardLinkOrCopy
        };
        ExecuteOptions {
            commit: self.is_commit(),
            strategy,
        }
    }
}
