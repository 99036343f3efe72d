//! Plan execution
//!
//! The executor replays a [`Plan`] in order. Every action is reported as a
//! line on the output sink; in commit mode it is also applied. The first
//! failure stops execution. Nothing already applied is undone.

use std::fmt;
use std::fs::DirBuilder;
use std::io::Write;
use std::path::Path;

use safecp_fs::copy::{CopyOutcome, CopyStrategy, copy_file};

use crate::plan::{Action, Plan};
use crate::Result;

/// Options controlling how a plan is executed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Apply the actions. When false, actions are only reported.
    pub commit: bool,
    /// How files are placed at their destination
    pub strategy: CopyStrategy,
}

impl ExecuteOptions {
    pub fn dry_run() -> Self {
        Self::default()
    }

    pub fn commit() -> Self {
        Self {
            commit: true,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: CopyStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Summary of an executed (or dry-run) plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Whether actions were applied
    pub committed: bool,
    /// Directories created, or that would be created
    pub directories: usize,
    /// Files copied, or that would be copied
    pub files: usize,
    /// Files placed by hard link
    pub hard_linked: usize,
    /// Files placed by streaming their contents
    pub content_copied: usize,
    /// Copies found already satisfied by an existing link
    pub already_satisfied: usize,
    /// Overlapping files verified identical during planning
    pub verified: usize,
}

impl ExecutionReport {
    fn record_copy(&mut self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::AlreadySatisfied => self.already_satisfied += 1,
            CopyOutcome::HardLinked => self.hard_linked += 1,
            CopyOutcome::Copied => self.content_copied += 1,
        }
    }
}

impl fmt::Display for ExecutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.committed {
            write!(
                f,
                "Done: created {} directories, copied {} files ({} hard-linked, {} already linked); {} existing files verified",
                self.directories,
                self.files,
                self.hard_linked,
                self.already_satisfied,
                self.verified
            )
        } else {
            write!(
                f,
                "Dry run: would create {} directories and copy {} files; {} existing files verified",
                self.directories, self.files, self.verified
            )
        }
    }
}

/// Replay `plan`, writing one report line per action to `out`.
///
/// In dry-run mode nothing on disk changes. In commit mode directories are
/// created non-recursively, relying on the plan's parent-first order, and
/// files are copied with `options.strategy`.
///
/// # Errors
///
/// Returns the first filesystem failure, or a failure writing to `out`.
pub fn execute(plan: Plan, options: ExecuteOptions, out: &mut impl Write) -> Result<ExecutionReport> {
    let mut report = ExecutionReport {
        committed: options.commit,
        verified: plan.verified(),
        ..ExecutionReport::default()
    };

    for action in plan {
        writeln!(out, "{action}")?;
        match &action {
            Action::CreateDirectory {
                destination,
                permissions,
            } => {
                if options.commit {
                    create_directory(destination, *permissions)?;
                }
                report.directories += 1;
            }
            Action::CopyFile {
                source,
                destination,
            } => {
                if options.commit {
                    let outcome = copy_file(source, destination, options.strategy)?;
                    report.record_copy(outcome);
                }
                report.files += 1;
            }
        }
    }

    tracing::info!(
        committed = report.committed,
        directories = report.directories,
        files = report.files,
        "Executed plan"
    );
    Ok(report)
}

fn create_directory(path: &Path, permissions: u32) -> Result<()> {
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(permissions);
    }

    builder
        .create(path)
        .map_err(|e| safecp_fs::Error::io(path, e))?;
    tracing::debug!(path = %path.display(), "Created directory with mode {permissions:04o}");
    Ok(())
}
