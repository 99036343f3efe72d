//! Merge command implementation
//!
//! Plans the whole merge first and only then executes it, so a content
//! mismatch is reported before anything on disk changes.

use std::io::Write;
use std::path::Path;

use safecp_core::{ExecuteOptions, ExecutionReport, TreeRoots, execute, plan};

use crate::error::Result;

/// Printed before a commit run's action lines.
pub const COMMIT_BANNER: &str = "Going to commit changes this time! No dry run!";

/// Run the merge of `source` into `target`, reporting to `out`.
///
/// Writes the commit banner (commit mode only), one line per planned action,
/// then a summary line.
pub fn run_merge(
    source: &Path,
    target: &Path,
    options: ExecuteOptions,
    out: &mut impl Write,
) -> Result<ExecutionReport> {
    if options.commit {
        writeln!(out, "{COMMIT_BANNER}")?;
    }

    let roots = TreeRoots::new(source, target)?;
    tracing::debug!(
        source = %roots.source().display(),
        target = %roots.destination().display(),
        commit = options.commit,
        "Planning merge"
    );

    let plan = plan(&roots)?;
    let report = execute(plan, options, out)?;
    writeln!(out, "{report}")?;
    Ok(report)
}
