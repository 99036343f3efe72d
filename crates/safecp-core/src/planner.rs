//! Merge planning
//!
//! The planner walks the source tree top-down and compares every entry with
//! its counterpart under the destination root:
//!
//! - a directory with no counterpart is planned for creation
//! - a file with no counterpart is planned for copying
//! - a file with a counterpart is hashed on both sides; equal digests mean the
//!   file is already merged, different digests abort planning
//!
//! Planning never touches the destination. A mismatch or I/O failure is
//! returned before any plan exists, so nothing can have been executed.

use std::path::Path;

use safecp_fs::checksum::compute_file_checksum;
use safecp_fs::meta::{lookup, permission_bits};
use safecp_fs::TreeRoots;
use walkdir::{DirEntry, WalkDir};

use crate::plan::{Action, Plan};
use crate::{Error, Result};

/// Builds a [`Plan`] for merging one tree into another
pub struct Planner<'a> {
    roots: &'a TreeRoots,
}

impl<'a> Planner<'a> {
    pub fn new(roots: &'a TreeRoots) -> Self {
        Self { roots }
    }

    /// Walk the source tree and plan every action needed to merge it into the
    /// destination tree.
    ///
    /// Siblings are visited in file name order so the same trees always
    /// produce the same plan. Symlinks are not followed; they are planned as
    /// copies and rejected when the plan is executed.
    ///
    /// # Errors
    ///
    /// - [`Error::ContentMismatch`] if an overlapping file differs
    /// - [`Error::Walk`] / [`Error::Fs`] if any entry cannot be listed,
    ///   statted or hashed
    pub fn plan(&self) -> Result<Plan> {
        let mut actions = Vec::new();
        let mut verified = 0;

        let walker = WalkDir::new(self.roots.source())
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| Error::Walk {
                path: e
                    .path()
                    .unwrap_or_else(|| self.roots.source())
                    .to_path_buf(),
                source: e,
            })?;
            let destination = self.roots.destination_for(entry.path())?;

            if entry.file_type().is_dir() {
                if let Some(action) = self.plan_directory(&entry, &destination)? {
                    actions.push(action);
                }
            } else if let Some(action) = self.plan_file(&entry, &destination)? {
                actions.push(action);
            } else {
                verified += 1;
            }
        }

        let plan = Plan::new(actions).with_verified(verified);
        tracing::info!(
            directories = plan.directories_to_create(),
            files = plan.files_to_copy(),
            verified = plan.verified(),
            "Planned merge of {} into {}",
            self.roots.source().display(),
            self.roots.destination().display()
        );
        Ok(plan)
    }

    fn plan_directory(&self, entry: &DirEntry, destination: &Path) -> Result<Option<Action>> {
        if lookup(destination)?.is_some() {
            tracing::debug!(path = %destination.display(), "Directory exists");
            return Ok(None);
        }

        let meta = entry.metadata().map_err(|e| Error::Walk {
            path: entry.path().to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %destination.display(), "Directory missing");
        Ok(Some(Action::CreateDirectory {
            destination: destination.to_path_buf(),
            permissions: permission_bits(&meta),
        }))
    }

    fn plan_file(&self, entry: &DirEntry, destination: &Path) -> Result<Option<Action>> {
        let source = entry.path();
        if lookup(destination)?.is_none() {
            tracing::debug!(path = %destination.display(), "File missing");
            return Ok(Some(Action::CopyFile {
                source: source.to_path_buf(),
                destination: destination.to_path_buf(),
            }));
        }

        let source_digest = compute_file_checksum(source)?;
        let destination_digest = compute_file_checksum(destination)?;
        if source_digest != destination_digest {
            tracing::warn!(
                source = %source.display(),
                destination = %destination.display(),
                "Content mismatch"
            );
            return Err(Error::ContentMismatch {
                source_path: source.to_path_buf(),
                destination_path: destination.to_path_buf(),
                source_digest,
                destination_digest,
            });
        }

        tracing::debug!(path = %destination.display(), digest = %source_digest, "File verified");
        Ok(None)
    }
}

/// Plan the merge of `roots.source()` into `roots.destination()`.
///
/// See [`Planner::plan`].
pub fn plan(roots: &TreeRoots) -> Result<Plan> {
    Planner::new(roots).plan()
}
