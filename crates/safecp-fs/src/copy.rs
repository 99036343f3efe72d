//! File copy with a hard-link fast path
//!
//! A copy first tries to hard-link the source into place. When that is not
//! possible (different device, unsupported filesystem) the bytes are streamed
//! into a fresh destination file which is synced before it is closed.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use crate::meta::{kind_name, lookup, same_file};
use crate::{Error, Result};

/// How [`copy_file`] places content at the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyStrategy {
    /// Hard-link when possible, stream the contents otherwise.
    #[default]
    HardLinkOrCopy,
    /// Always stream the contents.
    CopyOnly,
}

/// What [`copy_file`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Source and destination were already the same file. Nothing was touched.
    AlreadySatisfied,
    /// The destination is a new hard link to the source.
    HardLinked,
    /// The contents were streamed into the destination.
    Copied,
}

/// Copy `src` to `dst`.
///
/// The source must be a regular file; symlinks, directories and devices are
/// rejected. An existing destination must also be a regular file, and if it
/// is already the same file as the source the copy succeeds without touching
/// anything.
///
/// # Errors
///
/// - [`Error::NonRegularSource`] / [`Error::NonRegularDestination`] for
///   entries that are not regular files
/// - [`Error::Io`] for any stat, open, read, write or sync failure. A
///   partially written destination is left in place.
pub fn copy_file(src: &Path, dst: &Path, strategy: CopyStrategy) -> Result<CopyOutcome> {
    let src_meta = fs::symlink_metadata(src).map_err(|e| Error::io(src, e))?;
    if !src_meta.file_type().is_file() {
        return Err(Error::NonRegularSource {
            path: src.to_path_buf(),
            kind: kind_name(&src_meta),
        });
    }

    if let Some(dst_meta) = lookup(dst)? {
        if !dst_meta.file_type().is_file() {
            return Err(Error::NonRegularDestination {
                path: dst.to_path_buf(),
                kind: kind_name(&dst_meta),
            });
        }
        if same_file(&src_meta, &dst_meta) {
            tracing::debug!(src = %src.display(), dst = %dst.display(), "Already the same file");
            return Ok(CopyOutcome::AlreadySatisfied);
        }
    }

    if strategy == CopyStrategy::HardLinkOrCopy {
        match fs::hard_link(src, dst) {
            Ok(()) => {
                tracing::debug!(src = %src.display(), dst = %dst.display(), "Hard-linked");
                return Ok(CopyOutcome::HardLinked);
            }
            Err(e) => {
                tracing::debug!(
                    src = %src.display(),
                    dst = %dst.display(),
                    error = %e,
                    "Hard link failed, falling back to content copy"
                );
            }
        }
    }

    copy_contents(src, dst)?;
    Ok(CopyOutcome::Copied)
}

/// Stream the contents of `src` into `dst`, creating or truncating `dst`.
///
/// The destination is synced to disk before returning; a sync failure is
/// reported rather than dropped.
pub fn copy_contents(src: &Path, dst: &Path) -> Result<u64> {
    let input = File::open(src).map_err(|e| Error::io(src, e))?;
    let mut reader = BufReader::new(input);

    let mut output = File::create(dst).map_err(|e| Error::io(dst, e))?;
    let written = io::copy(&mut reader, &mut output).map_err(|e| Error::io(dst, e))?;
    output.sync_all().map_err(|e| Error::io(dst, e))?;

    tracing::debug!(src = %src.display(), dst = %dst.display(), bytes = written, "Copied contents");
    Ok(written)
}
