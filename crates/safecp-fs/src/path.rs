//! Source and destination roots, and mapping paths between them

use std::path::{Path, PathBuf, is_separator};

use crate::{Error, Result};

/// Reject a root directory argument that ends in a path separator.
///
/// Roots are substituted textually when mapping source paths into the
/// destination, so `src/` and `src` must not both be accepted.
pub fn validate_root(path: &Path) -> Result<()> {
    let text = path.as_os_str().to_string_lossy();
    match text.chars().last() {
        None => Err(Error::EmptyRoot),
        Some(c) if is_separator(c) => Err(Error::TrailingSeparator {
            path: path.to_path_buf(),
        }),
        Some(_) => Ok(()),
    }
}

/// The pair of directory trees taking part in a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRoots {
    source: PathBuf,
    destination: PathBuf,
}

impl TreeRoots {
    /// Validate both roots and pair them up.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let destination = destination.into();
        validate_root(&source)?;
        validate_root(&destination)?;
        Ok(Self {
            source,
            destination,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Path of `source_path` relative to the source root.
    ///
    /// The source root itself maps to the empty path.
    pub fn relative<'a>(&self, source_path: &'a Path) -> Result<&'a Path> {
        source_path
            .strip_prefix(&self.source)
            .map_err(|_| Error::OutsideRoot {
                path: source_path.to_path_buf(),
                root: self.source.clone(),
            })
    }

    /// Candidate destination path for an entry of the source tree.
    pub fn destination_for(&self, source_path: &Path) -> Result<PathBuf> {
        let relative = self.relative(source_path)?;
        if relative.as_os_str().is_empty() {
            Ok(self.destination.clone())
        } else {
            Ok(self.destination.join(relative))
        }
    }
}
