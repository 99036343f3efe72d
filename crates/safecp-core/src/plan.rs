//! Plan types produced by the planner and consumed by the executor
//!
//! A [`Plan`] is an ordered list of [`Action`]s. It describes work still to be
//! done; nothing in it has happened yet. Actions appear in the pre-order of
//! the source tree walk, so every directory precedes its contents.

use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of a planned [`Action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    CreateDirectory,
    CopyFile,
}

/// A single unit of planned work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create `destination` (non-recursively) with the source directory's
    /// permission bits
    CreateDirectory { destination: PathBuf, permissions: u32 },
    /// Copy the file at `source` to `destination`
    CopyFile { source: PathBuf, destination: PathBuf },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::CreateDirectory { .. } => ActionKind::CreateDirectory,
            Self::CopyFile { .. } => ActionKind::CopyFile,
        }
    }

    /// Source path; directories are created, not copied, so they have none.
    pub fn source(&self) -> Option<&Path> {
        match self {
            Self::CreateDirectory { .. } => None,
            Self::CopyFile { source, .. } => Some(source),
        }
    }

    pub fn destination(&self) -> &Path {
        match self {
            Self::CreateDirectory { destination, .. } | Self::CopyFile { destination, .. } => {
                destination
            }
        }
    }

    /// Permission bits to apply; only directories carry them.
    pub fn permissions(&self) -> Option<u32> {
        match self {
            Self::CreateDirectory { permissions, .. } => Some(*permissions),
            Self::CopyFile { .. } => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDirectory {
                destination,
                permissions,
            } => write!(f, "Make dir:  {}, {:04o}", destination.display(), permissions),
            Self::CopyFile {
                source,
                destination,
            } => write!(
                f,
                "Copy file: {} -> {}",
                source.display(),
                destination.display()
            ),
        }
    }
}

/// Ordered, immutable sequence of [`Action`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    actions: Vec<Action>,
    verified: usize,
}

impl Plan {
    /// Create a plan from actions in application order.
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            actions,
            verified: 0,
        }
    }

    /// Record how many overlapping files were found identical while planning.
    pub fn with_verified(mut self, verified: usize) -> Self {
        self.verified = verified;
        self
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    /// Number of overlapping files whose digests matched.
    pub fn verified(&self) -> usize {
        self.verified
    }

    pub fn directories_to_create(&self) -> usize {
        self.count(ActionKind::CreateDirectory)
    }

    pub fn files_to_copy(&self) -> usize {
        self.count(ActionKind::CopyFile)
    }

    fn count(&self, kind: ActionKind) -> usize {
        self.actions.iter().filter(|a| a.kind() == kind).count()
    }
}

impl IntoIterator for Plan {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
