//! [`TestTrees`] builder for merge test scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use safecp_fs::TreeRoots;
use safecp_fs::checksum::compute_file_checksum;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A temporary directory holding a `src` tree and a `dst` tree.
///
/// # Example
///
/// ```rust,no_run
/// use safecp_test_utils::TestTrees;
///
/// let trees = TestTrees::new();
/// trees.mkdir_source("a");
/// trees.write_source("a/x.txt", "hello");
/// trees.write_destination("b.txt", "world");
/// let roots = trees.roots();
/// ```
pub struct TestTrees {
    temp_dir: TempDir,
}

impl Default for TestTrees {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTrees {
    /// Create empty `src` and `dst` directories.
    pub fn new() -> Self {
        let trees = Self::with_missing_destination();
        fs::create_dir(trees.destination()).unwrap();
        trees
    }

    /// Create an empty `src` directory and no `dst` directory.
    pub fn with_missing_destination() -> Self {
        let trees = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        fs::create_dir(trees.source()).unwrap();
        trees
    }

    /// The temporary directory holding both trees.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source(&self) -> PathBuf {
        self.root().join("src")
    }

    pub fn destination(&self) -> PathBuf {
        self.root().join("dst")
    }

    /// [`TreeRoots`] pairing `src` with `dst`.
    pub fn roots(&self) -> TreeRoots {
        TreeRoots::new(self.source(), self.destination())
            .expect("TestTrees::roots: temp paths have no trailing separator")
    }

    pub fn mkdir_source(&self, path: &str) {
        fs::create_dir_all(self.source().join(path)).unwrap();
    }

    pub fn mkdir_destination(&self, path: &str) {
        fs::create_dir_all(self.destination().join(path)).unwrap();
    }

    /// Write a file under `src`, creating parent directories.
    pub fn write_source(&self, path: &str, content: &str) {
        write_with_parents(&self.source().join(path), content);
    }

    /// Write a file under `dst`, creating parent directories.
    pub fn write_destination(&self, path: &str, content: &str) {
        write_with_parents(&self.destination().join(path), content);
    }

    /// Read a file under `dst`.
    ///
    /// # Panics
    /// Panics with the full path if the file cannot be read.
    pub fn read_destination(&self, path: &str) -> String {
        let full_path = self.destination().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    pub fn snapshot_source(&self) -> TreeSnapshot {
        TreeSnapshot::capture(&self.source())
    }

    pub fn snapshot_destination(&self) -> TreeSnapshot {
        TreeSnapshot::capture(&self.destination())
    }

    /// Assert that every entry of `src` exists in `dst` with the same kind,
    /// and that every file has the same digest.
    ///
    /// # Panics
    /// Panics naming the first entry that is missing or differs.
    pub fn assert_destination_contains_source(&self) {
        let source = self.snapshot_source();
        let destination = self.snapshot_destination();
        for (path, entry) in &source.entries {
            match destination.entries.get(path) {
                Some(found) => assert_eq!(
                    found,
                    entry,
                    "Entry differs between trees: {}",
                    path.display()
                ),
                None => panic!("Expected entry in destination: {}", path.display()),
            }
        }
    }

    /// Assert that `path` (relative to `dst`) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_destination_missing(&self, path: &str) {
        let full_path = self.destination().join(path);
        assert!(
            !full_path.exists(),
            "Expected entry NOT to exist: {}",
            full_path.display()
        );
    }
}

fn write_with_parents(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// An entry recorded by [`TreeSnapshot`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotEntry {
    Directory,
    /// Regular file with its content digest
    File(String),
    Other,
}

/// Every entry below a root, keyed by path relative to that root.
///
/// Two snapshots compare equal when the trees hold the same paths with the
/// same kinds and file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSnapshot {
    pub entries: BTreeMap<PathBuf, SnapshotEntry>,
}

impl TreeSnapshot {
    /// Record the tree under `root`. A missing root yields an empty snapshot.
    pub fn capture(root: &Path) -> Self {
        let mut entries = BTreeMap::new();
        if !root.exists() {
            return Self { entries };
        }
        for entry in WalkDir::new(root).follow_links(false).min_depth(1) {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let file_type = entry.file_type();
            let recorded = if file_type.is_dir() {
                SnapshotEntry::Directory
            } else if file_type.is_file() {
                SnapshotEntry::File(compute_file_checksum(entry.path()).unwrap())
            } else {
                SnapshotEntry::Other
            };
            entries.insert(relative, recorded);
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
