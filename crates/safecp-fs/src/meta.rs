//! Metadata helpers: entry lookup, permission bits, and file identity

use std::fs::{self, Metadata};
use std::io::ErrorKind;
use std::path::Path;

use crate::{Error, Result};

/// Stat `path` without following a final symlink.
///
/// Returns `Ok(None)` when nothing exists at `path`. Every other failure is an
/// error: a path that cannot be statted is never treated as missing.
pub fn lookup(path: &Path) -> Result<Option<Metadata>> {
    match fs::symlink_metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Permission bits to carry from a source directory to its copy.
#[cfg(unix)]
pub fn permission_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o7777
}

/// Permission bits to carry from a source directory to its copy.
#[cfg(not(unix))]
pub fn permission_bits(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o555
    } else {
        0o755
    }
}

/// Short human-readable name for the kind of entry `meta` describes.
pub fn kind_name(meta: &Metadata) -> &'static str {
    let file_type = meta.file_type();
    if file_type.is_file() {
        return "regular file";
    }
    if file_type.is_dir() {
        return "directory";
    }
    if file_type.is_symlink() {
        return "symlink";
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if file_type.is_block_device() {
            return "block device";
        }
        if file_type.is_char_device() {
            return "character device";
        }
        if file_type.is_fifo() {
            return "fifo";
        }
        if file_type.is_socket() {
            return "socket";
        }
    }
    "special file"
}

/// Whether two entries are the same underlying file.
#[cfg(unix)]
pub fn same_file(a: &Metadata, b: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.dev() == b.dev() && a.ino() == b.ino()
}

/// Whether two entries are the same underlying file.
///
/// File identity is not exposed on this platform, so nothing compares equal.
#[cfg(not(unix))]
pub fn same_file(_a: &Metadata, _b: &Metadata) -> bool {
    false
}
