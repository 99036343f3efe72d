//! SHA-256 content digests
//!
//! Digests are rendered as lowercase hex and compared as plain strings. Two
//! files are treated as equal when their digests are equal.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::{Error, Result};

/// Compute the SHA-256 digest of in-memory content.
pub fn compute_content_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Compute the SHA-256 digest of everything readable from `reader`.
pub fn compute_reader_checksum(reader: &mut impl Read) -> io::Result<String> {
    let mut hasher = Sha256::new();
    io::copy(reader, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Compute the SHA-256 digest of a file's contents.
///
/// The file is streamed through the hasher, never loaded whole.
///
/// # Errors
///
/// Returns [`Error::Io`] naming `path` if the file cannot be opened or read.
pub fn compute_file_checksum(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);
    compute_reader_checksum(&mut reader).map_err(|e| Error::io(path, e))
}
