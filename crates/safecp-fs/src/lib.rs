//! Filesystem primitives for safecp
//!
//! Provides content digests, the hard-link-then-copy file primitive, and
//! validation of the source and destination roots.

pub mod checksum;
pub mod copy;
pub mod error;
pub mod meta;
pub mod path;

pub use checksum::compute_file_checksum;
pub use copy::{CopyOutcome, CopyStrategy, copy_file};
pub use error::{Error, Result};
pub use path::{TreeRoots, validate_root};
