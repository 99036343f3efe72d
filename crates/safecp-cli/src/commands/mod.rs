//! Command implementations for safecp-cli

pub mod merge;

pub use merge::run_merge;
