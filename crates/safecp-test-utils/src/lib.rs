//! Shared test utilities for the safecp workspace.
//!
//! This crate provides standardised source/destination tree fixtures so crate
//! test suites don't each rebuild them. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`trees`]: [`TestTrees`] builder and [`TreeSnapshot`] for before/after
//!   comparisons

pub mod trees;

pub use trees::{TestTrees, TreeSnapshot};
