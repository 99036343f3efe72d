//! Merge planning and execution for safecp
//!
//! A merge runs in two strictly ordered phases:
//!
//! - **Planning** ([`planner`]): walk the source tree, compare it with the
//!   destination tree and produce a [`Plan`]. Overlapping files are compared
//!   by content digest and any difference aborts planning. The filesystem is
//!   only read.
//! - **Execution** ([`executor`]): replay the plan in order, either reporting
//!   each action (dry run) or reporting and applying it (commit).
//!
//! Because execution only ever starts from a complete plan, a content
//! mismatch anywhere in the tree is always detected before the first
//! mutation.
//!
//! ```text
//!                    safecp-cli
//!                        |
//!                   safecp-core
//!                        |
//!                    safecp-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use safecp_core::{ExecuteOptions, TreeRoots, execute, plan};
//!
//! fn merge() -> safecp_core::Result<()> {
//!     let roots = TreeRoots::new("incoming", "archive")?;
//!     let plan = plan(&roots)?;
//!     let report = execute(plan, ExecuteOptions::dry_run(), &mut std::io::stdout())?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod executor;
pub mod plan;
pub mod planner;

pub use error::{Error, Result};
pub use executor::{ExecuteOptions, ExecutionReport, execute};
pub use plan::{Action, ActionKind, Plan};
pub use planner::{Planner, plan};
pub use safecp_fs::{CopyStrategy, TreeRoots};
