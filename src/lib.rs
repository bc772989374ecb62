//! # check-pr-title
//!
//! A CI gate that checks a pull-request title starts with one of a set of
//! allowed prefix tags.
//!
//! ## Quick Start
//!
//! ```rust
//! use check_pr_title::check::check_title;
//!
//! let report = check_title(Some("feat: add login"), Some("feat:\nfix:"));
//! assert!(report.passes);
//! assert_eq!(report.exit_code(), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod check;
pub mod cli;
pub mod data;

pub use crate::check::{check_title, TagList, TitleCheckError};
pub use crate::cli::Cli;
pub use crate::data::{OutputFormat, TitleCheckReport};

/// The current version of check-pr-title.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
