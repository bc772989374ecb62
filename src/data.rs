//! Data types produced by the title check.

pub mod report;

pub use report::{OutputFormat, TitleCheckReport};
