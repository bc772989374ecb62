//! Title check failures.

use serde::Serialize;
use thiserror::Error;

/// Reasons a pull-request title fails the check.
///
/// All variants are terminal and map to the same exit code.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TitleCheckError {
    /// No title argument was supplied.
    #[error("Did not get any pr title")]
    MissingTitle,

    /// The tags variable is unset, empty, or holds only blank lines.
    #[error("Did not get tags array")]
    MissingTags,

    /// The title does not start with any configured tag.
    #[error("Wrong title format. None of correct tags found in '{title}'")]
    NoTagMatched {
        /// The trimmed title that was checked.
        title: String,
    },
}

impl TitleCheckError {
    /// Process exit code for this failure.
    pub const fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the failure is caused by an absent input rather than a bad title.
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingTitle | Self::MissingTags)
    }
}
