//! Allowed title prefixes.

use std::fmt;

use serde::Serialize;

/// Ordered list of non-empty title prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    /// Parses a newline-separated tag list.
    ///
    /// Every line is trimmed and lines left blank are dropped, so `"feat:\n\n fix: "`
    /// yields `["feat:", "fix:"]`. Order and duplicates are kept.
    pub fn parse(raw: &str) -> Self {
        let tags = raw
            .split('\n')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(ToString::to_string)
            .collect();
        Self { tags }
    }

    /// Returns `true` when no usable tag was configured.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Iterates over the tags in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Returns the first tag that `title` starts with (case-sensitive).
    pub fn find_prefix_of(&self, title: &str) -> Option<&str> {
        self.iter().find(|tag| title.starts_with(*tag))
    }
}

/// Quotes each tag, using double quotes for tags that contain an apostrophe.
impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if tag.contains('\'') && !tag.contains('"') {
                write!(f, "\"{tag}\"")?;
            } else {
                write!(f, "'{tag}'")?;
            }
        }
        write!(f, "]")
    }
}
