//! Title check report and its rendering.

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::check::{TagList, TitleCheckError};

/// Outcome of a single title check.
#[derive(Debug, Clone, Serialize)]
pub struct TitleCheckReport {
    /// Trimmed title, absent when no title was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Parsed tags.
    pub tags: TagList,
    /// First tag the title starts with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_tag: Option<String>,
    /// Why the check failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TitleCheckError>,
    /// Whether the title passes.
    pub passes: bool,
}

impl TitleCheckReport {
    /// Creates a passing report.
    pub fn passed(title: &str, tags: TagList, matched_tag: String) -> Self {
        Self {
            title: Some(title.to_string()),
            tags,
            matched_tag: Some(matched_tag),
            error: None,
            passes: true,
        }
    }

    /// Creates a failing report.
    pub fn failed(title: Option<&str>, tags: TagList, error: TitleCheckError) -> Self {
        Self {
            title: title.map(ToString::to_string),
            tags,
            matched_tag: None,
            error: Some(error),
            passes: false,
        }
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        self.error.as_ref().map_or(0, TitleCheckError::exit_code)
    }

    /// Renders the report in the requested format.
    ///
    /// `quiet` only affects text output, where it drops the echo of the inputs.
    pub fn render(&self, format: OutputFormat, quiet: bool) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(quiet)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(self).context("Failed to serialize report to YAML")
            }
        }
    }

    /// Renders the human-readable console lines.
    pub fn render_text(&self, quiet: bool) -> String {
        let mut lines = Vec::new();

        if !quiet {
            if let Some(title) = &self.title {
                lines.push(format!("pr_title='{title}'"));
            }
            if !self.error.as_ref().is_some_and(TitleCheckError::is_missing_input) {
                lines.push(format!("tag_list='{}'", self.tags));
            }
        }

        match &self.error {
            Some(err) if err.is_missing_input() => lines.push(format!("FATAL: {err}")),
            Some(err) => lines.push(err.to_string()),
            None => {}
        }

        lines.join("\n")
    }
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
