//! CLI interface for check-pr-title.

use std::env;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use crate::check::{check_title, TAGS_ENV_VAR};
use crate::data::OutputFormat;

/// check-pr-title: validates a pull-request title against allowed prefix tags.
#[derive(Parser, Debug)]
#[command(name = "check-pr-title")]
#[command(
    about = "Checks that a pull-request title starts with one of the allowed tags",
    long_about = "Checks that a pull-request title starts with one of the allowed tags.\n\n\
                  Tags are read from a newline-separated environment variable (TAGS by \
                  default). Exits 0 when the title matches a tag and 1 otherwise."
)]
#[command(version)]
pub struct Cli {
    /// Pull-request title to validate.
    #[arg(value_name = "TITLE", allow_hyphen_values = true)]
    pub title: Option<String>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Only prints the verdict, without echoing the title and tags.
    #[arg(long)]
    pub quiet: bool,

    /// Environment variable holding the newline-separated tag list.
    #[arg(long, value_name = "NAME", default_value = TAGS_ENV_VAR)]
    pub tags_env: String,
}

impl Cli {
    /// Executes the check and returns the process exit code.
    pub fn execute(self) -> Result<i32> {
        let output_format: OutputFormat = self.format.parse().unwrap_or_else(|()| {
            tracing::warn!("Unknown output format {:?}, using text", self.format);
            OutputFormat::Text
        });

        let raw_tags = read_tags(&self.tags_env);
        let report = check_title(self.title.as_deref(), raw_tags.as_deref());

        let rendered = report.render(output_format, self.quiet)?;
        if !rendered.is_empty() {
            writeln!(std::io::stdout().lock(), "{rendered}")
                .context("Failed to write report to stdout")?;
        }

        Ok(report.exit_code())
    }
}

/// Reads the raw tag list from the environment.
///
/// A value that is not valid unicode is treated as unset.
fn read_tags(var: &str) -> Option<String> {
    match env::var(var) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!("Tags variable {var} unavailable: {err}");
            None
        }
    }
}
