//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, RunOptions};
use crate::error::Result;

/// Top-level CLI parser for `git-changeset`.
#[derive(Debug, Parser)]
#[command(
    name = "git-changeset",
    version,
    about = "List the files changed between two revisions of a Git repository"
)]
pub struct Cli {
    /// URL (or local path) of the repository to clone.
    #[arg(long, required_unless_present = "config")]
    pub url: Option<String>,

    /// Full hash of the start revision.
    #[arg(long, required_unless_present = "config")]
    pub start: Option<String>,

    /// Full hash of the finish revision.
    #[arg(long, required_unless_present = "config")]
    pub finish: Option<String>,

    /// JSON file with `source_url`, `start` and `finish`.
    #[arg(long, conflicts_with_all = ["url", "start", "finish"])]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not print clone progress.
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn to_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_file(path),
            None => Config::new(
                self.url.as_deref().unwrap_or_default(),
                self.start.as_deref().unwrap_or_default(),
                self.finish.as_deref().unwrap_or_default(),
            ),
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            show_progress: !self.quiet,
        }
    }
}
