use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GitChangesetError, Result};

/// Inputs for one run: where to clone from and which two revisions to compare.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_url: String,
    pub start: String,
    pub finish: String,
}

impl Config {
    pub fn new(source_url: &str, start: &str, finish: &str) -> Result<Self> {
        let config = Config {
            source_url: source_url.to_string(),
            start: start.to_string(),
            finish: finish.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON file holding `source_url`, `start` and `finish`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("source_url", &self.source_url),
            ("start", &self.start),
            ("finish", &self.finish),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(GitChangesetError::Config(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }
}

/// Per-run switches that do not change what is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub show_progress: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions { show_progress: true }
    }
}
