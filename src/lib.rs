//! Clone a repository, resolve two revisions and list the files changed
//! between them.

use std::io::Write;

pub mod cli;
pub mod config;
pub mod error;
pub mod git_collector;
pub mod models;

pub use crate::config::{Config, RunOptions};
pub use crate::error::{GitChangesetError, Result};
pub use crate::git_collector::{changed_files, diff_commits, resolve_commit, resolve_commits, GitCollector, Workspace};
pub use crate::models::{ChangeSet, CommitSummary, Report};

const SEPARATOR: &str = "-------------------------------------------------------------------------";

/// Clones `config.source_url`, diffs `start` against `finish` and returns the report.
///
/// The clone is deleted before this returns, whether or not it succeeded.
pub fn run(config: &Config, options: &RunOptions) -> Result<Report> {
    let workspace = GitCollector::new(options.show_progress).acquire(&config.source_url)?;
    let repo = workspace.repository();

    let (start_commit, finish_commit) = resolve_commits(repo, &config.start, &config.finish)?;
    let start = CommitSummary::from_commit(&start_commit);
    let finish = CommitSummary::from_commit(&finish_commit);
    log::info!("Start commit {} authored {}", start.id, start.time);
    log::info!("Finish commit {} authored {}", finish.id, finish.time);

    let files = changed_files(repo, &start_commit, &finish_commit)?.into_sorted();

    Ok(Report {
        source_url: config.source_url.clone(),
        start,
        finish,
        files,
    })
}

/// Writes the separator line followed by one path per line.
pub fn write_text<W: Write>(report: &Report, mut out: W) -> Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    for file in &report.files {
        writeln!(out, "{}", file)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(report: &Report, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}
