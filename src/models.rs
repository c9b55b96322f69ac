use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a resolved commit, kept after the clone is gone.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub id: String,
    pub author: String,
    pub time: DateTime<Utc>,
    pub summary: String,
}

impl CommitSummary {
    pub fn from_commit(commit: &git2::Commit<'_>) -> Self {
        let author = commit.author();
        let seconds = author.when().seconds();
        let time = Utc
            .timestamp_opt(seconds, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        CommitSummary {
            id: commit.id().to_string(),
            author: author.name().unwrap_or_default().to_string(),
            time,
            summary: commit.summary().unwrap_or_default().to_string(),
        }
    }
}

/// Destination paths of every file-level change between two commits.
///
/// Backed by an ordered set, so paths are unique and iterate in ascending
/// lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    paths: BTreeSet<String>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one file-level change. A change with no destination side
    /// (a deletion) contributes nothing.
    pub fn record(&mut self, destination: Option<&str>) {
        if let Some(path) = destination {
            self.paths.insert(path.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn into_sorted(self) -> Vec<String> {
        self.paths.into_iter().collect()
    }
}

impl<'a> FromIterator<Option<&'a str>> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = Option<&'a str>>>(iter: I) -> Self {
        let mut set = ChangeSet::new();
        for destination in iter {
            set.record(destination);
        }
        set
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub source_url: String,
    pub start: CommitSummary,
    pub finish: CommitSummary,
    pub files: Vec<String>,
}
