use std::io::{self, Write};
use std::path::{Path, PathBuf};

use git2::build::RepoBuilder;
use git2::{Commit, Delta, Diff, DiffFindOptions, FetchOptions, Oid, Progress, RemoteCallbacks, Repository};
use tempfile::TempDir;

use crate::error::{GitChangesetError, Result};
use crate::models::ChangeSet;

const TEMP_DIR_PREFIX: &str = "git-changeset";
const CHECKOUT_DIR: &str = "checkout";

/// Clones repositories into throwaway workspaces.
pub struct GitCollector {
    show_progress: bool,
}

impl GitCollector {
    pub fn new(show_progress: bool) -> Self {
        GitCollector { show_progress }
    }

    /// Performs a full clone of `url` into a fresh temporary directory.
    ///
    /// The directory lives as long as the returned [`Workspace`].
    pub fn acquire(&self, url: &str) -> Result<Workspace> {
        let dir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()
            .map_err(GitChangesetError::TempDir)?;
        let target = dir.path().join(CHECKOUT_DIR);

        log::info!("Cloning {} into {}", url, target.display());

        let mut callbacks = RemoteCallbacks::new();
        if self.show_progress {
            callbacks.transfer_progress(|progress| {
                print_progress(&progress);
                true
            });
        }
        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);

        let repo = RepoBuilder::new()
            .fetch_options(fetch_options)
            .clone(url, &target)
            .map_err(|source| GitChangesetError::Clone {
                url: url.to_string(),
                source,
            })?;

        if self.show_progress {
            println!();
        }
        log::info!("Target directory name is {}", target.display());

        Ok(Workspace {
            repo,
            checkout: target,
            dir,
        })
    }
}

fn print_progress(progress: &Progress<'_>) {
    let mut stdout = io::stdout().lock();
    if progress.received_objects() < progress.total_objects() {
        let _ = write!(
            stdout,
            "\rReceiving objects: {}/{} ({} bytes)",
            progress.received_objects(),
            progress.total_objects(),
            progress.received_bytes()
        );
    } else if progress.total_deltas() > 0 {
        let _ = write!(
            stdout,
            "\rResolving deltas: {}/{}",
            progress.indexed_deltas(),
            progress.total_deltas()
        );
    }
    let _ = stdout.flush();
}

/// A cloned repository together with the temporary directory holding it.
///
/// Dropping the workspace deletes the directory.
pub struct Workspace {
    // Declared before `dir` so the handle is released before the files go.
    repo: Repository,
    checkout: PathBuf,
    dir: TempDir,
}

impl Workspace {
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Root of the temporary directory removed on drop.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn checkout(&self) -> &Path {
        &self.checkout
    }
}

/// Looks up the start and finish commits by their full hashes.
pub fn resolve_commits<'r>(
    repo: &'r Repository,
    start: &str,
    finish: &str,
) -> Result<(Commit<'r>, Commit<'r>)> {
    let start_commit = resolve_commit(repo, start)?;
    let finish_commit = resolve_commit(repo, finish)?;
    Ok((start_commit, finish_commit))
}

pub fn resolve_commit<'r>(repo: &'r Repository, revision: &str) -> Result<Commit<'r>> {
    let resolution_error = |source| GitChangesetError::Resolution {
        revision: revision.to_string(),
        source,
    };
    let oid = Oid::from_str(revision).map_err(resolution_error)?;
    let commit = repo.find_commit(oid).map_err(resolution_error)?;
    log::debug!("Resolved {} ({})", commit.id(), commit.summary().unwrap_or_default());
    Ok(commit)
}

/// Diffs the `start` tree against the `finish` tree with rename detection applied.
pub fn diff_commits<'r>(
    repo: &'r Repository,
    start: &Commit<'_>,
    finish: &Commit<'_>,
) -> Result<Diff<'r>> {
    let extraction_error = |source| GitChangesetError::Extraction {
        start: start.id().to_string(),
        finish: finish.id().to_string(),
        source,
    };

    let start_tree = start.tree().map_err(extraction_error)?;
    let finish_tree = finish.tree().map_err(extraction_error)?;
    let mut diff = repo
        .diff_tree_to_tree(Some(&start_tree), Some(&finish_tree), None)
        .map_err(extraction_error)?;

    let mut find_options = DiffFindOptions::new();
    find_options.renames(true);
    diff.find_similar(Some(&mut find_options))
        .map_err(extraction_error)?;
    Ok(diff)
}

/// Computes the destination paths of every change turning `start` into `finish`.
pub fn changed_files(repo: &Repository, start: &Commit<'_>, finish: &Commit<'_>) -> Result<ChangeSet> {
    let diff = diff_commits(repo, start, finish)?;

    // libgit2 fills in new_file for deletions too, so the status decides.
    let destinations: Vec<Option<String>> = diff
        .deltas()
        .map(|delta| match delta.status() {
            Delta::Deleted => None,
            _ => delta
                .new_file()
                .path()
                .map(|path| path.to_string_lossy().into_owned()),
        })
        .collect();

    let change_set: ChangeSet = destinations.iter().map(|d| d.as_deref()).collect();
    log::info!(
        "{} deltas between {} and {}, {} distinct destination paths",
        destinations.len(),
        start.id(),
        finish.id(),
        change_set.len()
    );
    Ok(change_set)
}
