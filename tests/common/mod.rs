//! Fixture repositories built on disk with git2.
//!
//! Each integration test file compiles as a separate crate, so not every
//! helper is used everywhere.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use git2::{IndexAddOption, Repository, Signature};
use tempfile::TempDir;

/// A non-bare repository in a temporary directory, removed on drop.
pub struct FixtureRepo {
    repo: Repository,
    dir: TempDir,
}

impl FixtureRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init repository");
        Self { repo, dir }
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// Local path usable as a clone URL.
    pub fn url(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, contents).expect("Failed to write file");
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.dir.path().join(name)).expect("Failed to remove file");
    }

    pub fn rename(&self, from: &str, to: &str) {
        let target = self.dir.path().join(to);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::rename(self.dir.path().join(from), target).expect("Failed to rename file");
    }

    /// Stages the whole working tree, deletions included, and commits it on HEAD.
    /// Returns the full commit hash.
    pub fn commit(&self, message: &str) -> String {
        let mut index = self.repo.index().expect("Failed to open index");
        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .expect("Failed to stage files");
        index
            .update_all(["*"].iter(), None)
            .expect("Failed to stage deletions");
        index.write().expect("Failed to write index");

        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");
        let signature = Signature::now("Fixture", "fixture@example.com").expect("Failed to build signature");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .expect("Failed to commit")
            .to_string()
    }
}
