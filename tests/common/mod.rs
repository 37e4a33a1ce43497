//! Common test utilities for integration tests

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use git2::{Repository, Signature, Time};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use weekly_snippet::VersionControl;

/// Create a note tree from `(month, file, content)` triples
pub fn note_tree(notes: &[(&str, &str, &str)]) -> TempDir {
    let root = TempDir::new().unwrap();
    for (month, file, content) in notes {
        let dir = root.path().join(month);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
    }
    root
}

// git リポジトリの初期化
pub fn setup_test_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    (temp_dir, repo)
}

// 初期コミットを作成
pub fn create_initial_commit(repo: &Repository, root: &Path) {
    fs::write(root.join("readme.md"), "initial report\n").unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new("readme.md")).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    // Use a fixed time for signature to avoid CI issues
    let time = Time::new(1_700_000_000, 0);
    let signature = Signature::new("Test User", "test@example.com", &time).unwrap();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        "Initial commit",
        &tree,
        &[],
    )
    .unwrap();
}

/// Version control fake that records calls and can fail chosen steps
#[derive(Default)]
pub struct RecordingVcs {
    pub calls: RefCell<Vec<String>>,
    pub fail_stage: bool,
    pub fail_commit: bool,
    /// Report nothing to commit
    pub clean: bool,
}

impl VersionControl for RecordingVcs {
    fn stage_all(&self) -> Result<()> {
        self.calls.borrow_mut().push("add".to_string());
        if self.fail_stage {
            return Err(anyhow!("index locked"));
        }
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<bool> {
        self.calls.borrow_mut().push(format!("commit {}", message));
        if self.fail_commit {
            return Err(anyhow!("index is corrupt"));
        }
        Ok(!self.clean)
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("push {} {}", remote, branch));
        Ok(())
    }
}
