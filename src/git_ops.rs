use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use git2::{IndexAddOption, Repository, Signature, Time};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of the commit message created on each refresh
pub const DEFAULT_COMMIT_PREFIX: &str = "auto-refresh TODO Debt";

/// Build the commit message for a refresh at `now`
pub fn commit_message(prefix: &str, now: NaiveDateTime) -> String {
    format!("{} {}", prefix, now.format("%Y-%m-%d %H:%M:%S"))
}

/// Commit message stamped with the current local time
pub fn commit_message_now(prefix: &str) -> String {
    commit_message(prefix, Local::now().naive_local())
}

/// Version control capability used by the refresh driver
pub trait VersionControl {
    /// Stage every change in the working tree, including deletions
    fn stage_all(&self) -> Result<()>;

    /// Commit the staged changes
    ///
    /// Returns `false` when there was nothing to commit.
    fn commit(&self, message: &str) -> Result<bool>;

    /// Push `branch` to `remote`
    fn push(&self, remote: &str, branch: &str) -> Result<()>;
}

/// Git operations backed by libgit2
pub struct GitOps {
    repo: Option<Repository>,
    /// Pathspec limiting staging to the note tree, relative to the workdir
    scope: String,
}

impl GitOps {
    /// Create a new GitOps instance by detecting if `root` is in a git repository
    pub fn new(root: &Path) -> Self {
        let repo = Self::find_repository(root);
        let scope = repo
            .as_ref()
            .and_then(|r| Self::scope_for(r, root))
            .unwrap_or_else(|| "*".to_string());
        Self { repo, scope }
    }

    /// Check if the note tree is under git version control
    pub fn is_git_managed(&self) -> bool {
        self.repo.is_some()
    }

    /// Find the git repository containing the given path
    fn find_repository(dir: &Path) -> Option<Repository> {
        Repository::discover(dir).ok()
    }

    /// Pathspec covering `root`, like running `git add .` from inside it
    fn scope_for(repo: &Repository, root: &Path) -> Option<String> {
        let workdir = repo.workdir()?.canonicalize().ok()?;
        let root: PathBuf = root.canonicalize().ok()?;
        let relative = root.strip_prefix(&workdir).ok()?;
        if relative.as_os_str().is_empty() {
            Some("*".to_string())
        } else {
            // libgit2 pathspecs always use forward slashes
            Some(relative.to_str()?.replace('\\', "/"))
        }
    }

    fn repo(&self) -> Option<&Repository> {
        if self.repo.is_none() {
            debug!("not a git repository, skipping");
        }
        self.repo.as_ref()
    }

    /// Get or create a git signature for commits
    fn get_signature(repo: &Repository) -> Result<Signature<'static>> {
        // Try to use the configured user name and email
        let config = repo.config()?;

        let name = config
            .get_string("user.name")
            .unwrap_or_else(|_| "weekly-snippet".to_string());

        let email = config
            .get_string("user.email")
            .unwrap_or_else(|_| "weekly-snippet@localhost".to_string());

        match Signature::now(&name, &email) {
            Ok(sig) => Ok(sig),
            Err(_) => {
                // Fallback to a fixed time if now() fails (e.g., on some CI systems)
                let time = Time::new(1_700_000_000, 0);
                Signature::new(&name, &email, &time)
                    .context("Failed to create signature with fixed time")
            }
        }
    }
}

impl VersionControl for GitOps {
    fn stage_all(&self) -> Result<()> {
        let Some(repo) = self.repo() else {
            return Ok(());
        };

        let mut index = repo.index().context("Failed to open index")?;
        let pathspec = [self.scope.as_str()];
        index
            .add_all(pathspec.iter(), IndexAddOption::DEFAULT, None)
            .context("Failed to stage changes")?;
        // Picks up deleted files, which add_all leaves alone
        index
            .update_all(pathspec.iter(), None)
            .context("Failed to stage deletions")?;
        index.write()?;

        debug!(scope = %self.scope, "staged working tree");
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<bool> {
        let Some(repo) = self.repo() else {
            return Ok(false);
        };

        let mut index = repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        // Get the current HEAD commit
        let parent_commit = match repo.head() {
            Ok(head) => {
                let oid = head.target().context("HEAD has no target")?;
                Some(repo.find_commit(oid)?)
            }
            Err(_) => None, // Initial commit
        };

        if let Some(parent) = &parent_commit
            && parent.tree_id() == tree_id
        {
            info!("nothing to commit, working tree clean");
            return Ok(false);
        }

        let signature = Self::get_signature(repo)?;
        let parents: Vec<_> = parent_commit.iter().collect();

        let oid = repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        info!(commit = %oid, "committed: {}", message);
        Ok(true)
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        let Some(repo) = self.repo() else {
            return Ok(());
        };

        let mut origin = repo
            .find_remote(remote)
            .with_context(|| format!("Failed to find remote '{}'", remote))?;

        let refspec = format!("refs/heads/{0}:refs/heads/{0}", branch);
        origin
            .push(&[&refspec], None)
            .with_context(|| format!("Failed to push {} to {}", branch, remote))?;

        info!(remote, branch, "pushed");
        Ok(())
    }
}
