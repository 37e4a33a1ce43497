//! Weekly Snippet Library
//!
//! Scans a tree of weekly note files, tallies words and prioritized TODO
//! lines, regenerates the snippet report and commits it.
//!
//! # Architecture
//!
//! The library is a small pipeline of pure steps followed by I/O glue:
//! - **Scanning**: `tokenizer` counts words per line, `scanner` turns one note
//!   into a [`Tally`], `aggregator` folds notes into months and months into
//!   the whole tree
//! - **Reporting**: `report` renders a tally into the snippet report
//! - **Version control**: `git_ops` exposes the [`VersionControl`] capability
//!   and its libgit2 implementation [`GitOps`]
//!
//! # Example
//!
//! ```no_run
//! use weekly_snippet::{Config, GitOps, refresh};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let root = Path::new(".");
//!     let config = Config::discover(root, None)?;
//!     let summary = refresh(root, &config, &GitOps::new(root))?;
//!     println!("{} words", summary.tally.words);
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod git_ops;
pub mod report;
pub mod scanner;
pub mod tally;
pub mod tokenizer;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// Re-export commonly used types
pub use aggregator::aggregate_tree;
pub use config::Config;
pub use error::{ConfigError, ScanError, TodoLineError};
pub use git_ops::{GitOps, VersionControl, commit_message, commit_message_now};
pub use report::render_report;
pub use tally::{Priority, Tally, TodoDebt};

/// Which version control steps succeeded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GitOutcome {
    pub staged: bool,
    /// A new commit was created; `false` on failure or when nothing changed
    pub committed: bool,
    pub pushed: bool,
}

/// Result of a full refresh
#[derive(Debug)]
pub struct RunSummary {
    pub tally: Tally,
    pub report_path: PathBuf,
    /// `None` when version control was disabled
    pub git: Option<GitOutcome>,
}

fn attempt<T>(step: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("git {} failed: {:#}", step, e);
            None
        }
    }
}

/// Stage, commit and push, attempting every step even after a failure
///
/// Failures are logged and reported in the outcome, never returned.
pub fn sync(vcs: &dyn VersionControl, config: &Config, message: &str) -> GitOutcome {
    GitOutcome {
        staged: attempt("add", vcs.stage_all()).is_some(),
        committed: attempt("commit", vcs.commit(message)).unwrap_or(false),
        pushed: attempt("push", vcs.push(&config.remote, &config.branch)).is_some(),
    }
}

/// Scan the whole note tree, naming the root in any error
pub fn scan_tree(root: &Path) -> Result<Tally> {
    aggregate_tree(root).with_context(|| format!("Failed to scan notes under {}", root.display()))
}

/// Render the report `refresh` would write, without touching any file
pub fn preview(root: &Path, config: &Config) -> Result<String> {
    let tally = scan_tree(root)?;
    info!(
        report = %config.report_path(root).display(),
        words = tally.words,
        "dry run, report not written"
    );
    Ok(render_report(&tally))
}

/// Scan the tree at `root`, rewrite the report and sync it with version control
///
/// A scan failure aborts before the report is touched.
pub fn refresh(root: &Path, config: &Config, vcs: &dyn VersionControl) -> Result<RunSummary> {
    let tally = scan_tree(root)?;

    let report_path = config.report_path(root);
    report::write_report(&report_path, &render_report(&tally))?;
    info!(
        report = %report_path.display(),
        words = tally.words,
        p0 = tally.todos.get(Priority::P0).len(),
        p1 = tally.todos.get(Priority::P1).len(),
        p2 = tally.todos.get(Priority::P2).len(),
        "report refreshed"
    );

    let git = config
        .git
        .then(|| sync(vcs, config, &commit_message_now(&config.commit_prefix)));

    Ok(RunSummary {
        tally,
        report_path,
        git,
    })
}
