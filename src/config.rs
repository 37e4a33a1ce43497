//! Run configuration
//!
//! Settings come from built-in defaults, optionally overlaid by a TOML file
//! (`.weekly-snippet.toml` in the note root unless a path is given), and
//! finally by command line flags in `main`.
//!
//! ```toml
//! report = "readme.md"
//! remote = "origin"
//! branch = "master"
//! commit_prefix = "auto-refresh TODO Debt"
//! git = true
//! ```

use crate::error::ConfigError;
use crate::git_ops::DEFAULT_COMMIT_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the note root when no config path is given
pub const CONFIG_FILE_NAME: &str = ".weekly-snippet.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Report file, relative to the note root unless absolute
    pub report: PathBuf,
    /// Remote to push to
    pub remote: String,
    /// Branch to push
    pub branch: String,
    /// Commit message prefix, followed by the local timestamp
    pub commit_prefix: String,
    /// Stage, commit and push after writing the report
    pub git: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: PathBuf::from("readme.md"),
            remote: "origin".to_string(),
            branch: "master".to_string(),
            commit_prefix: DEFAULT_COMMIT_PREFIX.to_string(),
            git: true,
        }
    }
}

impl Config {
    /// Parse a config from TOML text; `path` is used for error reporting
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content, path)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given, else the root's config file if present, else defaults
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = root.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Report location resolved against the note root
    pub fn report_path(&self, root: &Path) -> PathBuf {
        if self.report.is_absolute() {
            self.report.clone()
        } else {
            root.join(&self.report)
        }
    }
}
