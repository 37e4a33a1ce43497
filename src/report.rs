//! Snippet report rendering
//!
//! The report is rendered into a string first and written in a single call,
//! so a failed scan leaves the previous report untouched.

use crate::tally::{Priority, Tally};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const TITLE: &str = "## Personal Learning Weekly Snippet";

pub const OVERVIEW: &str = "This is a personal snippet for weekly recap and self-improvement only. Cannot guarantee 100% correct.";

/// Render the full report text for a tally
pub fn render_report(tally: &Tally) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push_str("\n\n### Overview\n");
    out.push_str(OVERVIEW);
    out.push_str("\n\n### TODO Debt\n");

    for priority in Priority::ALL {
        out.push_str(&format!("#### {}\n", priority));
        for entry in tally.todos.get(priority) {
            out.push_str(&format!("- {}\n", entry));
        }
    }

    out.push_str("### Other Info\n");
    out.push_str(&format!("Total words: {}\n", tally.words));
    for priority in Priority::ALL {
        out.push_str(&format!("{}: {}\n", priority, priority.legend()));
    }
    out
}

/// Replace the report file's content
pub fn write_report(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write report {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tally::TodoDebt;
    use tempfile::TempDir;

    #[test]
    fn test_render_full_layout() {
        let mut todos = TodoDebt::new();
        todos.push(Priority::P0, "write spec");
        todos.push(Priority::P0, "review notes");
        todos.push(Priority::P2, "learn zig");
        let tally = Tally { words: 42, todos };

        let expected = "\
## Personal Learning Weekly Snippet

### Overview
This is a personal snippet for weekly recap and self-improvement only. Cannot guarantee 100% correct.

### TODO Debt
#### P0
- write spec
- review notes
#### P1
#### P2
- learn zig
### Other Info
Total words: 42
P0: will do in the following weeks
P1: will do before starting to learn other topics
P2: one potential new topic
";
        assert_eq!(render_report(&tally), expected);
    }

    #[test]
    fn test_render_empty_tally() {
        let text = render_report(&Tally::new());
        assert!(text.contains("#### P0\n#### P1\n#### P2\n### Other Info\n"));
        assert!(text.contains("Total words: 0\n"));
    }

    #[test]
    fn test_write_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("readme.md");
        fs::write(&path, "old content that is much longer than the new one").unwrap();

        write_report(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
