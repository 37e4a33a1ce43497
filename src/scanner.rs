//! Single note file scanning
//!
//! A note is read line by line. Blank lines are ignored, a line starting with
//! `reference` ends the scan, and every other line is counted. Lines starting
//! with `TODO` are also filed into a priority bucket:
//!
//! ```text
//! TODO P0: write the weekly recap
//!       ^ priority digit at column 6, entry text after the first ':'
//! ```

use crate::error::{ScanError, TodoLineError};
use crate::tally::{Priority, Tally};
use crate::tokenizer::count_words;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Prefix marking the start of a note's reference section
pub const REFERENCE_MARKER: &str = "reference";

/// Prefix marking a TODO line
pub const TODO_MARKER: &str = "TODO";

/// Zero-based character column holding the priority digit
pub const PRIORITY_COLUMN: usize = 6;

/// Parse a `TODO` line into its priority and entry text
///
/// # Examples
/// ```
/// # use weekly_snippet::scanner::parse_todo_line;
/// # use weekly_snippet::Priority;
/// let (priority, entry) = parse_todo_line("TODO P1: read the book").unwrap();
/// assert_eq!(priority, Priority::P1);
/// assert_eq!(entry, "read the book");
/// ```
pub fn parse_todo_line(line: &str) -> Result<(Priority, String), TodoLineError> {
    let found = line
        .chars()
        .nth(PRIORITY_COLUMN)
        .ok_or(TodoLineError::MissingPriority {
            column: PRIORITY_COLUMN,
        })?;
    let priority = Priority::from_digit(found).ok_or(TodoLineError::InvalidPriority {
        column: PRIORITY_COLUMN,
        found,
    })?;

    let (_, entry) = line.split_once(':').ok_or(TodoLineError::MissingColon)?;
    Ok((priority, entry.trim().to_string()))
}

/// Scan note content from any buffered reader
///
/// `path` is used only for error reporting.
pub fn scan_reader<R: BufRead>(reader: R, path: &Path) -> Result<Tally, ScanError> {
    let mut tally = Tally::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ScanError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with(REFERENCE_MARKER) {
            break;
        }

        tally.words += count_words(&line);

        if line.starts_with(TODO_MARKER) {
            let (priority, entry) = parse_todo_line(&line).map_err(|source| ScanError::Todo {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })?;
            tally.todos.push(priority, entry);
        }
    }

    Ok(tally)
}

/// Scan a note file on disk
pub fn scan_file(path: &Path) -> Result<Tally, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::io(path, e))?;
    let tally = scan_reader(BufReader::new(file), path)?;
    debug!(
        file = %path.display(),
        words = tally.words,
        todos = tally.todos.len(),
        "scanned note"
    );
    Ok(tally)
}
