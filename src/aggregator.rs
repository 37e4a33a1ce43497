//! Month and tree aggregation
//!
//! The note tree has two levels: the root holds month directories and each
//! month directory holds note files named `<prefix>-<index>.<ext>`. Notes are
//! scanned in numeric index order within a month, months in name order, and
//! the resulting tallies are folded together.

use crate::error::ScanError;
use crate::scanner::scan_file;
use crate::tally::Tally;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extract the numeric index from a note file name
///
/// The index is the second `-`-separated segment with its extension removed,
/// so `week-12.md` and `note-12.txt` both yield 12.
///
/// # Examples
/// ```
/// # use weekly_snippet::aggregator::note_index;
/// assert_eq!(note_index("week-3.md").unwrap(), 3);
/// assert!(note_index("summary.md").is_err());
/// ```
pub fn note_index(file_name: &str) -> Result<u64, ScanError> {
    let err = || ScanError::NoteIndex {
        name: file_name.to_string(),
    };

    let segment = file_name.split('-').nth(1).ok_or_else(err)?;
    let stem = match segment.rfind('.') {
        Some(dot) => &segment[..dot],
        None => segment,
    };
    stem.parse::<u64>().map_err(|_| err())
}

fn utf8_name(path: &Path) -> Result<&str, ScanError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ScanError::NonUtf8Name {
            path: path.to_path_buf(),
        })
}

/// List the note files of a month in processing order
///
/// Only regular files directly inside `dir` are returned; nested directories
/// are ignored.
pub fn month_notes(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut notes = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))? {
        let entry = entry.map_err(|e| ScanError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let index = note_index(utf8_name(&path)?)?;
        notes.push((index, path));
    }

    notes.sort();
    Ok(notes.into_iter().map(|(_, path)| path).collect())
}

/// List the month directories under `root`, sorted by name
///
/// Directories whose name starts with `.` are skipped.
pub fn month_dirs(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut months = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| ScanError::io(root, e))? {
        let entry = entry.map_err(|e| ScanError::io(root, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if utf8_name(&path)?.starts_with('.') {
            continue;
        }
        months.push(path);
    }

    months.sort();
    Ok(months)
}

/// Scan every note of one month directory
pub fn aggregate_month(dir: &Path) -> Result<Tally, ScanError> {
    let tally = month_notes(dir)?
        .iter()
        .map(|note| scan_file(note))
        .collect::<Result<Tally, _>>()?;

    debug!(
        month = %dir.display(),
        words = tally.words,
        todos = tally.todos.len(),
        "aggregated month"
    );
    Ok(tally)
}

/// Scan the whole note tree rooted at `root`
pub fn aggregate_tree(root: &Path) -> Result<Tally, ScanError> {
    month_dirs(root)?
        .iter()
        .map(|month| aggregate_month(month))
        .collect()
}
