//! Word and TODO tallies
//!
//! A [`Tally`] is produced for every note file and folded into per-month and
//! whole-tree tallies with [`Tally::merge`]. Merging adds word counts and
//! appends TODO entries bucket by bucket, keeping the left operand's entries
//! first, so the fold order decides the listing order in the report.

use std::fmt;

/// Priority bucket of a TODO entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    /// Will do in the following weeks
    P0,
    /// Will do before starting to learn other topics
    P1,
    /// One potential new topic
    P2,
}

impl Priority {
    /// All priorities in report order
    pub const ALL: [Priority; 3] = [Priority::P0, Priority::P1, Priority::P2];

    /// Parse the single digit used in `TODO` lines
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Priority::P0),
            '1' => Some(Priority::P1),
            '2' => Some(Priority::P2),
            _ => None,
        }
    }

    /// Legend line shown in the report's "Other Info" section
    pub fn legend(self) -> &'static str {
        match self {
            Priority::P0 => "will do in the following weeks",
            Priority::P1 => "will do before starting to learn other topics",
            Priority::P2 => "one potential new topic",
        }
    }

    fn index(self) -> usize {
        match self {
            Priority::P0 => 0,
            Priority::P1 => 1,
            Priority::P2 => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::P0 => f.write_str("P0"),
            Priority::P1 => f.write_str("P1"),
            Priority::P2 => f.write_str("P2"),
        }
    }
}

/// TODO entries grouped by priority, each bucket in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDebt {
    buckets: [Vec<String>; 3],
}

impl TodoDebt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the bucket for `priority`
    pub fn push(&mut self, priority: Priority, entry: impl Into<String>) {
        self.buckets[priority.index()].push(entry.into());
    }

    /// Entries of one bucket
    pub fn get(&self, priority: Priority) -> &[String] {
        &self.buckets[priority.index()]
    }

    /// Total number of entries across all buckets
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Append every bucket of `other` after the matching bucket of `self`
    pub fn extend(&mut self, other: TodoDebt) {
        for (mine, theirs) in self.buckets.iter_mut().zip(other.buckets) {
            mine.extend(theirs);
        }
    }
}

/// Word count and TODO debt of a file, a month, or the whole tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub words: usize,
    pub todos: TodoDebt,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combine two tallies, keeping `self`'s entries ahead of `other`'s
    pub fn merge(mut self, other: Tally) -> Tally {
        self.words += other.words;
        self.todos.extend(other.todos);
        self
    }
}

impl FromIterator<Tally> for Tally {
    fn from_iter<I: IntoIterator<Item = Tally>>(iter: I) -> Self {
        iter.into_iter().fold(Tally::new(), Tally::merge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(words: usize, entries: &[(Priority, &str)]) -> Tally {
        let mut todos = TodoDebt::new();
        for (priority, entry) in entries {
            todos.push(*priority, *entry);
        }
        Tally { words, todos }
    }

    #[test]
    fn test_priority_from_digit() {
        assert_eq!(Priority::from_digit('0'), Some(Priority::P0));
        assert_eq!(Priority::from_digit('1'), Some(Priority::P1));
        assert_eq!(Priority::from_digit('2'), Some(Priority::P2));
        assert_eq!(Priority::from_digit('3'), None);
        assert_eq!(Priority::from_digit('x'), None);
    }

    #[test]
    fn test_priority_display() {
        let labels: Vec<_> = Priority::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, ["P0", "P1", "P2"]);
    }

    #[test]
    fn test_merge_sums_and_concatenates() {
        let a = tally(5, &[(Priority::P0, "a0"), (Priority::P2, "a2")]);
        let b = tally(7, &[(Priority::P0, "b0"), (Priority::P1, "b1")]);

        let merged = a.merge(b);
        assert_eq!(merged.words, 12);
        assert_eq!(merged.todos.get(Priority::P0), ["a0", "b0"]);
        assert_eq!(merged.todos.get(Priority::P1), ["b1"]);
        assert_eq!(merged.todos.get(Priority::P2), ["a2"]);
        assert_eq!(merged.todos.len(), 4);
    }

    #[test]
    fn test_word_total_is_order_independent() {
        let a = tally(3, &[(Priority::P1, "a")]);
        let b = tally(4, &[(Priority::P1, "b")]);

        let ab = a.clone().merge(b.clone());
        let ba = b.merge(a);
        assert_eq!(ab.words, ba.words);
        assert_eq!(ab.todos.get(Priority::P1), ["a", "b"]);
        assert_eq!(ba.todos.get(Priority::P1), ["b", "a"]);
    }

    #[test]
    fn test_collect_folds_in_order() {
        let total: Tally = vec![
            tally(1, &[(Priority::P0, "first")]),
            tally(2, &[]),
            tally(3, &[(Priority::P0, "third")]),
        ]
        .into_iter()
        .collect();

        assert_eq!(total.words, 6);
        assert_eq!(total.todos.get(Priority::P0), ["first", "third"]);
    }

    #[test]
    fn test_empty_tally() {
        let empty: Tally = std::iter::empty().collect();
        assert_eq!(empty, Tally::new());
        assert!(empty.todos.is_empty());
    }
}
