//! Line normalization and word counting

/// Characters treated as word separators in addition to whitespace
pub const SEPARATORS: [char; 8] = ['-', '.', ',', '\n', '`', '(', ')', '/'];

/// Replace every separator with a space and lowercase the result
pub fn normalize_line(line: &str) -> String {
    line.chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Count the words in a single line
///
/// # Examples
/// ```
/// # use weekly_snippet::tokenizer::count_words;
/// assert_eq!(count_words("Finish-the, report.\n"), 3);
/// assert_eq!(count_words("--(...)--"), 0);
/// ```
pub fn count_words(line: &str) -> usize {
    normalize_line(line).split_whitespace().count()
}
