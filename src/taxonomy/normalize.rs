//! Text normalization shared by the classifier (§4.3) and extractor (§4.4).
//!
//! Both components must normalize identically, or a phrase matched in
//! scoring could fail to match in extraction for the same input.

/// Lowercases, strips apostrophes, replaces non-alphanumerics with
/// spaces, and collapses whitespace.
///
/// # Examples
///
/// ```
/// use complexity_engine::taxonomy::normalize;
///
/// assert_eq!(normalize("I can't afford the GP!"), "i cant afford the gp");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}')
        .collect();

    let spaced: String = stripped
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { ' ' })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True if `word` appears as a standalone token in already-normalized
/// `haystack`. `word` must itself be a single token (no spaces).
#[must_use]
pub fn contains_whole_word(haystack: &str, word: &str) -> bool {
    haystack.split_whitespace().any(|token| token == word)
}

/// True if `phrase` (one or more whitespace-separated tokens) appears
/// as a contiguous run of tokens in already-normalized `haystack`.
#[must_use]
pub fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    let padded_haystack = format!(" {haystack} ");
    let padded_phrase = format!(" {phrase} ");
    padded_haystack.contains(&padded_phrase)
}

/// Counts whole-word occurrences of `word` in `haystack`.
#[must_use]
pub fn count_whole_word(haystack: &str, word: &str) -> usize {
    haystack.split_whitespace().filter(|token| *token == word).count()
}
