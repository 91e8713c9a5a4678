//! Whitespace clean-up of the joined token stream

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SPACE_BEFORE_PUNCT_RE: Regex = Regex::new(r"\s+([,.!?])").unwrap();
    static ref WHITESPACE_RUN_RE: Regex = Regex::new(r"(\s)\s+").unwrap();
}

/// Tidy stripped text: drop whitespace before `,.!?`, collapse each
/// whitespace run to its first character, then trim.
pub fn clean_output(text: &str) -> String {
    let text = SPACE_BEFORE_PUNCT_RE.replace_all(text, "$1");
    let text = WHITESPACE_RUN_RE.replace_all(&text, "$1");
    text.trim().to_string()
}

/// Number of whitespace-delimited words
///
/// Unlike counting spaces plus one, empty text counts 0 and words split by
/// newlines or tabs are counted too.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
