//! Source clean-up before scanning

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// `\iffalse ... \fi`, shortest match, not nested
    static ref IFFALSE_RE: Regex = Regex::new(r"(?s)\\iffalse\b.*?\\fi\b").unwrap();
}

/// Remove every `\iffalse ... \fi` block.
///
/// Blocks do not nest: an inner `\iffalse` is swallowed and the first `\fi`
/// closes the outer block.
pub fn strip_false_blocks(input: &str) -> Cow<'_, str> {
    IFFALSE_RE.replace_all(input, "")
}
