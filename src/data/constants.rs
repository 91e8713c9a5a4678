//! Fixed strings and character sets used by the emission policy.

/// Placeholder emitted for a simple math span in word-count mode
pub const MATHS_PLACEHOLDER: &str = "MATHS";

/// Placeholder for `\ref{...}`
pub const NUMBER_PLACEHOLDER: &str = "NUMBER";

/// Placeholder for `\autoref{...}`, which typesets as e.g. "Figure 3"
pub const REFTYPE_NUMBER_PLACEHOLDER: &str = "REFTYPE NUMBER";

/// Placeholder for `\textcite{...}`
pub const AUTHOR_PLACEHOLDER: &str = "AUTHOR";

/// Greek letters accepted in a "simple" math span.
///
/// Omicron and final sigma are not part of the set.
pub const GREEK_LETTERS: &str = "αβγδεζηθικλμνξπρστυφχψω";

/// Punctuation accepted in a "simple" math span besides ASCII alphanumerics
pub const MATH_SYMBOLS: &str = "_^{}+- ";

/// Environments whose whole body is dropped (floats and explicit opt-outs)
pub const IGNORED_ENVIRONMENTS: &[&str] = &["figure", "table", "nocount"];
