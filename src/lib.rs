//! # texprose
//!
//! Strip LaTeX markup down to the prose underneath, for proofreading, word
//! counting or reading aloud.
//!
//! ## Features
//!
//! - **Mode-aware scanning**: a stack of scanning modes keeps math, comments,
//!   floats and prose apart
//! - **Context replay**: braces are unwrapped by re-scanning their contents
//!   in the surrounding context, however deeply they nest
//! - **Output modes**: plain text, word counting placeholders, text-to-speech
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ```rust
//! use texprose::{strip_latex, strip_latex_with_options, count_words, StripOptions};
//!
//! let text = strip_latex(r"\begin{document}Hello, \emph{world}!\end{document}").unwrap();
//! assert_eq!(text, "Hello, world!");
//!
//! let output = strip_latex_with_options(
//!     r"We have $x^2$ by \textcite{knuth}.",
//!     &StripOptions::word_count().with_document(true),
//! )
//! .unwrap();
//! assert_eq!(output.content, "We have MATHS by AUTHOR.");
//! assert_eq!(count_words(&output.content), 5);
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// Core stripping modules
pub mod core;

/// Data layer - static tables and constants
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::{
    clean_output, count_words, strip_false_blocks, Automaton, EmissionPolicy, MathAllowList, Mode,
    ModeKind, ModeTable, OutputMode, Placeholder, SpecialMacro, StripOptions, Token,
};

pub use data::constants;
pub use data::symbols;

pub use utils::error::{StripError, StripOutput, StripResult, StripWarning};
pub use utils::location::Location;

lazy_static! {
    static ref BEGIN_DOCUMENT_RE: Regex = Regex::new(r"\\begin\s*\{\s*document\s*\}").unwrap();
}

/// Strip a complete LaTeX document with default options
///
/// Only the body between `\begin{document}` and `\end{document}` produces
/// output.
pub fn strip_latex(input: &str) -> StripResult<String> {
    strip_latex_with_options(input, &StripOptions::default()).map(|out| out.content)
}

/// Strip LaTeX with custom options
///
/// # Returns
/// The cleaned prose together with any warnings. Fails on an illegal
/// character, or on an unterminated construct in strict mode.
pub fn strip_latex_with_options(input: &str, options: &StripOptions) -> StripResult<StripOutput> {
    let source = if options.strip_iffalse {
        strip_false_blocks(input)
    } else {
        Cow::Borrowed(input)
    };

    let policy = options.policy();
    let mut automaton = Automaton::new(ModeTable::standard(), &policy).strict(options.strict);
    if options.document {
        automaton = automaton.with_document();
    }

    let tokens = automaton.run(&source)?;
    let joined: String = tokens.iter().map(Token::as_str).collect();

    let mut warnings = automaton.take_warnings();
    if !options.document && !source.trim().is_empty() && !BEGIN_DOCUMENT_RE.is_match(&source) {
        warnings.push(
            StripWarning::new("no \\begin{document} found, so the input produced no text")
                .with_suggestion("enable document mode to strip a fragment"),
        );
    }

    Ok(StripOutput::with_warnings(clean_output(&joined), warnings))
}
