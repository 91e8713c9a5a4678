//! Stripping options

use super::emission::{EmissionPolicy, MathAllowList, OutputMode};

/// Options for a stripping run
#[derive(Debug, Clone)]
pub struct StripOptions {
    /// Treat the whole input as document body (no preamble expected)
    /// Default: false
    pub document: bool,

    /// What the output is for
    /// Default: `OutputMode::Plain`
    pub output_mode: OutputMode,

    /// Characters a math span may contain and still be kept
    pub math_allow: MathAllowList,

    /// Fail on unterminated constructs instead of warning
    /// Default: false
    pub strict: bool,

    /// Remove `\iffalse ... \fi` blocks before scanning
    /// Default: true
    pub strip_iffalse: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            document: false,
            output_mode: OutputMode::Plain,
            math_allow: MathAllowList::default(),
            strict: false,
            strip_iffalse: true,
        }
    }
}

impl StripOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for counting words: simple math counts as one word
    pub fn word_count() -> Self {
        Self {
            output_mode: OutputMode::WordCount,
            ..Self::default()
        }
    }

    /// Options for text-to-speech: references are spoken, footnotes read out
    pub fn text_to_speech() -> Self {
        Self {
            output_mode: OutputMode::TextToSpeech,
            ..Self::default()
        }
    }

    /// Options for a fragment without `\begin{document}`
    pub fn document() -> Self {
        Self {
            document: true,
            ..Self::default()
        }
    }

    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    pub fn with_document(mut self, document: bool) -> Self {
        self.document = document;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_math_allow_list(mut self, math_allow: MathAllowList) -> Self {
        self.math_allow = math_allow;
        self
    }

    /// The emission policy these options describe
    pub fn policy(&self) -> EmissionPolicy {
        EmissionPolicy::new(self.output_mode).with_math_allow_list(self.math_allow.clone())
    }
}
