//! Emission policy
//!
//! Decides, per output mode, what a closed math span or special macro turns
//! into: its literal text, a fixed placeholder, or nothing at all.

use fxhash::FxHashSet;
use std::fmt;

use super::mode::SpecialMacro;
use crate::data::{
    AUTHOR_PLACEHOLDER, GREEK_LETTERS, MATHS_PLACEHOLDER, MATH_SYMBOLS, NUMBER_PLACEHOLDER,
    REFTYPE_NUMBER_PLACEHOLDER,
};

/// What the stripped text is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Readable prose for proofreading
    #[default]
    Plain,
    /// Prose whose word count approximates the typeset document
    WordCount,
    /// Prose meant to be read aloud
    TextToSpeech,
}

/// Fixed stand-in for content whose wording does not matter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Maths,
    Number,
    RefTypeNumber,
    Author,
}

impl Placeholder {
    pub fn as_str(self) -> &'static str {
        match self {
            Placeholder::Maths => MATHS_PLACEHOLDER,
            Placeholder::Number => NUMBER_PLACEHOLDER,
            Placeholder::RefTypeNumber => REFTYPE_NUMBER_PLACEHOLDER,
            Placeholder::Author => AUTHOR_PLACEHOLDER,
        }
    }
}

/// A unit of output text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Placeholder(Placeholder),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Text(s) => s,
            Token::Placeholder(p) => p.as_str(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Characters a math span may consist of and still count as "simple"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathAllowList {
    chars: FxHashSet<char>,
}

impl Default for MathAllowList {
    fn default() -> Self {
        let ascii = ('a'..='z').chain('A'..='Z').chain('0'..='9');
        Self::from_chars(
            ascii
                .chain(MATH_SYMBOLS.chars())
                .chain(GREEK_LETTERS.chars()),
        )
    }
}

impl MathAllowList {
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Extend the list with every character of `extra`
    pub fn with_chars(mut self, extra: &str) -> Self {
        self.chars.extend(extra.chars());
        self
    }

    /// Remove every character of `chars` from the list
    pub fn without_chars(mut self, chars: &str) -> Self {
        for c in chars.chars() {
            self.chars.remove(&c);
        }
        self
    }

    pub fn allows(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn is_simple(&self, math: &str) -> bool {
        math.chars().all(|c| self.allows(c))
    }
}

/// Output-mode dependent decisions for math spans and special macros
#[derive(Debug, Clone, Default)]
pub struct EmissionPolicy {
    pub output_mode: OutputMode,
    pub math_allow: MathAllowList,
}

impl EmissionPolicy {
    pub fn new(output_mode: OutputMode) -> Self {
        Self {
            output_mode,
            math_allow: MathAllowList::default(),
        }
    }

    pub fn with_math_allow_list(mut self, math_allow: MathAllowList) -> Self {
        self.math_allow = math_allow;
        self
    }

    /// A math span is kept only if it is simple; the raw buffer is tested
    /// as-is, never re-lexed.
    pub fn classify_math(&self, raw: &str) -> Option<Token> {
        if !self.math_allow.is_simple(raw) {
            return None;
        }
        match self.output_mode {
            OutputMode::WordCount => Some(Token::Placeholder(Placeholder::Maths)),
            OutputMode::Plain | OutputMode::TextToSpeech => Some(Token::Text(raw.to_string())),
        }
    }

    /// `grouped` is the macro argument after context replay
    pub fn special_macro(&self, special: SpecialMacro, grouped: String) -> Option<Token> {
        if self.output_mode == OutputMode::TextToSpeech {
            return match special {
                SpecialMacro::Label => None,
                _ => Some(Token::Text(grouped)),
            };
        }

        match special {
            SpecialMacro::Ref => Some(Token::Placeholder(Placeholder::Number)),
            SpecialMacro::Autoref => Some(Token::Placeholder(Placeholder::RefTypeNumber)),
            SpecialMacro::Textcite => Some(Token::Placeholder(Placeholder::Author)),
            SpecialMacro::Autocite | SpecialMacro::Label | SpecialMacro::Footnote => None,
        }
    }
}
