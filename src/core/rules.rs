//! Mode table
//!
//! The static registry of scanning rules. Each rule pairs a scope (which
//! modes it is eligible in) with an anchored pattern and an action. The
//! automaton tries every eligible rule at the cursor and keeps the longest
//! match; ties go to the rule declared first, so the table is ordered from
//! most specific (escapes, compound triggers) to most general (single
//! characters).

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use super::mode::ModeKind;
use crate::data::IGNORED_ENVIRONMENTS;
use crate::utils::error::{StripError, StripResult};

/// Brace arguments directly after `\begin{..}`. Openers that push a mode
/// absorb them so they are never shorter than `begin_environment`.
const TRAILING_ARGS: &str = r"(?:\{[^}\n]*\})*";

const MATH: &[ModeKind] = &[ModeKind::InlineMath, ModeKind::DisplayMath];

/// Modes in which LaTeX structure is not interpreted
const OPAQUE: &[ModeKind] = &[
    ModeKind::Comment,
    ModeKind::IgnoredEnv,
    ModeKind::InlineMath,
    ModeKind::DisplayMath,
];

const RAW_CAPTURE: &[ModeKind] = &[
    ModeKind::Group,
    ModeKind::Intertext,
    ModeKind::SpecialMacro,
];

const PROSE: &[ModeKind] = &[
    ModeKind::Document,
    ModeKind::Group,
    ModeKind::Intertext,
    ModeKind::SpecialMacro,
];

/// Which modes a rule is eligible in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Any,
    In(&'static [ModeKind]),
    AnyExcept(&'static [ModeKind]),
}

impl Scope {
    pub fn admits(&self, kind: ModeKind) -> bool {
        match self {
            Scope::Any => true,
            Scope::In(kinds) => kinds.contains(&kind),
            Scope::AnyExcept(kinds) => !kinds.contains(&kind),
        }
    }
}

/// What a matched rule does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Normal text: buffered, emitted or dropped depending on the mode
    Emit,
    /// No output; a replayed capture keeps the raw text for its replay
    Discard,
    /// `\%`, `\$`, `\{`, `\}`: the character after the backslash
    Escape,
    /// Backslash plus one non-letter, looked up in the control symbol table
    Symbol,
    Push(ModeKind),
    /// Push a special macro named by capture group 1
    PushSpecialMacro,
    /// Pop the top mode and run its exit behaviour
    Exit,
}

/// A single scanning rule
pub struct Rule {
    pub name: &'static str,
    pub scope: Scope,
    pub action: Action,
    source: String,
    pattern: Regex,
}

impl Rule {
    /// Compile a rule; the pattern is anchored at the cursor.
    pub fn new(
        name: &'static str,
        scope: Scope,
        pattern: &str,
        action: Action,
    ) -> StripResult<Self> {
        let regex = Regex::new(&format!("^(?:{})", pattern))
            .map_err(|e| StripError::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self {
            name,
            scope,
            action,
            source: pattern.to_string(),
            pattern: regex,
        })
    }

    /// Length of the match at the start of `rest`, if any
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.pattern.find(rest).map(|m| m.end())
    }

    /// Capture group `index` of the match at the start of `rest`
    pub fn capture<'s>(&self, rest: &'s str, index: usize) -> Option<&'s str> {
        self.pattern
            .captures(rest)
            .and_then(|caps| caps.get(index))
            .map(|m| m.as_str())
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("pattern", &self.source)
            .field("action", &self.action)
            .finish()
    }
}

/// The winning rule at a cursor position
#[derive(Debug, Clone, Copy)]
pub struct RuleMatch<'t> {
    pub rule: &'t Rule,
    pub len: usize,
}

/// Ordered rule registry shared by every automaton instance
#[derive(Debug)]
pub struct ModeTable {
    rules: Vec<Rule>,
}

impl ModeTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The LaTeX stripping table
    pub fn standard() -> &'static ModeTable {
        &STANDARD_TABLE
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Longest non-empty match among the rules admitted in `kind`; the
    /// earlier declaration wins a tie.
    pub fn longest_match(&self, kind: ModeKind, rest: &str) -> Option<RuleMatch<'_>> {
        let mut best: Option<RuleMatch<'_>> = None;
        for rule in self.rules.iter().filter(|r| r.scope.admits(kind)) {
            let Some(len) = rule.match_len(rest) else {
                continue;
            };
            if len == 0 {
                continue;
            }
            if best.map_or(true, |b| len > b.len) {
                best = Some(RuleMatch { rule, len });
            }
        }
        best
    }
}

fn standard_rules() -> StripResult<Vec<Rule>> {
    use Action::*;
    use ModeKind as K;

    let ignored = IGNORED_ENVIRONMENTS.join("|");

    Ok(vec![
        // Comments swallow the rest of the line, newline included
        Rule::new("comment_body", Scope::In(&[K::Comment]), r"[^\n]+", Discard)?,
        Rule::new("comment_end", Scope::In(&[K::Comment]), r"\n", Exit)?,
        // Escapes come before anything that reacts to the bare character
        Rule::new("escape_percent", Scope::Any, r"\\%", Escape)?,
        Rule::new("escape_brace", Scope::Any, r"\\[{}]", Escape)?,
        Rule::new("escape_dollar", Scope::Any, r"\\\$", Escape)?,
        Rule::new(
            "control_symbol",
            Scope::AnyExcept(&[K::Comment, K::InlineMath, K::DisplayMath]),
            r"\\[^a-zA-Z\n]",
            Symbol,
        )?,
        Rule::new("comment_start", Scope::Any, r"%", Push(K::Comment))?,
        // Document body
        Rule::new(
            "begin_document",
            Scope::In(&[K::Initial]),
            r"\\begin\s*\{\s*document\s*\}",
            Push(K::Document),
        )?,
        Rule::new(
            "end_document",
            Scope::In(&[K::Document]),
            r"\\end\s*\{\s*document\s*\}",
            Exit,
        )?,
        // Math
        Rule::new(
            "display_math_open",
            Scope::In(&[K::Document]),
            r"\$\$",
            Push(K::DisplayMath),
        )?,
        Rule::new(
            "inline_math_open",
            Scope::In(&[K::Document]),
            r"\$",
            Push(K::InlineMath),
        )?,
        Rule::new("display_math_close", Scope::In(&[K::DisplayMath]), r"\$\$", Exit)?,
        Rule::new("inline_math_close", Scope::In(&[K::InlineMath]), r"\$", Exit)?,
        Rule::new("math_control_word", Scope::In(MATH), r"\\[a-zA-Z]+", Emit)?,
        Rule::new("math_brace", Scope::In(MATH), r"[{}]", Discard)?,
        Rule::new("math_newline", Scope::In(MATH), r"\n", Discard)?,
        Rule::new("math_char", Scope::In(MATH), r".", Emit)?,
        // Aligned equations, with prose allowed back in through \intertext
        Rule::new(
            "begin_align",
            Scope::In(&[K::Document]),
            &format!(r"\\begin\s*\{{\s*align\*?\s*\}}{}", TRAILING_ARGS),
            Push(K::Align),
        )?,
        Rule::new(
            "end_align",
            Scope::In(&[K::Align]),
            r"\\end\s*\{\s*align\*?\s*\}",
            Exit,
        )?,
        Rule::new(
            "intertext_open",
            Scope::In(&[K::Align]),
            r"\\intertext\s*\{",
            Push(K::Intertext),
        )?,
        // Floats and opt-out environments
        Rule::new(
            "begin_ignored_environment",
            Scope::AnyExcept(&[K::Comment, K::InlineMath, K::DisplayMath]),
            &format!(r"\\begin\s*\{{\s*(?:{})\*?\s*\}}{}", ignored, TRAILING_ARGS),
            Push(K::IgnoredEnv),
        )?,
        Rule::new(
            "end_ignored_environment",
            Scope::In(&[K::IgnoredEnv]),
            &format!(r"\\end\s*\{{\s*(?:{})\*?\s*\}}", ignored),
            Exit,
        )?,
        Rule::new("ignored_text", Scope::In(&[K::IgnoredEnv]), r"(?s:.)", Discard)?,
        // Any other environment only loses its delimiters
        Rule::new(
            "begin_environment",
            Scope::In(&[K::Document]),
            r"\\begin\s*(?:\{[^}\n]+\})+",
            Discard,
        )?,
        Rule::new(
            "end_environment",
            Scope::In(&[K::Document]),
            r"\\end\s*\{[^}\n]+\}",
            Discard,
        )?,
        // Arguments
        Rule::new(
            "special_macro",
            Scope::AnyExcept(OPAQUE),
            r"\\(autoref|ref|autocite|textcite|label|footnote)\*?\s*(?:\[[^\]\n]*\]\s*)*\{",
            PushSpecialMacro,
        )?,
        Rule::new("group_open", Scope::AnyExcept(OPAQUE), r"\{", Push(K::Group))?,
        Rule::new("argument_close", Scope::In(RAW_CAPTURE), r"\}", Exit)?,
        // Unknown macros vanish together with one optional [option]
        Rule::new(
            "control_word",
            Scope::AnyExcept(OPAQUE),
            r"\\[a-zA-Z]+\*?(?:\[[^\]\n]*\])?",
            Discard,
        )?,
        // Single characters
        Rule::new("prose_char", Scope::In(PROSE), r"(?s:.)", Emit)?,
        Rule::new(
            "skipped_char",
            Scope::In(&[K::Initial, K::Align]),
            r"(?s:.)",
            Discard,
        )?,
    ])
}

lazy_static! {
    static ref STANDARD_TABLE: ModeTable = ModeTable::new(standard_rules().unwrap());
}
