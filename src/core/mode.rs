//! Scanning modes
//!
//! A mode is the context the automaton is currently scanning in. Modes are
//! mutually exclusive: only the rules admitted for the top of the mode stack
//! are tried.

use phf::phf_map;
use std::fmt;

/// Macros whose argument is captured and run through the emission policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMacro {
    Autoref,
    Ref,
    Autocite,
    Textcite,
    Label,
    Footnote,
}

/// Macro name (without backslash) to its special macro
pub static SPECIAL_MACROS: phf::Map<&'static str, SpecialMacro> = phf_map! {
    "autoref" => SpecialMacro::Autoref,
    "ref" => SpecialMacro::Ref,
    "autocite" => SpecialMacro::Autocite,
    "textcite" => SpecialMacro::Textcite,
    "label" => SpecialMacro::Label,
    "footnote" => SpecialMacro::Footnote,
};

impl SpecialMacro {
    pub fn from_name(name: &str) -> Option<Self> {
        SPECIAL_MACROS.get(name).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialMacro::Autoref => "autoref",
            SpecialMacro::Ref => "ref",
            SpecialMacro::Autocite => "autocite",
            SpecialMacro::Textcite => "textcite",
            SpecialMacro::Label => "label",
            SpecialMacro::Footnote => "footnote",
        }
    }
}

/// Payload-free mode discriminant, used by rule scopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Initial,
    Document,
    InlineMath,
    DisplayMath,
    Align,
    IgnoredEnv,
    Group,
    Intertext,
    SpecialMacro,
    Comment,
}

impl ModeKind {
    /// Matched text is buffered instead of emitted
    pub fn is_capturing(self) -> bool {
        matches!(
            self,
            ModeKind::InlineMath
                | ModeKind::DisplayMath
                | ModeKind::Group
                | ModeKind::Intertext
                | ModeKind::SpecialMacro
        )
    }

    /// The buffer is re-lexed on exit (math is classified as-is instead)
    pub fn is_replayed(self) -> bool {
        matches!(
            self,
            ModeKind::Group | ModeKind::Intertext | ModeKind::SpecialMacro
        )
    }

    /// Plain characters become output tokens
    pub fn emits_text(self) -> bool {
        self == ModeKind::Document
    }

    /// Ancestor kind whose context a replay of this mode must not see
    pub fn replay_boundary(self) -> Option<ModeKind> {
        match self {
            ModeKind::Intertext => Some(ModeKind::Align),
            _ => None,
        }
    }

    /// Human readable name for diagnostics
    pub fn describe(self) -> &'static str {
        match self {
            ModeKind::Initial => "preamble",
            ModeKind::Document => "document environment",
            ModeKind::InlineMath => "inline math",
            ModeKind::DisplayMath => "display math",
            ModeKind::Align => "align environment",
            ModeKind::IgnoredEnv => "ignored environment",
            ModeKind::Group => "group",
            ModeKind::Intertext => "\\intertext argument",
            ModeKind::SpecialMacro => "macro argument",
            ModeKind::Comment => "comment",
        }
    }

    /// The text that would have closed this construct
    pub fn closing_hint(self) -> Option<&'static str> {
        match self {
            ModeKind::Document => Some("\\end{document}"),
            ModeKind::InlineMath => Some("$"),
            ModeKind::DisplayMath => Some("$$"),
            ModeKind::Align => Some("\\end{align}"),
            ModeKind::IgnoredEnv => Some("the matching \\end{...}"),
            ModeKind::Group | ModeKind::Intertext | ModeKind::SpecialMacro => Some("}"),
            ModeKind::Initial | ModeKind::Comment => None,
        }
    }
}

/// A scanning mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Initial,
    Document,
    InlineMath,
    DisplayMath,
    Align,
    IgnoredEnv,
    Group,
    Intertext,
    SpecialMacro(SpecialMacro),
    Comment,
}

impl Mode {
    pub fn kind(self) -> ModeKind {
        match self {
            Mode::Initial => ModeKind::Initial,
            Mode::Document => ModeKind::Document,
            Mode::InlineMath => ModeKind::InlineMath,
            Mode::DisplayMath => ModeKind::DisplayMath,
            Mode::Align => ModeKind::Align,
            Mode::IgnoredEnv => ModeKind::IgnoredEnv,
            Mode::Group => ModeKind::Group,
            Mode::Intertext => ModeKind::Intertext,
            Mode::SpecialMacro(_) => ModeKind::SpecialMacro,
            Mode::Comment => ModeKind::Comment,
        }
    }

    pub fn is_capturing(self) -> bool {
        self.kind().is_capturing()
    }

    /// Build the mode for a payload-free kind. `SpecialMacro` needs its
    /// name and cannot be built this way.
    pub fn from_kind(kind: ModeKind) -> Option<Mode> {
        let mode = match kind {
            ModeKind::Initial => Mode::Initial,
            ModeKind::Document => Mode::Document,
            ModeKind::InlineMath => Mode::InlineMath,
            ModeKind::DisplayMath => Mode::DisplayMath,
            ModeKind::Align => Mode::Align,
            ModeKind::IgnoredEnv => Mode::IgnoredEnv,
            ModeKind::Group => Mode::Group,
            ModeKind::Intertext => Mode::Intertext,
            ModeKind::SpecialMacro => return None,
            ModeKind::Comment => Mode::Comment,
        };
        Some(mode)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::SpecialMacro(m) => write!(f, "\\{} argument", m.name()),
            other => write!(f, "{}", other.kind().describe()),
        }
    }
}
