//! Core stripping modules
//!
//! This module contains the lexical engine and the passes around it:
//! - `rules`, `mode`: the mode table and the modes it is keyed on
//! - `automaton`, `buffer`: the state stack automaton and context replay
//! - `emission`: what math spans and special macros turn into
//! - `preprocess`, `postprocess`: source and output clean-up

pub mod automaton;
pub mod buffer;
pub mod emission;
pub mod mode;
pub mod options;
pub mod postprocess;
pub mod preprocess;
pub mod rules;

pub use automaton::Automaton;
pub use buffer::BufferStack;
pub use emission::{EmissionPolicy, MathAllowList, OutputMode, Placeholder, Token};
pub use mode::{Mode, ModeKind, SpecialMacro};
pub use options::StripOptions;
pub use postprocess::{clean_output, count_words};
pub use preprocess::strip_false_blocks;
pub use rules::{Action, ModeTable, Rule, RuleMatch, Scope};
