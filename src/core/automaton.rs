//! State stack automaton and context replay
//!
//! The automaton keeps a stack of active modes (innermost on top) and scans
//! its input one rule match at a time against the shared [`ModeTable`].
//! Capturing modes collect their text in a parallel [`BufferStack`]; when
//! one of them closes, its buffer is resolved by *context replay*: a fresh
//! automaton is preloaded with the ancestor modes and run over the buffered
//! text, so nested constructs are lexed exactly as if they had appeared in
//! that ancestor context.

use super::buffer::BufferStack;
use super::emission::{EmissionPolicy, Token};
use super::mode::{Mode, ModeKind, SpecialMacro};
use super::rules::{Action, ModeTable, Rule};
use crate::data::control_symbol_text;
use crate::utils::error::{StripError, StripResult, StripWarning};
use crate::utils::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    mode: Mode,
    /// Byte offset of the trigger that opened the mode
    opened_at: usize,
}

/// Single-pass scanner over one input string
#[derive(Debug)]
pub struct Automaton<'t> {
    table: &'t ModeTable,
    policy: &'t EmissionPolicy,
    strict: bool,
    modes: Vec<Frame>,
    /// Number of preloaded frames; they are not reported as unterminated
    base_depth: usize,
    buffers: BufferStack,
    tokens: Vec<Token>,
    warnings: Vec<StripWarning>,
    /// Set on replay instances: byte offset, in the root input, of the
    /// replayed construct. Every position the instance reports maps there.
    origin: Option<usize>,
}

impl<'t> Automaton<'t> {
    pub fn new(table: &'t ModeTable, policy: &'t EmissionPolicy) -> Self {
        Self::with_modes(table, policy, &[Mode::Initial])
    }

    /// Start from a preloaded mode stack (bottom first). An empty slice
    /// starts in `Initial`.
    pub fn with_modes(table: &'t ModeTable, policy: &'t EmissionPolicy, modes: &[Mode]) -> Self {
        let mut frames: Vec<Frame> = modes
            .iter()
            .map(|&mode| Frame { mode, opened_at: 0 })
            .collect();
        if frames.is_empty() {
            frames.push(Frame {
                mode: Mode::Initial,
                opened_at: 0,
            });
        }
        let base_depth = frames.len();
        Self {
            table,
            policy,
            strict: false,
            modes: frames,
            base_depth,
            buffers: BufferStack::new(),
            tokens: Vec::new(),
            warnings: Vec::new(),
            origin: None,
        }
    }

    /// Treat the whole input as document body
    pub fn with_document(mut self) -> Self {
        self.modes.push(Frame {
            mode: Mode::Document,
            opened_at: 0,
        });
        self.base_depth = self.modes.len();
        self
    }

    /// Make unterminated constructs fatal instead of warnings
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn top(&self) -> Mode {
        self.modes.last().map_or(Mode::Initial, |f| f.mode)
    }

    pub fn buffer_depth(&self) -> usize {
        self.buffers.depth()
    }

    pub fn warnings(&self) -> &[StripWarning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<StripWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Scan `input` to the end and return the emitted tokens
    pub fn run(&mut self, input: &str) -> StripResult<Vec<Token>> {
        self.scan(input, input)
    }

    /// Apply the best rule at `cursor` and return the new cursor
    pub fn step(&mut self, input: &str, cursor: usize) -> StripResult<usize> {
        self.advance(input, input, cursor)
    }

    /// `root` is the top-level input; it differs from `input` only on replay
    /// instances and is read only to resolve diagnostics.
    fn scan(&mut self, input: &str, root: &str) -> StripResult<Vec<Token>> {
        let mut cursor = 0;
        while cursor < input.len() {
            cursor = self.advance(input, root, cursor)?;
        }
        self.finish(input, root)?;
        Ok(std::mem::take(&mut self.tokens))
    }

    fn advance(&mut self, input: &str, root: &str, cursor: usize) -> StripResult<usize> {
        let rest = &input[cursor..];
        let table = self.table;
        let Some(found) = table.longest_match(self.top().kind(), rest) else {
            let loc = self.locate(input, root, cursor);
            return Err(StripError::IllegalCharacter {
                character: rest.chars().next().unwrap_or('\0'),
                position: loc.offset,
                line: loc.line,
                column: loc.column,
            });
        };
        let matched = &rest[..found.len];
        self.apply(found.rule, root, cursor, matched)?;
        Ok(cursor + found.len)
    }

    fn apply(&mut self, rule: &Rule, root: &str, cursor: usize, matched: &str) -> StripResult<()> {
        match rule.action {
            Action::Emit => self.text(matched),
            Action::Discard => {
                if self.top().kind().is_replayed() {
                    self.buffers.append(matched)?;
                }
                Ok(())
            }
            Action::Escape => self.literal(matched, &matched[1..]),
            Action::Symbol => self.literal(matched, control_symbol_text(matched)),
            Action::Push(kind) => {
                let mode = Mode::from_kind(kind).ok_or_else(|| {
                    StripError::internal(format!("rule '{}' cannot push {:?}", rule.name, kind))
                })?;
                self.push(mode, cursor);
                Ok(())
            }
            Action::PushSpecialMacro => {
                let special = rule
                    .capture(matched, 1)
                    .and_then(SpecialMacro::from_name)
                    .ok_or_else(|| {
                        StripError::internal(format!("'{}' is not a special macro", matched))
                    })?;
                self.push(Mode::SpecialMacro(special), cursor);
                Ok(())
            }
            Action::Exit => self.exit(root),
        }
    }

    /// Normal text path: buffer while capturing, emit in prose, else drop
    fn text(&mut self, text: &str) -> StripResult<()> {
        let kind = self.top().kind();
        if kind.is_capturing() {
            self.buffers.append(text)
        } else {
            if kind.emits_text() {
                self.emit(Token::Text(text.to_string()));
            }
            Ok(())
        }
    }

    /// Escapes keep their raw form inside a replayed capture so the replay
    /// resolves them in context.
    fn literal(&mut self, raw: &str, literal: &str) -> StripResult<()> {
        if self.top().kind().is_replayed() {
            self.buffers.append(raw)
        } else {
            self.text(literal)
        }
    }

    fn emit(&mut self, token: Token) {
        if let (Some(Token::Text(last)), Token::Text(text)) = (self.tokens.last_mut(), &token) {
            last.push_str(text);
            return;
        }
        self.tokens.push(token);
    }

    fn push(&mut self, mode: Mode, opened_at: usize) {
        self.modes.push(Frame { mode, opened_at });
        if mode.is_capturing() {
            self.buffers.push();
        }
    }

    fn exit(&mut self, root: &str) -> StripResult<()> {
        let context = self.replay_context();
        if self.modes.len() <= 1 {
            return Err(StripError::internal("exit from the bottom mode"));
        }
        let Some(frame) = self.modes.pop() else {
            return Err(StripError::internal("exit from an empty mode stack"));
        };

        match frame.mode {
            Mode::InlineMath | Mode::DisplayMath => {
                let raw = self.buffers.pop()?;
                let token = self.policy.classify_math(&raw);
                self.deliver(token, false)
            }
            Mode::Group => {
                let raw = self.buffers.pop()?;
                let grouped = self.replay(&raw, &context, root, frame.opened_at)?;
                self.deliver(Some(Token::Text(grouped)), true)
            }
            Mode::Intertext => {
                let raw = self.buffers.pop()?;
                let grouped = self.replay(&raw, &context, root, frame.opened_at)?;
                self.deliver(Some(Token::Text(grouped)), false)
            }
            Mode::SpecialMacro(special) => {
                let raw = self.buffers.pop()?;
                let grouped = self.replay(&raw, &context, root, frame.opened_at)?;
                let token = self.policy.special_macro(special, grouped);
                self.deliver(token, false)
            }
            Mode::Initial | Mode::Document | Mode::Align | Mode::IgnoredEnv | Mode::Comment => {
                Ok(())
            }
        }
    }

    /// Ancestor chain a replay of the top mode runs under.
    ///
    /// Capturing modes never produce tokens, so they are left out; a mode
    /// with a replay boundary also cuts the chain back to before the first
    /// occurrence of that boundary, whether it is the top mode or an
    /// ancestor.
    fn replay_context(&self) -> Vec<Mode> {
        let mut context: Vec<Mode> = Vec::with_capacity(self.modes.len());
        for frame in &self.modes {
            let kind = frame.mode.kind();
            if let Some(boundary) = kind.replay_boundary() {
                if let Some(pos) = context.iter().position(|m| m.kind() == boundary) {
                    context.truncate(pos);
                }
            }
            if !kind.is_capturing() {
                context.push(frame.mode);
            }
        }
        context
    }

    /// Re-lex `text` under `context` with a fresh automaton and join its
    /// tokens.
    fn replay(
        &mut self,
        text: &str,
        context: &[Mode],
        root: &str,
        opened_at: usize,
    ) -> StripResult<String> {
        let mut child = Automaton::with_modes(self.table, self.policy, context).strict(self.strict);
        child.origin = Some(self.origin.unwrap_or(opened_at));
        let tokens = child.scan(text, root)?;
        self.warnings.append(&mut child.warnings);
        Ok(tokens.iter().map(Token::as_str).collect())
    }

    /// Hand a closed construct's result to the parent: appended to its
    /// buffer when the parent captures, emitted otherwise.
    fn deliver(&mut self, token: Option<Token>, braced: bool) -> StripResult<()> {
        let Some(token) = token else {
            return Ok(());
        };
        let kind = self.top().kind();
        if !kind.is_capturing() {
            self.emit(token);
            return Ok(());
        }

        match token {
            Token::Text(text) if kind.is_replayed() => {
                let protected = protect(&text);
                if braced {
                    self.buffers.append(&format!("{{{}}}", protected))
                } else {
                    self.buffers.append(&protected)
                }
            }
            other => self.buffers.append(other.as_str()),
        }
    }

    fn finish(&mut self, input: &str, root: &str) -> StripResult<()> {
        let open: Vec<Frame> = self
            .modes
            .iter()
            .skip(self.base_depth)
            .filter(|f| f.mode.kind() != ModeKind::Comment)
            .copied()
            .collect();

        for frame in open {
            let loc = self.locate(input, root, frame.opened_at);
            if self.strict {
                return Err(StripError::unterminated(
                    frame.mode.to_string(),
                    loc.line,
                    loc.column,
                ));
            }
            let mut warning =
                StripWarning::new(format!("unterminated {}", frame.mode)).at(loc.line, loc.column);
            if let Some(hint) = frame.mode.kind().closing_hint() {
                warning = warning.with_suggestion(format!("close it with `{}`", hint));
            }
            self.warnings.push(warning);
        }

        let depth = self.base_depth.min(self.modes.len());
        self.modes.truncate(depth);
        self.buffers = BufferStack::new();
        Ok(())
    }

    /// Resolved only when a diagnostic is raised
    fn locate(&self, input: &str, root: &str, offset: usize) -> Location {
        match self.origin {
            Some(origin) => Location::of(root, origin),
            None => Location::of(input, offset),
        }
    }
}

/// Escape characters that would be reinterpreted when already resolved text
/// is lexed again by a parent's replay.
fn protect(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '$' | '{' | '}') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
