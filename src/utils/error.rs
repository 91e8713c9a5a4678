//! Error handling for texprose
//!
//! This module provides a unified error type and result type for the
//! stripping pipeline, plus the non-fatal warning type collected alongside
//! the output.

use std::fmt;

/// Stripping error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    /// No rule of the active mode (or any global rule) matched at the cursor
    IllegalCharacter {
        character: char,
        /// Byte offset into the scanned input
        position: usize,
        line: usize,
        column: usize,
    },
    /// A construct was still open at end of input (strict mode only)
    Unterminated {
        construct: String,
        line: usize,
        column: usize,
    },
    /// A rule pattern failed to compile
    InvalidPattern { pattern: String, message: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripError::IllegalCharacter {
                character,
                line,
                column,
                ..
            } => write!(
                f,
                "Illegal character {:?} at line {}, column {}",
                character, line, column
            ),
            StripError::Unterminated {
                construct,
                line,
                column,
            } => write!(
                f,
                "Unterminated {} opened at line {}, column {}",
                construct, line, column
            ),
            StripError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid rule pattern '{}': {}", pattern, message)
            }
            StripError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            StripError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for StripError {}

impl From<std::io::Error> for StripError {
    fn from(err: std::io::Error) -> Self {
        StripError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for stripping operations
pub type StripResult<T> = Result<T, StripError>;

/// Non-fatal issue found while stripping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripWarning {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub suggestion: Option<String>,
}

impl StripWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
            suggestion: None,
        }
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for StripWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(l), Some(c)) => write!(f, "Warning at line {}, column {}: {}", l, c, self.message)?,
            (Some(l), None) => write!(f, "Warning at line {}: {}", l, self.message)?,
            _ => write!(f, "Warning: {}", self.message)?,
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Stripped output with optional warnings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutput {
    /// The cleaned prose
    pub content: String,
    /// Any warnings generated while stripping
    pub warnings: Vec<StripWarning>,
}

impl StripOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<StripWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// Convenience constructors for errors
impl StripError {
    pub fn unterminated(construct: impl Into<String>, line: usize, column: usize) -> Self {
        StripError::Unterminated {
            construct: construct.into(),
            line,
            column,
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        StripError::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        StripError::InternalError {
            message: message.into(),
        }
    }
}
