//! Parse error types for templates.

use thiserror::Error;

/// An error that occurred while tokenizing a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// A placeholder was opened but never closed.
    #[error("unexpected end of input at {line}:{column}: expected '}}' before end of string")]
    UnexpectedEof { line: usize, column: usize },
}

impl ParseError {
    /// Line and column (both 1-based) the error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. } | ParseError::UnexpectedEof { line, column } => {
                (*line, *column)
            }
        }
    }
}
