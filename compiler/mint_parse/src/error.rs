//! Parse error types.

use mint_lexer::{LexError, Token};
use thiserror::Error;

/// Why a program could not be parsed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Tokenizing failed, or the lexer's `expect*` check rejected a token.
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("syntax error on line {line}: expected {expected}, found {found}")]
    Unexpected {
        line: u32,
        expected: &'static str,
        found: Token,
    },
    #[error("syntax error on line {line}: unknown class {name}")]
    UnknownClass { line: u32, name: String },
    #[error("syntax error on line {line}: {name} is not a class and cannot be called")]
    UnknownCallee { line: u32, name: String },
    #[error("syntax error on line {line}: return outside of a method")]
    ReturnOutsideMethod { line: u32 },
    #[error("syntax error on line {line}: method {method} must take self as its first parameter")]
    MissingSelf { line: u32, method: String },
    #[error("syntax error on line {line}: only names and fields can be assigned to")]
    InvalidAssignmentTarget { line: u32 },
}

impl ParseError {
    /// Source line the error was reported on.
    pub fn line(&self) -> u32 {
        match self {
            ParseError::Lex(err) => err.line,
            ParseError::Unexpected { line, .. }
            | ParseError::UnknownClass { line, .. }
            | ParseError::UnknownCallee { line, .. }
            | ParseError::ReturnOutsideMethod { line }
            | ParseError::MissingSelf { line, .. }
            | ParseError::InvalidAssignmentTarget { line } => *line,
        }
    }
}
