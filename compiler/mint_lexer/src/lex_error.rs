//! Lexer error types.
//!
//! Every error records WHERE (the 1-based source line) and WHAT (`kind`).
//! Lexing is fail-fast: the first error aborts the lex/parse/run pipeline.

use thiserror::Error;

use crate::{Token, TokenKind};

/// A lexical error with its source line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("lexical error on line {line}: {kind}")]
pub struct LexError {
    /// 1-based line where the error was detected.
    pub line: u32,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Leading spaces are not a multiple of the indentation unit.
    #[error("indentation of {spaces} spaces is not a multiple of 2")]
    OddIndent { spaces: usize },
    /// Escape other than `\n`, `\t`, `\"`, `\'`.
    #[error("invalid escape sequence `\\{escape_char}` in string literal")]
    InvalidStringEscape { escape_char: char },
    /// Input ended before the closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A raw line break appeared inside a string literal.
    #[error("unexpected end of line inside string literal")]
    NewlineInString,
    /// Integer literal does not fit into a 64-bit signed integer.
    #[error("integer literal `{literal}` is too large")]
    IntOverflow { literal: String },
    /// `expect` found a token of another kind.
    #[error("unexpected token kind: expected {expected}, found {found}")]
    UnexpectedKind { expected: TokenKind, found: Token },
    /// `expect_value` found the right kind with a different payload.
    #[error("unexpected token value: expected {expected}, found {found}")]
    UnexpectedValue { expected: Token, found: Token },
    /// The underlying reader failed (including invalid UTF-8).
    #[error("failed to read input: {message}")]
    Io { message: String },
}

impl LexError {
    #[cold]
    pub(crate) fn new(line: u32, kind: LexErrorKind) -> Self {
        LexError { line, kind }
    }
}
