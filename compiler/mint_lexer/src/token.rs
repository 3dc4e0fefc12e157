//! Token model produced by the lexer.
//!
//! `Token` carries payloads for literals and identifiers; `TokenKind` is the
//! payload-free discriminant used for kind-only checks (`Lexer::expect`).

use std::fmt;

/// A single lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    // Literal-bearing tokens
    /// Integer literal, e.g. `42`.
    Number(i64),
    /// Identifier that is not a keyword.
    Id(String),
    /// Any single character that has no dedicated token (operators, punctuation).
    Char(char),
    /// String literal with escapes already resolved.
    String(String),

    // Keywords
    Class,
    Return,
    If,
    Else,
    Def,
    Print,
    And,
    Or,
    Not,
    None,
    True,
    False,

    // Two-character comparison operators
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LessOrEq,
    /// `>=`
    GreaterOrEq,

    // Layout
    Newline,
    /// One level (two spaces) deeper than the previous logical line.
    Indent,
    /// One level shallower than the previous logical line.
    Dedent,
    Eof,
}

/// Payload-free discriminant of [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Id,
    Char,
    String,
    Class,
    Return,
    If,
    Else,
    Def,
    Print,
    And,
    Or,
    Not,
    None,
    True,
    False,
    Eq,
    NotEq,
    LessOrEq,
    GreaterOrEq,
    Newline,
    Indent,
    Dedent,
    Eof,
}

impl Token {
    /// The kind of this token, without its payload.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Id(_) => TokenKind::Id,
            Token::Char(_) => TokenKind::Char,
            Token::String(_) => TokenKind::String,
            Token::Class => TokenKind::Class,
            Token::Return => TokenKind::Return,
            Token::If => TokenKind::If,
            Token::Else => TokenKind::Else,
            Token::Def => TokenKind::Def,
            Token::Print => TokenKind::Print,
            Token::And => TokenKind::And,
            Token::Or => TokenKind::Or,
            Token::Not => TokenKind::Not,
            Token::None => TokenKind::None,
            Token::True => TokenKind::True,
            Token::False => TokenKind::False,
            Token::Eq => TokenKind::Eq,
            Token::NotEq => TokenKind::NotEq,
            Token::LessOrEq => TokenKind::LessOrEq,
            Token::GreaterOrEq => TokenKind::GreaterOrEq,
            Token::Newline => TokenKind::Newline,
            Token::Indent => TokenKind::Indent,
            Token::Dedent => TokenKind::Dedent,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// Check whether this token is the given single character.
    #[inline]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self, Token::Char(found) if *found == c)
    }
}

impl TokenKind {
    /// Name used in diagnostics and in `Token`'s `Display` output.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Number => "Number",
            TokenKind::Id => "Id",
            TokenKind::Char => "Char",
            TokenKind::String => "String",
            TokenKind::Class => "Class",
            TokenKind::Return => "Return",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::Def => "Def",
            TokenKind::Print => "Print",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Not => "Not",
            TokenKind::None => "None",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Eq => "Eq",
            TokenKind::NotEq => "NotEq",
            TokenKind::LessOrEq => "LessOrEq",
            TokenKind::GreaterOrEq => "GreaterOrEq",
            TokenKind::Newline => "Newline",
            TokenKind::Indent => "Indent",
            TokenKind::Dedent => "Dedent",
            TokenKind::Eof => "Eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        match self {
            Token::Number(value) => write!(f, "{kind}{{{value}}}"),
            Token::Id(value) | Token::String(value) => write!(f, "{kind}{{{value}}}"),
            Token::Char(value) => write!(f, "{kind}{{{value}}}"),
            _ => f.write_str(kind.as_str()),
        }
    }
}
