//! Reserved keyword table.
//!
//! The table is fixed: `class return if else def print and or not None True
//! False`. Lookup is a static `match`, bucketed by length so most identifiers
//! are rejected after a single comparison.

use crate::Token;

/// Look up a reserved keyword by text.
///
/// Returns the keyword's marker token, or `None` for an ordinary identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Token> {
    match text.len() {
        2 => match text {
            "if" => Some(Token::If),
            "or" => Some(Token::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(Token::And),
            "def" => Some(Token::Def),
            "not" => Some(Token::Not),
            _ => None,
        },
        4 => match text {
            "else" => Some(Token::Else),
            "None" => Some(Token::None),
            "True" => Some(Token::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(Token::Class),
            "print" => Some(Token::Print),
            "False" => Some(Token::False),
            _ => None,
        },
        6 => match text {
            "return" => Some(Token::Return),
            _ => None,
        },
        _ => None,
    }
}
