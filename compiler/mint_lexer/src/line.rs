//! Single-line scanner.
//!
//! Turns one physical source line into its indentation depth and tokens.
//! Layout tokens (`Indent`/`Dedent`/`Eof`) are not produced here; the
//! [`Lexer`](crate::Lexer) synthesizes them while stitching lines together.

use std::iter::Peekable;
use std::str::Chars;

use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};
use crate::Token;

/// Number of spaces per indentation level.
pub(crate) const INDENT_WIDTH: usize = 2;

/// The result of scanning one physical line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ScannedLine {
    /// Indentation depth in levels.
    pub(crate) depth: usize,
    /// Tokens of the line, ending in `Newline` when the line had one.
    pub(crate) tokens: Vec<Token>,
}

impl ScannedLine {
    /// A line with nothing but whitespace, a comment, or a bare newline.
    pub(crate) fn is_blank(&self) -> bool {
        self.tokens.iter().all(|token| *token == Token::Newline)
    }
}

/// Scan `text` (one line, including its trailing `\n` if any).
pub(crate) fn scan_line(text: &str, line: u32) -> Result<ScannedLine, LexError> {
    let mut scanner = LineScanner {
        chars: text.chars().peekable(),
        line,
        tokens: Vec::new(),
    };
    let depth = scanner.indent()?;
    scanner.scan()?;
    Ok(ScannedLine {
        depth,
        tokens: scanner.tokens,
    })
}

struct LineScanner<'a> {
    chars: Peekable<Chars<'a>>,
    line: u32,
    tokens: Vec<Token>,
}

impl LineScanner<'_> {
    fn indent(&mut self) -> Result<usize, LexError> {
        let mut spaces = 0;
        while self.chars.next_if_eq(&' ').is_some() {
            spaces += 1;
        }
        if spaces % INDENT_WIDTH != 0 {
            return Err(self.error(LexErrorKind::OddIndent { spaces }));
        }
        Ok(spaces / INDENT_WIDTH)
    }

    fn scan(&mut self) -> Result<(), LexError> {
        while let Some(c) = self.chars.next() {
            let token = match c {
                '\n' => {
                    self.tokens.push(Token::Newline);
                    break;
                }
                ' ' => continue,
                '#' => {
                    self.skip_comment();
                    continue;
                }
                '"' | '\'' => self.string(c)?,
                c if c.is_ascii_digit() => self.number(c)?,
                c if c.is_ascii_alphabetic() || c == '_' => self.ident(c),
                '=' | '!' | '<' | '>' if self.chars.peek() == Some(&'=') => {
                    self.chars.next();
                    comparison(c)
                }
                other => Token::Char(other),
            };
            self.tokens.push(token);
        }
        Ok(())
    }

    /// Skip to the end of the line, leaving the `\n` for `scan`.
    fn skip_comment(&mut self) {
        while self.chars.next_if(|&c| c != '\n').is_some() {}
    }

    fn string(&mut self, quote: char) -> Result<Token, LexError> {
        let mut value = String::new();
        loop {
            match self.chars.next() {
                None => return Err(self.error(LexErrorKind::UnterminatedString)),
                Some(c) if c == quote => break,
                Some('\\') => {
                    let Some(escape_char) = self.chars.next() else {
                        return Err(self.error(LexErrorKind::UnterminatedString));
                    };
                    match resolve_escape(escape_char) {
                        Some(resolved) => value.push(resolved),
                        None => {
                            return Err(
                                self.error(LexErrorKind::InvalidStringEscape { escape_char })
                            )
                        }
                    }
                }
                Some('\n' | '\r') => return Err(self.error(LexErrorKind::NewlineInString)),
                Some(c) => value.push(c),
            }
        }
        Ok(Token::String(value))
    }

    fn number(&mut self, first: char) -> Result<Token, LexError> {
        let mut literal = String::from(first);
        while let Some(digit) = self.chars.next_if(char::is_ascii_digit) {
            literal.push(digit);
        }
        match literal.parse() {
            Ok(value) => Ok(Token::Number(value)),
            Err(_) => Err(self.error(LexErrorKind::IntOverflow { literal })),
        }
    }

    fn ident(&mut self, first: char) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self
            .chars
            .next_if(|c| c.is_ascii_alphanumeric() || *c == '_')
        {
            text.push(c);
        }
        match keywords::lookup(&text) {
            Some(keyword) => keyword,
            None => Token::Id(text),
        }
    }

    #[cold]
    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(self.line, kind)
    }
}

/// Resolve the character after a backslash: `\n` `\t` `\"` `\'`.
#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Map the first character of a two-character comparison (`X=`) to its token.
fn comparison(first: char) -> Token {
    match first {
        '=' => Token::Eq,
        '!' => Token::NotEq,
        '<' => Token::LessOrEq,
        _ => Token::GreaterOrEq,
    }
}
