//! Mint Lexer - indentation-sensitive tokenizer for the Mint interpreter.
//!
//! Source is read lazily, one physical line at a time, from any `BufRead`.
//! Tokens are appended to a replayable buffer; the parser walks it with a
//! cursor through [`Lexer::current_token`] and [`Lexer::next_token`] and the
//! typed `expect*` assertions.
//!
//! # Layout
//!
//! Indentation is two spaces per level. Before the tokens of every non-blank
//! line the lexer emits one `Indent` per level gained or one `Dedent` per level
//! lost. Blank and comment-only lines contribute nothing. At end of input the
//! last line is closed with `Newline` and `Eof` is appended; open levels get
//! no `Dedent`, so `Eof` closes every block. The cursor never moves past
//! `Eof`.

mod keywords;
mod lex_error;
mod line;
mod token;

use std::io::BufRead;

pub use lex_error::{LexError, LexErrorKind};
pub use token::{Token, TokenKind};

use line::scan_line;

/// Lazily tokenizes a line-oriented input stream.
pub struct Lexer<R> {
    input: R,
    tokens: Vec<Token>,
    /// Source line of each token, parallel to `tokens`.
    lines: Vec<u32>,
    /// Cursor into `tokens`. Always valid once construction succeeds.
    pos: usize,
    /// Indentation depth of the last non-blank line.
    depth: usize,
    /// Number of physical lines read so far.
    line: u32,
    buf: String,
}

impl<R: BufRead> Lexer<R> {
    /// Create a lexer and read up to the first token.
    pub fn new(input: R) -> Result<Self, LexError> {
        let mut lexer = Lexer {
            input,
            tokens: Vec::new(),
            lines: Vec::new(),
            pos: 0,
            depth: 0,
            line: 0,
            buf: String::new(),
        };
        lexer.fill()?;
        Ok(lexer)
    }

    /// The token under the cursor.
    #[inline]
    pub fn current_token(&self) -> &Token {
        debug_assert!(self.pos < self.tokens.len(), "cursor out of bounds");
        &self.tokens[self.pos]
    }

    /// Source line of the token under the cursor.
    #[inline]
    pub fn current_line(&self) -> u32 {
        self.lines[self.pos]
    }

    /// Advance the cursor and return the new current token.
    ///
    /// Reads more input when the buffer is exhausted. After `Eof` this keeps
    /// returning `Eof`.
    pub fn next_token(&mut self) -> Result<&Token, LexError> {
        if self.pos + 1 >= self.tokens.len() {
            if self.is_finished() {
                return Ok(self.current_token());
            }
            self.fill()?;
        }
        self.pos += 1;
        Ok(self.current_token())
    }

    /// Check the current token's kind, returning the token on success.
    pub fn expect(&self, kind: TokenKind) -> Result<&Token, LexError> {
        let token = self.current_token();
        if token.kind() == kind {
            Ok(token)
        } else {
            Err(self.unexpected_kind(kind))
        }
    }

    /// Check that the current token equals `expected`, payload included.
    pub fn expect_value(&self, expected: &Token) -> Result<(), LexError> {
        let token = self.expect(expected.kind())?;
        if token == expected {
            Ok(())
        } else {
            Err(LexError::new(
                self.current_line(),
                LexErrorKind::UnexpectedValue {
                    expected: expected.clone(),
                    found: token.clone(),
                },
            ))
        }
    }

    /// Advance, then [`expect`](Self::expect).
    pub fn expect_next(&mut self, kind: TokenKind) -> Result<&Token, LexError> {
        self.next_token()?;
        self.expect(kind)
    }

    /// Advance, then [`expect_value`](Self::expect_value).
    pub fn expect_next_value(&mut self, expected: &Token) -> Result<(), LexError> {
        self.next_token()?;
        self.expect_value(expected)
    }

    /// Payload of the current `Id` token.
    pub fn expect_id(&self) -> Result<&str, LexError> {
        match self.current_token() {
            Token::Id(name) => Ok(name),
            _ => Err(self.unexpected_kind(TokenKind::Id)),
        }
    }

    /// Payload of the current `Number` token.
    pub fn expect_number(&self) -> Result<i64, LexError> {
        match self.current_token() {
            Token::Number(value) => Ok(*value),
            _ => Err(self.unexpected_kind(TokenKind::Number)),
        }
    }

    /// Payload of the current `Char` token.
    pub fn expect_char(&self) -> Result<char, LexError> {
        match self.current_token() {
            Token::Char(c) => Ok(*c),
            _ => Err(self.unexpected_kind(TokenKind::Char)),
        }
    }

    /// Payload of the current `String` token.
    pub fn expect_string(&self) -> Result<&str, LexError> {
        match self.current_token() {
            Token::String(value) => Ok(value),
            _ => Err(self.unexpected_kind(TokenKind::String)),
        }
    }

    /// Advance, then [`expect_id`](Self::expect_id).
    pub fn expect_next_id(&mut self) -> Result<&str, LexError> {
        self.next_token()?;
        self.expect_id()
    }

    /// Advance, then [`expect_char`](Self::expect_char).
    pub fn expect_next_char(&mut self) -> Result<char, LexError> {
        self.next_token()?;
        self.expect_char()
    }

    fn is_finished(&self) -> bool {
        matches!(self.tokens.last(), Some(Token::Eof))
    }

    /// Read lines until at least one token has been appended.
    fn fill(&mut self) -> Result<(), LexError> {
        loop {
            self.buf.clear();
            let read = self.input.read_line(&mut self.buf).map_err(|err| {
                LexError::new(
                    self.line + 1,
                    LexErrorKind::Io {
                        message: err.to_string(),
                    },
                )
            })?;
            self.line += 1;
            let at_eof = read == 0 || !self.buf.ends_with('\n');

            let mut scanned = scan_line(&self.buf, self.line)?;
            let blank = scanned.is_blank();
            tracing::trace!(
                line = self.line,
                depth = scanned.depth,
                tokens = scanned.tokens.len(),
                blank,
                "scanned line"
            );

            if !blank {
                if at_eof && scanned.tokens.last() != Some(&Token::Newline) {
                    scanned.tokens.push(Token::Newline);
                }
                self.reconcile_indent(scanned.depth);
                for token in scanned.tokens {
                    self.push(token);
                }
            }

            if at_eof {
                self.push(Token::Eof);
                return Ok(());
            }
            if !blank {
                return Ok(());
            }
        }
    }

    fn reconcile_indent(&mut self, depth: usize) {
        let layout = if depth > self.depth {
            Token::Indent
        } else {
            Token::Dedent
        };
        for _ in 0..self.depth.abs_diff(depth) {
            self.push(layout.clone());
        }
        self.depth = depth;
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
        self.lines.push(self.line);
    }

    #[cold]
    fn unexpected_kind(&self, expected: TokenKind) -> LexError {
        LexError::new(
            self.current_line(),
            LexErrorKind::UnexpectedKind {
                expected,
                found: self.current_token().clone(),
            },
        )
    }
}
