//! Recursive descent parser for Mint.
//!
//! Consumes the lexer's token protocol directly and builds `mint_eval`
//! statement trees. Classes are constructed while parsing, so instance
//! creation and inheritance can only refer to classes declared earlier in
//! the source.

mod error;
mod grammar;

use std::io::BufRead;
use std::rc::Rc;

use mint_eval::{Class, Closure, Context, RuntimeError, Stmt};
use mint_lexer::{Lexer, Token, TokenKind};
use rustc_hash::FxHashMap;

pub use error::ParseError;

/// A parsed program.
#[derive(Debug)]
pub struct Program {
    /// Top-level statements, as one `Compound`.
    pub body: Stmt,
    /// Every class, in declaration order.
    pub classes: Vec<Rc<Class>>,
}

impl Program {
    /// Run in a fresh global scope; see [`mint_eval::run_program`].
    pub fn run(&self, ctx: &mut dyn Context) -> Result<Closure, RuntimeError> {
        mint_eval::run_program(&self.body, ctx)
    }
}

/// Parse a whole program from a line-oriented reader.
pub fn parse<R: BufRead>(input: R) -> Result<Program, ParseError> {
    Parser::new(Lexer::new(input)?).parse_program()
}

/// Parse a whole program held in memory.
pub fn parse_str(source: &str) -> Result<Program, ParseError> {
    parse(source.as_bytes())
}

/// Parser state.
pub struct Parser<R> {
    lexer: Lexer<R>,
    /// Classes declared so far, by name.
    classes: FxHashMap<String, Rc<Class>>,
    declared: Vec<Rc<Class>>,
    /// Number of enclosing method bodies; `return` needs at least one.
    method_depth: usize,
}

impl<R: BufRead> Parser<R> {
    pub fn new(lexer: Lexer<R>) -> Self {
        Parser {
            lexer,
            classes: FxHashMap::default(),
            declared: Vec::new(),
            method_depth: 0,
        }
    }

    /// Parse statements up to `Eof`.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.check(&Token::Eof) {
            body.push(self.parse_stmt()?);
        }
        tracing::debug!(
            statements = body.len(),
            classes = self.declared.len(),
            "parsed program"
        );
        Ok(Program {
            body: Stmt::Compound(body),
            classes: self.declared,
        })
    }

    // Cursor helpers

    #[inline]
    fn current(&self) -> &Token {
        self.lexer.current_token()
    }

    #[inline]
    fn line(&self) -> u32 {
        self.lexer.current_line()
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.lexer.next_token()?;
        Ok(())
    }

    #[inline]
    fn check(&self, token: &Token) -> bool {
        self.current() == token
    }

    #[inline]
    fn check_char(&self, c: char) -> bool {
        self.current().is_char(c)
    }

    /// Consume `token` or fail with the lexer's mismatch error.
    fn expect(&mut self, token: &Token) -> Result<(), ParseError> {
        self.lexer.expect_value(token)?;
        self.advance()
    }

    fn expect_char(&mut self, c: char) -> Result<(), ParseError> {
        self.expect(&Token::Char(c))
    }

    fn expect_id(&mut self) -> Result<String, ParseError> {
        let name = self.lexer.expect_id()?.to_string();
        self.advance()?;
        Ok(name)
    }

    /// Consume `Newline` then `Indent`, opening a block.
    fn expect_block_start(&mut self) -> Result<(), ParseError> {
        self.expect(&Token::Newline)?;
        self.lexer.expect(TokenKind::Indent)?;
        self.advance()
    }

    /// A block ends at `Dedent`, or at `Eof`, which closes every open block.
    fn at_block_end(&self) -> bool {
        matches!(self.current(), Token::Dedent | Token::Eof)
    }

    /// Consume the `Dedent` ending a block; `Eof` is left for the enclosing
    /// blocks and the program.
    fn close_block(&mut self) -> Result<(), ParseError> {
        if self.check(&Token::Dedent) {
            self.advance()?;
        }
        Ok(())
    }

    #[cold]
    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::Unexpected {
            line: self.line(),
            expected,
            found: self.current().clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
