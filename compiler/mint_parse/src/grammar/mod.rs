//! Grammar productions.
//!
//! - `item`: class and method declarations
//! - `expr`: expressions, lowest precedence (`or`) first
//! - this module: statements and blocks

mod expr;
mod item;

use std::io::BufRead;

use mint_eval::{ensure_sufficient_stack, Stmt};
use mint_lexer::Token;

use crate::{ParseError, Parser};

impl<R: BufRead> Parser<R> {
    /// `stmt := class_def | if_stmt | simple Newline`
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| match self.current() {
            Token::Class => self.parse_class(),
            Token::If => self.parse_if(),
            _ => {
                let stmt = self.parse_simple()?;
                self.expect(&Token::Newline)?;
                Ok(stmt)
            }
        })
    }

    /// `suite := Newline Indent stmt+ (Dedent | Eof)`
    fn parse_suite(&mut self) -> Result<Stmt, ParseError> {
        self.expect_block_start()?;
        let mut statements = Vec::new();
        while !self.at_block_end() {
            statements.push(self.parse_stmt()?);
        }
        self.close_block()?;
        Ok(Stmt::Compound(statements))
    }

    /// `if_stmt := 'if' test ':' suite ['else' ':' suite]`
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.advance()?;
        let condition = self.parse_test()?;
        self.expect_char(':')?;
        let if_body = self.parse_suite()?;

        let else_body = if self.check(&Token::Else) {
            self.advance()?;
            self.expect_char(':')?;
            Some(self.parse_suite()?)
        } else {
            None
        };
        Ok(Stmt::if_else(condition, if_body, else_body))
    }

    /// `simple := 'return' [test] | 'print' [test (',' test)*] | target '=' test | test`
    fn parse_simple(&mut self) -> Result<Stmt, ParseError> {
        match self.current() {
            Token::Return => self.parse_return(),
            Token::Print => self.parse_print(),
            _ => self.parse_expr_or_assignment(),
        }
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        if self.method_depth == 0 {
            return Err(ParseError::ReturnOutsideMethod { line: self.line() });
        }
        self.advance()?;
        let value = if self.check(&Token::Newline) {
            Stmt::NoneConst
        } else {
            self.parse_test()?
        };
        Ok(Stmt::ret(value))
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        self.advance()?;
        let mut args = Vec::new();
        if !self.check(&Token::Newline) {
            args.push(self.parse_test()?);
            while self.check_char(',') {
                self.advance()?;
                args.push(self.parse_test()?);
            }
        }
        Ok(Stmt::Print(args))
    }

    /// An expression statement, or an assignment when `=` follows a
    /// plain dotted name.
    fn parse_expr_or_assignment(&mut self) -> Result<Stmt, ParseError> {
        let line = self.line();
        let expr = self.parse_test()?;
        if !self.check_char('=') {
            return Ok(expr);
        }
        let Stmt::VariableValue(mut path) = expr else {
            return Err(ParseError::InvalidAssignmentTarget { line });
        };
        self.advance()?;
        let value = self.parse_test()?;

        let Some(field) = path.pop() else {
            return Err(ParseError::InvalidAssignmentTarget { line });
        };
        if path.is_empty() {
            Ok(Stmt::assign(field, value))
        } else {
            Ok(Stmt::FieldAssignment {
                object: path,
                field,
                value: Box::new(value),
            })
        }
    }
}
