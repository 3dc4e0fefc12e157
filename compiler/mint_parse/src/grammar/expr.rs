//! Expressions, from lowest to highest precedence.
//!
//! Binary operators are left-associative. Comparisons do not chain.

use std::io::BufRead;
use std::rc::Rc;

use mint_eval::{ensure_sufficient_stack, Comparator, Stmt};
use mint_lexer::Token;

use crate::{ParseError, Parser};

/// Name of the built-in string conversion.
const STR_BUILTIN: &str = "str";

impl<R: BufRead> Parser<R> {
    /// `test := and_test ('or' and_test)*`
    pub(super) fn parse_test(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| {
            let mut lhs = self.parse_and()?;
            while self.check(&Token::Or) {
                self.advance()?;
                let rhs = self.parse_and()?;
                lhs = Stmt::Or(Box::new(lhs), Box::new(rhs));
            }
            Ok(lhs)
        })
    }

    fn parse_and(&mut self) -> Result<Stmt, ParseError> {
        let mut lhs = self.parse_not()?;
        while self.check(&Token::And) {
            self.advance()?;
            let rhs = self.parse_not()?;
            lhs = Stmt::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_not(&mut self) -> Result<Stmt, ParseError> {
        if self.check(&Token::Not) {
            self.advance()?;
            let operand = ensure_sufficient_stack(|| self.parse_not())?;
            return Ok(Stmt::Not(Box::new(operand)));
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Stmt, ParseError> {
        let lhs = self.parse_sum()?;
        let comparator = match self.current() {
            Token::Char('<') => Comparator::Less,
            Token::Char('>') => Comparator::Greater,
            Token::Eq => Comparator::Equal,
            Token::NotEq => Comparator::NotEqual,
            Token::LessOrEq => Comparator::LessOrEqual,
            Token::GreaterOrEq => Comparator::GreaterOrEqual,
            _ => return Ok(lhs),
        };
        self.advance()?;
        let rhs = self.parse_sum()?;
        Ok(Stmt::compare(comparator, lhs, rhs))
    }

    /// `expr := term (('+'|'-') term)*`
    fn parse_sum(&mut self) -> Result<Stmt, ParseError> {
        let mut lhs = self.parse_term()?;
        loop {
            let make: fn(Box<Stmt>, Box<Stmt>) -> Stmt = match self.current() {
                Token::Char('+') => Stmt::Add,
                Token::Char('-') => Stmt::Sub,
                _ => return Ok(lhs),
            };
            self.advance()?;
            let rhs = self.parse_term()?;
            lhs = make(Box::new(lhs), Box::new(rhs));
        }
    }

    /// `term := unary (('*'|'/') unary)*`
    fn parse_term(&mut self) -> Result<Stmt, ParseError> {
        let mut lhs = self.parse_unary()?;
        loop {
            let make: fn(Box<Stmt>, Box<Stmt>) -> Stmt = match self.current() {
                Token::Char('*') => Stmt::Mult,
                Token::Char('/') => Stmt::Div,
                _ => return Ok(lhs),
            };
            self.advance()?;
            let rhs = self.parse_unary()?;
            lhs = make(Box::new(lhs), Box::new(rhs));
        }
    }

    /// Unary minus is sugar for `0 - operand`.
    fn parse_unary(&mut self) -> Result<Stmt, ParseError> {
        if self.check_char('-') {
            self.advance()?;
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Stmt::Sub(Box::new(Stmt::number(0)), Box::new(operand)));
        }
        self.parse_postfix()
    }

    /// `postfix := atom ('.' Id '(' args ')')*`
    fn parse_postfix(&mut self) -> Result<Stmt, ParseError> {
        let mut expr = self.parse_atom()?;
        while self.check_char('.') {
            self.advance()?;
            let method = self.expect_id()?;
            if !self.check_char('(') {
                return Err(self.unexpected("`(` after method name"));
            }
            let args = self.parse_args()?;
            expr = Stmt::call(expr, method, args);
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<Stmt, ParseError> {
        let atom = match self.current() {
            Token::Number(value) => Stmt::number(*value),
            Token::String(value) => Stmt::string(value.as_str()),
            Token::True => Stmt::boolean(true),
            Token::False => Stmt::boolean(false),
            Token::None => Stmt::NoneConst,
            Token::Char('(') => {
                self.advance()?;
                let inner = self.parse_test()?;
                self.expect_char(')')?;
                return Ok(inner);
            }
            Token::Id(_) => return self.parse_name(),
            _ => return Err(self.unexpected("an expression")),
        };
        self.advance()?;
        Ok(atom)
    }

    /// A dotted name, optionally called:
    /// - `a.b.c` reads a variable or field
    /// - `a.b.m(args)` calls method `m` on `a.b`
    /// - `str(x)` converts to a string
    /// - `Name(args)` creates an instance of a declared class
    fn parse_name(&mut self) -> Result<Stmt, ParseError> {
        let line = self.line();
        let mut path = vec![self.expect_id()?];
        while self.check_char('.') {
            self.advance()?;
            path.push(self.expect_id()?);
        }
        if !self.check_char('(') {
            return Ok(Stmt::VariableValue(path));
        }

        if path.len() > 1 {
            let method = path.pop().unwrap_or_default();
            let args = self.parse_args()?;
            return Ok(Stmt::call(Stmt::VariableValue(path), method, args));
        }

        let name = path.pop().unwrap_or_default();
        if name == STR_BUILTIN {
            self.expect_char('(')?;
            let operand = self.parse_test()?;
            self.expect_char(')')?;
            return Ok(Stmt::Stringify(Box::new(operand)));
        }
        let Some(class) = self.classes.get(&name).map(Rc::clone) else {
            return Err(ParseError::UnknownCallee { line, name });
        };
        let args = self.parse_args()?;
        Ok(Stmt::NewInstance { class, args })
    }

    /// `'(' [test (',' test)*] ')'`
    fn parse_args(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect_char('(')?;
        let mut args = Vec::new();
        if !self.check_char(')') {
            args.push(self.parse_test()?);
            while self.check_char(',') {
                self.advance()?;
                args.push(self.parse_test()?);
            }
        }
        self.expect_char(')')?;
        Ok(args)
    }
}
