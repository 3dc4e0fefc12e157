//! Class and method declarations.

use std::io::BufRead;
use std::rc::Rc;

use mint_eval::{Class, Method, Stmt};
use mint_lexer::Token;

use crate::{ParseError, Parser};

const SELF_PARAM: &str = "self";

impl<R: BufRead> Parser<R> {
    /// `class_def := 'class' Id ['(' Id ')'] ':' Newline Indent method+ (Dedent | Eof)`
    ///
    /// The class is registered once its last method is parsed, so it cannot
    /// instantiate itself from its own methods.
    pub(super) fn parse_class(&mut self) -> Result<Stmt, ParseError> {
        self.advance()?;
        let name = self.expect_id()?;

        let parent = if self.check_char('(') {
            self.advance()?;
            let line = self.line();
            let parent_name = self.expect_id()?;
            let Some(parent) = self.classes.get(&parent_name).cloned() else {
                return Err(ParseError::UnknownClass {
                    line,
                    name: parent_name,
                });
            };
            self.expect_char(')')?;
            Some(parent)
        } else {
            None
        };
        self.expect_char(':')?;
        self.expect_block_start()?;

        let mut methods = vec![self.parse_method()?];
        while !self.at_block_end() {
            methods.push(self.parse_method()?);
        }
        self.close_block()?;

        let method_count = methods.len();
        let class = Rc::new(Class::new(name.clone(), methods, parent));
        tracing::debug!(
            class = %name,
            parent = class.parent().map(|p| p.name()),
            methods = method_count,
            "declared class"
        );
        self.classes.insert(name, Rc::clone(&class));
        self.declared.push(Rc::clone(&class));
        Ok(Stmt::ClassDefinition(class))
    }

    /// `method := 'def' Id '(' 'self' (',' Id)* ')' ':' suite`
    fn parse_method(&mut self) -> Result<Method, ParseError> {
        self.expect(&Token::Def)?;
        let name = self.expect_id()?;
        self.expect_char('(')?;

        let line = self.line();
        if !matches!(self.current(), Token::Id(first) if first == SELF_PARAM) {
            return Err(ParseError::MissingSelf { line, method: name });
        }
        self.advance()?;

        let mut params = Vec::new();
        while self.check_char(',') {
            self.advance()?;
            params.push(self.expect_id()?);
        }
        self.expect_char(')')?;
        self.expect_char(':')?;

        self.method_depth += 1;
        let body = self.parse_suite();
        self.method_depth -= 1;

        Ok(Method::new(name, params, Box::new(Stmt::method_body(body?))))
    }
}
