//! Programs the parser must reject.

use mint_lexer::LexErrorKind;
use pretty_assertions::assert_eq;

use crate::{parse_str, ParseError};

fn error(source: &str) -> ParseError {
    parse_str(source).unwrap_err()
}

#[test]
fn return_outside_method() {
    let err = error("x = 1\nreturn x\n");
    assert!(matches!(err, ParseError::ReturnOutsideMethod { line: 2 }), "{err}");
}

#[test]
fn return_inside_if_outside_method() {
    let err = error("if 1:\n  return 2\n");
    assert!(matches!(err, ParseError::ReturnOutsideMethod { .. }), "{err}");
}

#[test]
fn unknown_parent_class() {
    let err = error("class B(A):\n  def f(self):\n    return 1\n");
    assert!(matches!(&err, ParseError::UnknownClass { name, line: 1 } if name == "A"), "{err}");
}

#[test]
fn unknown_callee() {
    let err = error("x = Missing(1)\n");
    assert_eq!(
        err.to_string(),
        "syntax error on line 1: Missing is not a class and cannot be called"
    );
}

#[test]
fn class_cannot_instantiate_itself() {
    let err = error("class A:\n  def f(self):\n    return A()\n");
    assert!(matches!(err, ParseError::UnknownCallee { line: 3, .. }), "{err}");
}

#[test]
fn methods_need_self() {
    let err = error("class A:\n  def f(x):\n    return x\n");
    assert!(matches!(&err, ParseError::MissingSelf { method, .. } if method == "f"), "{err}");
}

#[test]
fn assignment_target_must_be_a_name() {
    let err = error("1 = 2\n");
    assert!(matches!(err, ParseError::InvalidAssignmentTarget { line: 1 }), "{err}");
    assert!(matches!(
        error("a.f() = 2\n"),
        ParseError::InvalidAssignmentTarget { .. }
    ));
}

#[test]
fn missing_colon_is_a_token_mismatch() {
    let err = error("if x\n  y = 1\n");
    let ParseError::Lex(lex) = &err else {
        panic!("expected a lexer mismatch, got {err}");
    };
    assert!(matches!(lex.kind, LexErrorKind::UnexpectedValue { .. } | LexErrorKind::UnexpectedKind { .. }));
    assert_eq!(err.line(), 1);
}

#[test]
fn missing_indent_after_colon() {
    let err = error("if x:\ny = 1\n");
    assert!(matches!(err, ParseError::Lex(_)), "{err}");
    assert_eq!(err.line(), 2);
}

#[test]
fn lexical_errors_surface() {
    let err = error("x = 'open\n");
    assert!(matches!(&err, ParseError::Lex(lex) if lex.kind == LexErrorKind::NewlineInString));
}

#[test]
fn expression_expected() {
    let err = error("x = \n");
    assert!(matches!(err, ParseError::Unexpected { expected: "an expression", .. }), "{err}");
}

#[test]
fn def_outside_class() {
    let err = error("def f(self):\n  return 1\n");
    assert!(matches!(err, ParseError::Unexpected { line: 1, .. }), "{err}");
}
