//! Tree shapes for each production.

use mint_eval::{BufferContext, Comparator, ObjectHolder, Stmt};
use pretty_assertions::assert_eq;

use crate::{parse_str, Program};

fn program(source: &str) -> Program {
    parse_str(source).unwrap()
}

/// Top-level statements of `source`.
fn statements(source: &str) -> Vec<Stmt> {
    match program(source).body {
        Stmt::Compound(statements) => statements,
        other => panic!("program body is not a block: {other:?}"),
    }
}

/// The single top-level statement of `source`.
fn single(source: &str) -> Stmt {
    let mut statements = statements(source);
    assert_eq!(statements.len(), 1, "{statements:?}");
    statements.remove(0)
}

fn output(source: &str) -> String {
    let mut ctx = BufferContext::new();
    program(source).run(&mut ctx).unwrap();
    ctx.output_text()
}

#[test]
fn empty_program() {
    assert!(statements("").is_empty());
    assert!(statements("\n# nothing here\n").is_empty());
}

#[test]
fn assignment() {
    let Stmt::Assignment { name, value } = single("x = 1\n") else {
        panic!("expected assignment");
    };
    assert_eq!(name, "x");
    assert!(matches!(*value, Stmt::Constant(ref v) if *v == ObjectHolder::number(1)));
}

#[test]
fn field_assignment_splits_path() {
    let Stmt::FieldAssignment { object, field, .. } = single("a.b.c = 2\n") else {
        panic!("expected field assignment");
    };
    assert_eq!(object, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(field, "c");
}

#[test]
fn multiplication_binds_tighter() {
    let Stmt::Add(lhs, rhs) = single("1 + 2 * 3\n") else {
        panic!("expected addition at the root");
    };
    assert!(matches!(*lhs, Stmt::Constant(_)));
    assert!(matches!(*rhs, Stmt::Mult(_, _)));
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(output("print 10 - 3 - 2\n"), "5\n");
    assert_eq!(output("print 100 / 10 / 5\n"), "2\n");
}

#[test]
fn parentheses_group() {
    assert_eq!(output("print (1 + 2) * 3\n"), "9\n");
}

#[test]
fn unary_minus_is_zero_minus() {
    let Stmt::Sub(lhs, _) = single("-x\n") else {
        panic!("expected subtraction");
    };
    assert!(matches!(*lhs, Stmt::Constant(ref v) if *v == ObjectHolder::number(0)));
    assert_eq!(output("print -2 * 3, --4\n"), "-6 4\n");
}

#[test]
fn comparison_operators() {
    let cases = [
        ("a == b\n", Comparator::Equal),
        ("a != b\n", Comparator::NotEqual),
        ("a < b\n", Comparator::Less),
        ("a > b\n", Comparator::Greater),
        ("a <= b\n", Comparator::LessOrEqual),
        ("a >= b\n", Comparator::GreaterOrEqual),
    ];
    for (source, expected) in cases {
        let Stmt::Comparison { comparator, .. } = single(source) else {
            panic!("expected comparison for {source:?}");
        };
        assert_eq!(comparator, expected, "{source:?}");
    }
}

#[test]
fn boolean_precedence() {
    // not > and > or
    let Stmt::Or(_, rhs) = single("a or not b and c\n") else {
        panic!("expected `or` at the root");
    };
    let Stmt::And(lhs, _) = *rhs else {
        panic!("expected `and` under `or`");
    };
    assert!(matches!(*lhs, Stmt::Not(_)));
}

#[test]
fn print_arguments() {
    assert!(matches!(single("print\n"), Stmt::Print(args) if args.is_empty()));
    assert!(matches!(single("print 1, 'a', x\n"), Stmt::Print(args) if args.len() == 3));
}

#[test]
fn str_call_is_stringify() {
    assert!(matches!(single("str(1)\n"), Stmt::Stringify(_)));
}

#[test]
fn if_else_blocks() {
    let Stmt::IfElse {
        if_body, else_body, ..
    } = single("if x:\n  y = 1\n  z = 2\nelse:\n  y = 3\n")
    else {
        panic!("expected if");
    };
    assert!(matches!(*if_body, Stmt::Compound(ref body) if body.len() == 2));
    assert!(else_body.is_some());
}

#[test]
fn if_without_else() {
    let statements = statements("if x:\n  y = 1\nz = 2\n");
    assert_eq!(statements.len(), 2);
    assert!(matches!(&statements[0], Stmt::IfElse { else_body: None, .. }));
}

#[test]
fn class_declaration() {
    let program = program(
        "class Point:\n  def __init__(self, x, y):\n    self.x = x\n    self.y = y\n  def norm(self):\n    return self.x * self.x + self.y * self.y\n",
    );
    assert_eq!(program.classes.len(), 1);
    let point = &program.classes[0];
    assert_eq!(point.name(), "Point");
    assert!(point.has_method("__init__", 2));
    assert!(point.has_method("norm", 0));
    assert!(point.parent().is_none());

    let body = &point.get_method("norm").unwrap().body;
    assert!(format!("{body:?}").starts_with("MethodBody"));
}

#[test]
fn subclass_refers_to_parent() {
    let program = program(
        "class A:\n  def f(self):\n    return 1\nclass B(A):\n  def g(self):\n    return 2\n",
    );
    let b = &program.classes[1];
    assert_eq!(b.parent().map(|p| p.name()), Some("A"));
    assert!(b.has_method("f", 0));
}

#[test]
fn calls_and_instances() {
    let source = "class A:\n  def f(self, n):\n    return n\na = A()\nb = a.f(1)\nc = A().f(2).g()\n";
    let statements = statements(source);
    assert_eq!(statements.len(), 4);

    let Stmt::Assignment { value, .. } = &statements[1] else {
        panic!("expected assignment");
    };
    assert!(matches!(**value, Stmt::NewInstance { ref args, .. } if args.is_empty()));

    let Stmt::Assignment { value, .. } = &statements[2] else {
        panic!("expected assignment");
    };
    let Stmt::MethodCall { object, method, args } = &**value else {
        panic!("expected method call");
    };
    assert!(matches!(**object, Stmt::VariableValue(ref path) if path == &["a".to_string()]));
    assert_eq!(method, "f");
    assert_eq!(args.len(), 1);

    let Stmt::Assignment { value, .. } = &statements[3] else {
        panic!("expected assignment");
    };
    let Stmt::MethodCall { object, method, .. } = &**value else {
        panic!("expected chained call");
    };
    assert_eq!(method, "g");
    assert!(matches!(**object, Stmt::MethodCall { .. }));
}

#[test]
fn eof_closes_nested_blocks() {
    let Stmt::IfElse { if_body, .. } = single("if x:\n  if y:\n    z = 1\n") else {
        panic!("expected if");
    };
    let Stmt::Compound(inner) = *if_body else {
        panic!("expected block");
    };
    assert!(matches!(inner.as_slice(), [Stmt::IfElse { else_body: None, .. }]));
}

#[test]
fn class_may_end_the_file() {
    let source = "class A:\n  def f(self):\n    return 7";
    let program = program(source);
    assert_eq!(program.classes.len(), 1);
    assert!(program.classes[0].has_method("f", 0));
}

#[test]
fn bare_return_yields_none() {
    let source = "class A:\n  def f(self):\n    return\nprint A().f()\n";
    assert_eq!(output(source), "None\n");
}

#[test]
fn literals() {
    assert_eq!(
        output("print 1, 'two', \"three\", True, False, None\n"),
        "1 two three True False None\n"
    );
}
