use mint_runtime::{BufferContext, Closure, ControlAction, ObjectHolder, RuntimeError};
use pretty_assertions::assert_eq;

use super::{boxed, eval, exec_in};
use crate::{run_program, Comparator, Stmt};

fn print(args: Vec<Stmt>) -> Stmt {
    Stmt::Print(args)
}

#[test]
fn if_takes_the_true_branch() {
    let stmt = Stmt::if_else(
        Stmt::number(1),
        print(vec![Stmt::string("yes")]),
        Some(print(vec![Stmt::string("no")])),
    );
    let (result, out) = exec_in(&stmt, &mut Closure::default());
    assert!(result.unwrap().is_none());
    assert_eq!(out, "yes\n");
}

#[test]
fn else_runs_on_falsy_condition() {
    let stmt = Stmt::if_else(
        Stmt::string(""),
        Stmt::number(1),
        Some(Stmt::number(2)),
    );
    assert_eq!(eval(&stmt).unwrap(), ObjectHolder::number(2));
}

#[test]
fn missing_else_yields_none() {
    let stmt = Stmt::if_else(Stmt::boolean(false), Stmt::number(1), None);
    assert!(eval(&stmt).unwrap().is_none());
}

#[test]
fn compound_runs_in_order_and_yields_none() {
    let stmt = Stmt::Compound(vec![
        print(vec![Stmt::number(1)]),
        print(vec![Stmt::number(2)]),
        Stmt::number(3),
    ]);
    let (result, out) = exec_in(&stmt, &mut Closure::default());
    assert!(result.unwrap().is_none());
    assert_eq!(out, "1\n2\n");
}

#[test]
fn return_unwinds_to_method_body() {
    // if True: (print "a"; return 1; print "b") ; print "c"
    let body = Stmt::Compound(vec![
        Stmt::if_else(
            Stmt::boolean(true),
            Stmt::Compound(vec![
                print(vec![Stmt::string("a")]),
                Stmt::ret(Stmt::number(1)),
                print(vec![Stmt::string("b")]),
            ]),
            None,
        ),
        print(vec![Stmt::string("c")]),
    ]);
    let (result, out) = exec_in(&Stmt::method_body(body), &mut Closure::default());
    assert_eq!(result.unwrap(), ObjectHolder::number(1));
    assert_eq!(out, "a\n");
}

#[test]
fn method_body_without_return_yields_body_value() {
    let stmt = Stmt::method_body(Stmt::Compound(vec![Stmt::number(1)]));
    assert!(eval(&stmt).unwrap().is_none());
}

#[test]
fn return_without_method_body_propagates() {
    let result = eval(&Stmt::ret(Stmt::number(1)));
    assert!(matches!(result, Err(ControlAction::Return(_))));
}

#[test]
fn errors_pass_through_method_body() {
    let stmt = Stmt::method_body(Stmt::variable("missing"));
    assert!(matches!(eval(&stmt), Err(ControlAction::Error(_))));
}

#[test]
fn run_program_rejects_stray_return() {
    let program = Stmt::Compound(vec![Stmt::ret(Stmt::NoneConst)]);
    let err = run_program(&program, &mut BufferContext::new()).unwrap_err();
    assert!(matches!(err, RuntimeError::ReturnOutsideMethod));
}

#[test]
fn run_program_returns_globals() {
    let program = Stmt::Compound(vec![
        Stmt::assign("x", Stmt::number(2)),
        Stmt::if_else(
            Stmt::compare(Comparator::Greater, Stmt::variable("x"), Stmt::number(1)),
            print(vec![Stmt::string("big")]),
            Some(print(vec![Stmt::string("small")])),
        ),
    ]);
    let mut ctx = BufferContext::new();
    let globals = run_program(&program, &mut ctx).unwrap();
    assert_eq!(ctx.output_text(), "big\n");
    assert_eq!(globals.get("x"), Some(&ObjectHolder::number(2)));
}

#[test]
fn print_separates_with_spaces() {
    let stmt = print(vec![
        Stmt::number(1),
        Stmt::string("two"),
        Stmt::NoneConst,
        Stmt::boolean(false),
    ]);
    let (_, out) = exec_in(&stmt, &mut Closure::default());
    assert_eq!(out, "1 two None False\n");
}

#[test]
fn print_without_arguments_is_a_newline() {
    let (_, out) = exec_in(&print(Vec::new()), &mut Closure::default());
    assert_eq!(out, "\n");
}

#[test]
fn stringify_renders() {
    assert_eq!(
        eval(&Stmt::Stringify(boxed(Stmt::number(-5)))).unwrap(),
        ObjectHolder::string("-5")
    );
    assert_eq!(
        eval(&Stmt::Stringify(boxed(Stmt::NoneConst))).unwrap(),
        ObjectHolder::string("None")
    );
}

#[test]
fn deep_nesting_does_not_overflow() {
    let mut stmt = Stmt::number(0);
    for _ in 0..50_000 {
        stmt = Stmt::Add(boxed(stmt), boxed(Stmt::number(1)));
    }
    assert_eq!(eval(&stmt).unwrap(), ObjectHolder::number(50_000));
    // dropping recurses once per level on the test thread's small stack
    std::mem::forget(stmt);
}
