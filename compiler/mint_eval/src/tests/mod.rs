//! Evaluator tests, grouped by node family.

mod control_tests;

use mint_runtime::{BufferContext, Closure, ExecResult, Executable};

use crate::Stmt;

/// Execute `stmt` in `scope` with a fresh output buffer.
fn exec_in(stmt: &Stmt, scope: &mut Closure) -> (ExecResult, String) {
    let mut ctx = BufferContext::new();
    let result = stmt.execute(scope, &mut ctx);
    (result, ctx.output_text())
}

/// Execute `stmt` in an empty scope and return its value.
fn eval(stmt: &Stmt) -> ExecResult {
    exec_in(stmt, &mut Closure::default()).0
}

fn boxed(stmt: Stmt) -> Box<Stmt> {
    Box::new(stmt)
}

/// Dotted-path shorthands; the parser builds these nodes from tokens.
impl Stmt {
    /// A variable reference, e.g. `"self.x"`.
    pub(crate) fn variable(dotted: &str) -> Self {
        Stmt::VariableValue(dotted.split('.').map(str::to_string).collect())
    }

    pub(crate) fn assign_field(object: &str, field: &str, value: Stmt) -> Self {
        Stmt::FieldAssignment {
            object: object.split('.').map(str::to_string).collect(),
            field: field.to_string(),
            value: Box::new(value),
        }
    }
}
