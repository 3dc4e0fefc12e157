//! Conditionals, blocks and non-local return.

use mint_runtime::{is_true, Closure, Context, ControlAction, ExecResult, Executable, ObjectHolder};

use crate::Stmt;

pub(super) fn if_else(
    condition: &Stmt,
    if_body: &Stmt,
    else_body: Option<&Stmt>,
    scope: &mut Closure,
    ctx: &mut dyn Context,
) -> ExecResult {
    let condition = condition.execute(scope, ctx)?;
    if is_true(&condition) {
        if_body.execute(scope, ctx)
    } else if let Some(else_body) = else_body {
        else_body.execute(scope, ctx)
    } else {
        Ok(ObjectHolder::none())
    }
}

pub(super) fn compound(statements: &[Stmt], scope: &mut Closure, ctx: &mut dyn Context) -> ExecResult {
    for statement in statements {
        statement.execute(scope, ctx)?;
    }
    Ok(ObjectHolder::none())
}

pub(super) fn ret(value: &Stmt, scope: &mut Closure, ctx: &mut dyn Context) -> ExecResult {
    let value = value.execute(scope, ctx)?;
    Err(ControlAction::Return(value))
}

/// Run a method body; a `return` anywhere inside becomes its value.
pub(super) fn method_body(body: &Stmt, scope: &mut Closure, ctx: &mut dyn Context) -> ExecResult {
    match body.execute(scope, ctx) {
        Err(ControlAction::Return(value)) => Ok(value),
        other => other,
    }
}
