//! Mint Eval - tree-walking evaluator for the Mint interpreter.
//!
//! # Architecture
//!
//! - [`Stmt`]: the closed set of statement/expression nodes
//! - [`Comparator`]: the six comparison operators a `Comparison` node carries
//! - `exec`: one `execute` per node, dispatched from `Executable for Stmt`
//! - `operators`: arithmetic and boolean operators over runtime values
//! - [`run_program`]: top-level entry, fresh global scope, no stray `return`
//!
//! Values, classes and the output context come from `mint_runtime`.
//! `return` travels as `ControlAction::Return` in the `Err` channel of
//! [`ExecResult`] until a `MethodBody` node turns it back into a value.

mod ast;
mod exec;
mod operators;
mod stack;

pub use ast::{Comparator, Stmt};
pub use mint_runtime::{
    BufferContext, Class, ClassInstance, Closure, Context, ControlAction, ExecResult, Executable,
    Method, Object, ObjectHolder, RuntimeError, StreamContext,
};
pub use stack::ensure_sufficient_stack;

/// Execute a whole program in a fresh global scope.
///
/// Returns the global scope so callers can inspect the bindings the program
/// left behind. A `return` that reaches this level is an error.
pub fn run_program(program: &Stmt, ctx: &mut dyn Context) -> Result<Closure, RuntimeError> {
    let mut globals = Closure::default();
    program
        .execute(&mut globals, ctx)
        .map_err(ControlAction::into_error)?;
    std::io::Write::flush(ctx.output())?;
    Ok(globals)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
