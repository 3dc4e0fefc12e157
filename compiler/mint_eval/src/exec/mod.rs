//! Node execution.
//!
//! `Executable for Stmt` is the single dispatch point; each node kind
//! delegates to a helper in one of the submodules:
//! - `access`: variable paths, assignment
//! - `control`: if/else, blocks, return and method bodies
//! - `call`: classes, instance creation and method calls
//! - `print`: `print` and `str`

mod access;
mod call;
mod control;
mod print;

use mint_runtime::{Closure, Context, ExecResult, Executable, ObjectHolder};

use crate::operators;
use crate::stack::ensure_sufficient_stack;
use crate::Stmt;

impl Executable for Stmt {
    fn execute(&self, scope: &mut Closure, ctx: &mut dyn Context) -> ExecResult {
        ensure_sufficient_stack(|| self.dispatch(scope, ctx))
    }
}

impl Stmt {
    fn dispatch(&self, scope: &mut Closure, ctx: &mut dyn Context) -> ExecResult {
        match self {
            Stmt::Constant(value) => Ok(value.share()),
            Stmt::NoneConst => Ok(ObjectHolder::none()),
            Stmt::VariableValue(path) => Ok(access::resolve(path, scope)?),
            Stmt::Assignment { name, value } => access::assign(name, value, scope, ctx),
            Stmt::FieldAssignment {
                object,
                field,
                value,
            } => access::assign_field(object, field, value, scope, ctx),
            Stmt::Add(lhs, rhs) => {
                let (lhs, rhs) = operands(lhs, rhs, scope, ctx)?;
                Ok(operators::add(&lhs, &rhs, ctx)?)
            }
            Stmt::Sub(lhs, rhs) => {
                let (lhs, rhs) = operands(lhs, rhs, scope, ctx)?;
                Ok(operators::sub(&lhs, &rhs)?)
            }
            Stmt::Mult(lhs, rhs) => {
                let (lhs, rhs) = operands(lhs, rhs, scope, ctx)?;
                Ok(operators::mult(&lhs, &rhs)?)
            }
            Stmt::Div(lhs, rhs) => {
                let (lhs, rhs) = operands(lhs, rhs, scope, ctx)?;
                Ok(operators::div(&lhs, &rhs)?)
            }
            Stmt::And(lhs, rhs) => {
                let (lhs, rhs) = operands(lhs, rhs, scope, ctx)?;
                Ok(operators::and(&lhs, &rhs)?)
            }
            Stmt::Or(lhs, rhs) => {
                let (lhs, rhs) = operands(lhs, rhs, scope, ctx)?;
                Ok(operators::or(&lhs, &rhs)?)
            }
            Stmt::Not(operand) => {
                let operand = operand.execute(scope, ctx)?;
                Ok(operators::not(&operand)?)
            }
            Stmt::Comparison {
                comparator,
                lhs,
                rhs,
            } => {
                let (lhs, rhs) = operands(lhs, rhs, scope, ctx)?;
                let result = comparator.apply(&lhs, &rhs, ctx)?;
                Ok(ObjectHolder::boolean(result))
            }
            Stmt::IfElse {
                condition,
                if_body,
                else_body,
            } => control::if_else(condition, if_body, else_body.as_deref(), scope, ctx),
            Stmt::Compound(statements) => control::compound(statements, scope, ctx),
            Stmt::Return(value) => control::ret(value, scope, ctx),
            Stmt::MethodBody(body) => control::method_body(body, scope, ctx),
            Stmt::ClassDefinition(class) => Ok(call::define_class(class, scope)),
            Stmt::NewInstance { class, args } => call::new_instance(class, args, scope, ctx),
            Stmt::Print(args) => print::print(args, scope, ctx),
            Stmt::Stringify(operand) => print::stringify(operand, scope, ctx),
            Stmt::MethodCall {
                object,
                method,
                args,
            } => call::method_call(object, method, args, scope, ctx),
        }
    }
}

/// Evaluate both operands, left first. Binary operators never short-circuit.
fn operands(
    lhs: &Stmt,
    rhs: &Stmt,
    scope: &mut Closure,
    ctx: &mut dyn Context,
) -> Result<(ObjectHolder, ObjectHolder), mint_runtime::ControlAction> {
    let lhs = lhs.execute(scope, ctx)?;
    let rhs = rhs.execute(scope, ctx)?;
    Ok((lhs, rhs))
}

/// Evaluate argument expressions left to right.
fn arguments(
    args: &[Stmt],
    scope: &mut Closure,
    ctx: &mut dyn Context,
) -> Result<Vec<ObjectHolder>, mint_runtime::ControlAction> {
    args.iter().map(|arg| arg.execute(scope, ctx)).collect()
}
