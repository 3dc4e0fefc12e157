use mint_runtime::{Closure, Context, ExecResult, Executable, ObjectHolder};

use crate::Stmt;

/// Write the arguments' renderings separated by spaces, then a newline.
///
/// The separator goes out before the next argument is rendered, so output
/// produced by a `__str__` lands after it.
pub(super) fn print(args: &[Stmt], scope: &mut Closure, ctx: &mut dyn Context) -> ExecResult {
    for (index, arg) in args.iter().enumerate() {
        let value = arg.execute(scope, ctx)?;
        if index > 0 {
            ctx.output().write_all(b" ")?;
        }
        let text = value.render(ctx)?;
        ctx.output().write_all(text.as_bytes())?;
    }
    ctx.output().write_all(b"\n")?;
    Ok(ObjectHolder::none())
}

pub(super) fn stringify(operand: &Stmt, scope: &mut Closure, ctx: &mut dyn Context) -> ExecResult {
    let value = operand.execute(scope, ctx)?;
    Ok(ObjectHolder::string(value.render(ctx)?))
}
