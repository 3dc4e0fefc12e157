//! Class definition, instantiation and method calls.

use std::rc::Rc;

use mint_runtime::{dunder, Class, Closure, Context, ExecResult, Executable, ObjectHolder};

use super::arguments;
use crate::Stmt;

pub(super) fn define_class(class: &Rc<Class>, scope: &mut Closure) -> ObjectHolder {
    let holder = ObjectHolder::class(Rc::clone(class));
    scope.insert(class.name().to_string(), holder.share());
    holder
}

/// Create an instance and run a matching `__init__`.
///
/// Arguments are evaluated only when such an `__init__` exists. The caller's
/// scope is left untouched.
pub(super) fn new_instance(
    class: &Rc<Class>,
    args: &[Stmt],
    scope: &mut Closure,
    ctx: &mut dyn Context,
) -> ExecResult {
    let instance = ObjectHolder::instance(Rc::clone(class));
    tracing::trace!(class = class.name(), "new instance");
    if class.has_method(dunder::INIT, args.len()) {
        let args = arguments(args, scope, ctx)?;
        instance.call(dunder::INIT, args, ctx)?;
    }
    Ok(instance)
}

/// `object.method(args)`. A receiver that is not an instance, or has no
/// method of that name and arity, yields `None` without evaluating the
/// arguments.
pub(super) fn method_call(
    object: &Stmt,
    method: &str,
    args: &[Stmt],
    scope: &mut Closure,
    ctx: &mut dyn Context,
) -> ExecResult {
    let receiver = object.execute(scope, ctx)?;
    let callable = receiver
        .as_instance()
        .is_some_and(|instance| instance.has_method(method, args.len()));
    if !callable {
        tracing::debug!(method, receiver = receiver.type_name(), "method call skipped");
        return Ok(ObjectHolder::none());
    }
    let args = arguments(args, scope, ctx)?;
    Ok(receiver.call(method, args, ctx)?)
}
