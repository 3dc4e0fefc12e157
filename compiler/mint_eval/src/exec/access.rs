//! Variable paths and assignment.

use mint_runtime::errors::{invalid_path, undefined_variable};
use mint_runtime::{Closure, Context, ExecResult, Executable, ObjectHolder, RuntimeError};

use crate::Stmt;

/// Resolve a dotted path: the first segment in `scope`, every later one in
/// the fields of the instance the previous segment produced.
pub(super) fn resolve(path: &[String], scope: &Closure) -> Result<ObjectHolder, RuntimeError> {
    let Some((first, rest)) = path.split_first() else {
        return Err(undefined_variable(""));
    };
    let mut current = scope
        .get(first)
        .cloned()
        .ok_or_else(|| undefined_variable(&path.join(".")))?;

    for (index, segment) in rest.iter().enumerate() {
        let Some(instance) = current.as_instance() else {
            return Err(invalid_path(
                &path.join("."),
                &path[index],
                current.type_name(),
            ));
        };
        let next = instance
            .field(segment)
            .ok_or_else(|| undefined_variable(&path.join(".")))?;
        current = next;
    }
    Ok(current)
}

pub(super) fn assign(
    name: &str,
    value: &Stmt,
    scope: &mut Closure,
    ctx: &mut dyn Context,
) -> ExecResult {
    let value = value.execute(scope, ctx)?;
    scope.insert(name.to_string(), value.share());
    Ok(value)
}

/// Store into a field of the instance `object` resolves to.
///
/// The target is resolved before the right-hand side runs.
pub(super) fn assign_field(
    object: &[String],
    field: &str,
    value: &Stmt,
    scope: &mut Closure,
    ctx: &mut dyn Context,
) -> ExecResult {
    let target = resolve(object, scope)?;
    let Some(instance) = target.as_instance() else {
        let segment = object.last().map_or("", String::as_str);
        let full = format!("{}.{field}", object.join("."));
        return Err(invalid_path(&full, segment, target.type_name()).into());
    };

    let value = value.execute(scope, ctx)?;
    tracing::trace!(class = instance.class().name(), field, "field assignment");
    instance.set_field(field, value.share());
    Ok(value)
}
