//! Equality and ordering.
//!
//! Only [`equal`] and [`less`] inspect values; the other four are derived
//! from them and short-circuit in the same order, so a class defining only
//! `__lt__` can still answer some `>` queries.

use crate::errors::{incomparable, non_bool_comparison, RuntimeError};
use crate::{dunder, Context, Object, ObjectHolder};

/// `==`: same-typed primitives by value, two `None`s are equal, instances
/// through the left operand's `__eq__`.
pub fn equal(
    lhs: &ObjectHolder,
    rhs: &ObjectHolder,
    ctx: &mut dyn Context,
) -> Result<bool, RuntimeError> {
    match (lhs.get(), rhs.get()) {
        (None, None) => Ok(true),
        (Some(Object::Bool(a)), Some(Object::Bool(b))) => Ok(a == b),
        (Some(Object::Number(a)), Some(Object::Number(b))) => Ok(a == b),
        (Some(Object::String(a)), Some(Object::String(b))) => Ok(a == b),
        (Some(Object::Instance(_)), Some(Object::Instance(_))) => {
            dispatch(lhs, dunder::EQ, rhs, ctx)
        }
        _ => Err(incomparable(lhs.type_name(), rhs.type_name())),
    }
}

/// `<`: same-typed primitives by natural order (`False < True`, strings
/// lexicographically by bytes), instances through the left operand's `__lt__`.
pub fn less(
    lhs: &ObjectHolder,
    rhs: &ObjectHolder,
    ctx: &mut dyn Context,
) -> Result<bool, RuntimeError> {
    match (lhs.get(), rhs.get()) {
        (Some(Object::Bool(a)), Some(Object::Bool(b))) => Ok(a < b),
        (Some(Object::Number(a)), Some(Object::Number(b))) => Ok(a < b),
        (Some(Object::String(a)), Some(Object::String(b))) => Ok(a < b),
        (Some(Object::Instance(instance)), _) if instance.has_method(dunder::LT, 1) => {
            dispatch(lhs, dunder::LT, rhs, ctx)
        }
        _ => Err(incomparable(lhs.type_name(), rhs.type_name())),
    }
}

pub fn not_equal(
    lhs: &ObjectHolder,
    rhs: &ObjectHolder,
    ctx: &mut dyn Context,
) -> Result<bool, RuntimeError> {
    Ok(!equal(lhs, rhs, ctx)?)
}

pub fn greater(
    lhs: &ObjectHolder,
    rhs: &ObjectHolder,
    ctx: &mut dyn Context,
) -> Result<bool, RuntimeError> {
    Ok(!less(lhs, rhs, ctx)? && not_equal(lhs, rhs, ctx)?)
}

pub fn less_or_equal(
    lhs: &ObjectHolder,
    rhs: &ObjectHolder,
    ctx: &mut dyn Context,
) -> Result<bool, RuntimeError> {
    Ok(!greater(lhs, rhs, ctx)?)
}

pub fn greater_or_equal(
    lhs: &ObjectHolder,
    rhs: &ObjectHolder,
    ctx: &mut dyn Context,
) -> Result<bool, RuntimeError> {
    Ok(!less(lhs, rhs, ctx)?)
}

/// Call a one-argument predicate method and insist on a `Bool` result.
fn dispatch(
    receiver: &ObjectHolder,
    method: &'static str,
    arg: &ObjectHolder,
    ctx: &mut dyn Context,
) -> Result<bool, RuntimeError> {
    let result = receiver.call(method, vec![arg.share()], ctx)?;
    result
        .as_bool()
        .ok_or_else(|| non_bool_comparison(method, result.type_name()))
}
