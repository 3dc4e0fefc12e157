//! Arithmetic and boolean operators.
//!
//! Every operator rejects `None` operands. Integer arithmetic is checked:
//! overflow and division by zero are runtime errors.

use mint_runtime::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, unary_type_mismatch,
};
use mint_runtime::{dunder, is_true, Context, Object, ObjectHolder, RuntimeError};

type OpResult = Result<ObjectHolder, RuntimeError>;

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> OpResult {
    result
        .map(ObjectHolder::number)
        .ok_or_else(|| integer_overflow(op_name))
}

fn numbers(op: &'static str, lhs: &ObjectHolder, rhs: &ObjectHolder) -> Result<(i64, i64), RuntimeError> {
    match (lhs.as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(binary_type_mismatch(op, lhs.type_name(), rhs.type_name())),
    }
}

/// `+`: numbers, string concatenation, or the left instance's `__add__`.
pub(crate) fn add(lhs: &ObjectHolder, rhs: &ObjectHolder, ctx: &mut dyn Context) -> OpResult {
    match (lhs.get(), rhs.get()) {
        (Some(Object::Number(a)), Some(Object::Number(b))) => {
            checked_arith(a.checked_add(*b), "addition")
        }
        (Some(Object::String(a)), Some(Object::String(b))) => {
            Ok(ObjectHolder::string(format!("{a}{b}")))
        }
        (Some(Object::Instance(instance)), Some(_)) if instance.has_method(dunder::ADD, 1) => {
            lhs.call(dunder::ADD, vec![rhs.share()], ctx)
        }
        _ => Err(binary_type_mismatch("+", lhs.type_name(), rhs.type_name())),
    }
}

pub(crate) fn sub(lhs: &ObjectHolder, rhs: &ObjectHolder) -> OpResult {
    let (a, b) = numbers("-", lhs, rhs)?;
    checked_arith(a.checked_sub(b), "subtraction")
}

pub(crate) fn mult(lhs: &ObjectHolder, rhs: &ObjectHolder) -> OpResult {
    let (a, b) = numbers("*", lhs, rhs)?;
    checked_arith(a.checked_mul(b), "multiplication")
}

/// Integer division, truncating toward zero.
pub(crate) fn div(lhs: &ObjectHolder, rhs: &ObjectHolder) -> OpResult {
    let (a, b) = numbers("/", lhs, rhs)?;
    if b == 0 {
        return Err(division_by_zero());
    }
    checked_arith(a.checked_div(b), "division")
}

pub(crate) fn and(lhs: &ObjectHolder, rhs: &ObjectHolder) -> OpResult {
    logical("and", lhs, rhs, |a, b| a && b)
}

pub(crate) fn or(lhs: &ObjectHolder, rhs: &ObjectHolder) -> OpResult {
    logical("or", lhs, rhs, |a, b| a || b)
}

pub(crate) fn not(operand: &ObjectHolder) -> OpResult {
    if operand.is_none() {
        return Err(unary_type_mismatch("not", operand.type_name()));
    }
    Ok(ObjectHolder::boolean(!is_true(operand)))
}

fn logical(
    op: &'static str,
    lhs: &ObjectHolder,
    rhs: &ObjectHolder,
    combine: fn(bool, bool) -> bool,
) -> OpResult {
    if lhs.is_none() || rhs.is_none() {
        return Err(binary_type_mismatch(op, lhs.type_name(), rhs.type_name()));
    }
    Ok(ObjectHolder::boolean(combine(is_true(lhs), is_true(rhs))))
}

