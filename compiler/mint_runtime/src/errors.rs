//! Runtime errors and the non-local control channel of execution.
//!
//! Factory functions are the public way to build errors, so messages stay
//! consistent across the evaluator.

use thiserror::Error;

use crate::ObjectHolder;

/// An error raised while executing a program.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("invalid path `{path}`: `{segment}` is {type_name}, not a class instance")]
    InvalidPath {
        path: String,
        segment: String,
        type_name: String,
    },
    #[error("method {method} taking {arity} argument(s) wasn't found in class {class}")]
    NoSuchMethod {
        method: String,
        class: String,
        arity: usize,
    },
    #[error("cannot call method {method} on {type_name}")]
    NotAnInstance { method: String, type_name: String },
    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    BinaryTypeMismatch {
        op: &'static str,
        left: String,
        right: String,
    },
    #[error("operator `{op}` cannot be applied to {operand}")]
    UnaryTypeMismatch { op: &'static str, operand: String },
    #[error("cannot compare {left} with {right}")]
    Incomparable { left: String, right: String },
    #[error("{method} must return a Bool, got {got}")]
    NonBoolComparison { method: &'static str, got: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("return outside of a method body")]
    ReturnOutsideMethod,
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Why execution of a node did not produce a normal value.
///
/// `Return` is not an error: it unwinds to the nearest method body, which
/// turns it back into a normal value.
#[derive(Debug)]
pub enum ControlAction {
    /// `return` with its value.
    Return(ObjectHolder),
    /// A runtime failure.
    Error(RuntimeError),
}

impl ControlAction {
    /// Convert into an error at a boundary no `return` may cross.
    pub fn into_error(self) -> RuntimeError {
        match self {
            ControlAction::Return(_) => RuntimeError::ReturnOutsideMethod,
            ControlAction::Error(err) => err,
        }
    }
}

impl From<RuntimeError> for ControlAction {
    fn from(err: RuntimeError) -> Self {
        ControlAction::Error(err)
    }
}

impl From<std::io::Error> for ControlAction {
    fn from(err: std::io::Error) -> Self {
        ControlAction::Error(RuntimeError::Output(err))
    }
}

/// Result of executing a node.
pub type ExecResult = Result<ObjectHolder, ControlAction>;

// Access Errors

/// Name (or dotted path) that is not bound.
#[cold]
pub fn undefined_variable(name: &str) -> RuntimeError {
    RuntimeError::UndefinedVariable {
        name: name.to_string(),
    }
}

/// Dotted path walks through something other than an instance.
#[cold]
pub fn invalid_path(path: &str, segment: &str, type_name: &str) -> RuntimeError {
    RuntimeError::InvalidPath {
        path: path.to_string(),
        segment: segment.to_string(),
        type_name: type_name.to_string(),
    }
}

// Method Call Errors

/// No method with this name and arity in the class chain.
#[cold]
pub fn no_such_method(method: &str, class: &str, arity: usize) -> RuntimeError {
    RuntimeError::NoSuchMethod {
        method: method.to_string(),
        class: class.to_string(),
        arity,
    }
}

/// Method call on a value that is not a class instance.
#[cold]
pub fn not_an_instance(method: &str, type_name: &str) -> RuntimeError {
    RuntimeError::NotAnInstance {
        method: method.to_string(),
        type_name: type_name.to_string(),
    }
}

// Operator Errors

/// Operand types a binary operator does not support.
#[cold]
pub fn binary_type_mismatch(op: &'static str, left: &str, right: &str) -> RuntimeError {
    RuntimeError::BinaryTypeMismatch {
        op,
        left: left.to_string(),
        right: right.to_string(),
    }
}

/// Operand type a unary operator does not support.
#[cold]
pub fn unary_type_mismatch(op: &'static str, operand: &str) -> RuntimeError {
    RuntimeError::UnaryTypeMismatch {
        op,
        operand: operand.to_string(),
    }
}

/// Values with no defined comparison.
#[cold]
pub fn incomparable(left: &str, right: &str) -> RuntimeError {
    RuntimeError::Incomparable {
        left: left.to_string(),
        right: right.to_string(),
    }
}

/// `__eq__` / `__lt__` returned something other than a `Bool`.
#[cold]
pub fn non_bool_comparison(method: &'static str, got: &str) -> RuntimeError {
    RuntimeError::NonBoolComparison {
        method,
        got: got.to_string(),
    }
}

/// Integer division by zero.
#[cold]
pub fn division_by_zero() -> RuntimeError {
    RuntimeError::DivisionByZero
}

/// Checked integer arithmetic overflowed.
#[cold]
pub fn integer_overflow(operation: &'static str) -> RuntimeError {
    RuntimeError::IntegerOverflow { operation }
}
