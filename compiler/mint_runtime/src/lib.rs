//! Mint Runtime - object model for the Mint interpreter.
//!
//! # Architecture
//!
//! - [`ObjectHolder`]: nullable, reference-counted handle; empty is `None`
//! - [`Object`]: `Bool`, `Number`, `String`, `Class`, `Instance`
//! - [`Class`] / [`Method`]: single-inheritance method tables, dispatch by
//!   name and exact arity
//! - [`Closure`]: one scope (globals, a method frame, or instance fields)
//! - [`Context`]: the output sink shared by a whole program run
//! - [`equal`], [`less`] and the derived comparisons
//!
//! Execution of method bodies goes through the [`Executable`] trait, which the
//! AST crate implements; this crate never depends on concrete node types.
//!
//! # Ownership
//!
//! Objects are `Rc`-shared. Instances that reference each other (or
//! themselves) through fields form cycles that are never reclaimed; programs
//! are short-lived, so this leak is accepted.

mod class;
mod compare;
mod context;
pub mod errors;
mod object;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod test_helpers;

use rustc_hash::FxHashMap;

pub use class::{Class, ClassInstance, Executable, Method};
pub use compare::{equal, greater, greater_or_equal, less, less_or_equal, not_equal};
pub use context::{BufferContext, Context, StreamContext};
pub use errors::{ControlAction, ExecResult, RuntimeError};
pub use object::{is_true, Object, ObjectHolder};

/// A single scope: name to value, keys unique, order irrelevant.
pub type Closure = FxHashMap<String, ObjectHolder>;

/// Name the receiver is bound to inside a method frame.
pub const SELF_NAME: &str = "self";

/// Dunder method names the runtime dispatches to.
pub mod dunder {
    /// Constructor, called by instance creation when the arity matches.
    pub const INIT: &str = "__init__";
    /// Textual rendering.
    pub const STR: &str = "__str__";
    /// Equality.
    pub const EQ: &str = "__eq__";
    /// Ordering.
    pub const LT: &str = "__lt__";
    /// Addition.
    pub const ADD: &str = "__add__";
}
