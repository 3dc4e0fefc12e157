//! Classes, methods and instances.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::{Closure, Context, ExecResult, ObjectHolder};

/// Something that can run against a scope and a context.
///
/// Implemented by AST nodes; a method's body is one of these.
pub trait Executable: fmt::Debug {
    fn execute(&self, closure: &mut Closure, ctx: &mut dyn Context) -> ExecResult;
}

/// A method: name, formal parameters (without `self`) and body.
#[derive(Debug)]
pub struct Method {
    pub name: String,
    pub params: Vec<String>,
    pub body: Box<dyn Executable>,
}

impl Method {
    pub fn new(name: impl Into<String>, params: Vec<String>, body: Box<dyn Executable>) -> Self {
        Method {
            name: name.into(),
            params,
            body,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A user-defined class with at most one parent.
///
/// Method names are unique within a class; a later definition with the same
/// name replaces the earlier one.
#[derive(Debug)]
pub struct Class {
    name: String,
    methods: FxHashMap<String, Method>,
    parent: Option<Rc<Class>>,
}

impl Class {
    pub fn new(name: impl Into<String>, methods: Vec<Method>, parent: Option<Rc<Class>>) -> Self {
        let methods = methods
            .into_iter()
            .map(|method| (method.name.clone(), method))
            .collect();
        Class {
            name: name.into(),
            methods,
            parent,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Rc<Class>> {
        self.parent.as_ref()
    }

    /// Find a method by name here or in the nearest ancestor that defines it.
    pub fn get_method(&self, name: &str) -> Option<&Method> {
        let mut class = self;
        loop {
            if let Some(method) = class.methods.get(name) {
                return Some(method);
            }
            class = class.parent.as_deref()?;
        }
    }

    /// Whether [`get_method`](Self::get_method) finds `name` taking exactly
    /// `arity` arguments.
    ///
    /// An override with a different arity hides the parent's method.
    pub fn has_method(&self, name: &str, arity: usize) -> bool {
        self.get_method(name)
            .is_some_and(|method| method.arity() == arity)
    }
}

/// An instance: its class plus a mutable field scope.
pub struct ClassInstance {
    class: Rc<Class>,
    fields: RefCell<Closure>,
}

impl ClassInstance {
    pub fn new(class: Rc<Class>) -> Self {
        ClassInstance {
            class,
            fields: RefCell::new(Closure::default()),
        }
    }

    #[inline]
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Read a field, if set.
    pub fn field(&self, name: &str) -> Option<ObjectHolder> {
        self.fields.borrow().get(name).cloned()
    }

    /// Set a field, replacing any previous value.
    pub fn set_field(&self, name: impl Into<String>, value: ObjectHolder) {
        self.fields.borrow_mut().insert(name.into(), value);
    }

    pub fn has_method(&self, name: &str, arity: usize) -> bool {
        self.class.has_method(name, arity)
    }
}

// Fields may point back at the instance; print names only.
impl fmt::Debug for ClassInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields.borrow();
        let mut names: Vec<&str> = fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ClassInstance")
            .field("class", &self.class.name)
            .field("fields", &names)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
