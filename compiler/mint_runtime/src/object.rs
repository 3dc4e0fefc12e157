//! Runtime values and the nullable handle that carries them.

use std::fmt;
use std::rc::Rc;

use crate::class::{Class, ClassInstance};
use crate::errors::{no_such_method, not_an_instance, ControlAction, RuntimeError};
use crate::{dunder, Closure, Context, SELF_NAME};

/// A runtime value.
#[derive(Debug)]
pub enum Object {
    Bool(bool),
    Number(i64),
    String(String),
    Class(Rc<Class>),
    Instance(ClassInstance),
}

/// Nullable handle to an [`Object`]. The empty handle is Mint's `None`.
///
/// Cloning (or [`share`](Self::share)) yields another handle to the same
/// object, so field writes through one are seen through all of them.
#[derive(Clone, Default)]
pub struct ObjectHolder(Option<Rc<Object>>);

impl ObjectHolder {
    /// Take ownership of a freshly built object.
    pub fn own(object: Object) -> Self {
        ObjectHolder(Some(Rc::new(object)))
    }

    /// Another handle to the same live object.
    ///
    /// This is how a receiver is bound as `self` for a method call.
    #[inline]
    pub fn share(&self) -> Self {
        self.clone()
    }

    #[inline]
    pub fn none() -> Self {
        ObjectHolder(None)
    }

    pub fn number(value: i64) -> Self {
        Self::own(Object::Number(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::own(Object::String(value.into()))
    }

    pub fn boolean(value: bool) -> Self {
        Self::own(Object::Bool(value))
    }

    pub fn class(class: Rc<Class>) -> Self {
        Self::own(Object::Class(class))
    }

    /// A new, field-less instance of `class`.
    pub fn instance(class: Rc<Class>) -> Self {
        Self::own(Object::Instance(ClassInstance::new(class)))
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub fn get(&self) -> Option<&Object> {
        self.0.as_deref()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.get() {
            Some(Object::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self.get() {
            Some(Object::Number(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.get() {
            Some(Object::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&ClassInstance> {
        match self.get() {
            Some(Object::Instance(instance)) => Some(instance),
            _ => None,
        }
    }

    /// Whether both handles point at the same object. Two `None`s are
    /// identical.
    pub fn ptr_eq(&self, other: &ObjectHolder) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Name of the value's type, used in error messages. Instances report
    /// their class name.
    pub fn type_name(&self) -> &str {
        match self.get() {
            None => "None",
            Some(Object::Bool(_)) => "Bool",
            Some(Object::Number(_)) => "Number",
            Some(Object::String(_)) => "String",
            Some(Object::Class(_)) => "Class",
            Some(Object::Instance(instance)) => instance.class().name(),
        }
    }

    /// Textual form of the value, as `print` and `str` produce it.
    ///
    /// Instances with a zero-argument `__str__` render as that method's
    /// result; other instances render as an address-like identifier.
    pub fn render(&self, ctx: &mut dyn Context) -> Result<String, RuntimeError> {
        let Some(rc) = &self.0 else {
            return Ok("None".to_string());
        };
        let text = match &**rc {
            Object::Bool(true) => "True".to_string(),
            Object::Bool(false) => "False".to_string(),
            Object::Number(value) => value.to_string(),
            Object::String(value) => value.clone(),
            Object::Class(class) => format!("Class {}", class.name()),
            Object::Instance(instance) => {
                if instance.has_method(dunder::STR, 0) {
                    return self.call(dunder::STR, Vec::new(), ctx)?.render(ctx);
                }
                format!("<{} object at {:p}>", instance.class().name(), Rc::as_ptr(rc))
            }
        };
        Ok(text)
    }

    /// Call `method` on this instance with exactly `args.len()` arguments.
    ///
    /// A fresh frame binds `self` to this handle and each parameter to its
    /// argument; the method body runs in that frame.
    #[tracing::instrument(level = "debug", skip(self, args, ctx), fields(arity = args.len()))]
    pub fn call(
        &self,
        method: &str,
        args: Vec<ObjectHolder>,
        ctx: &mut dyn Context,
    ) -> Result<ObjectHolder, RuntimeError> {
        let Some(instance) = self.as_instance() else {
            return Err(not_an_instance(method, self.type_name()));
        };
        let class = instance.class();
        let Some(found) = class
            .get_method(method)
            .filter(|found| found.params.len() == args.len())
        else {
            return Err(no_such_method(method, class.name(), args.len()));
        };

        let mut frame = Closure::default();
        frame.insert(SELF_NAME.to_string(), self.share());
        for (param, arg) in found.params.iter().zip(args) {
            frame.insert(param.clone(), arg);
        }

        // Bodies built by the parser catch their own `return`; one that
        // escapes here never passed through a method body.
        found
            .body
            .execute(&mut frame, ctx)
            .map_err(ControlAction::into_error)
    }
}

/// Primitive values compare by value; classes and instances by identity.
impl PartialEq for ObjectHolder {
    fn eq(&self, other: &Self) -> bool {
        match (self.get(), other.get()) {
            (None, None) => true,
            (Some(Object::Bool(a)), Some(Object::Bool(b))) => a == b,
            (Some(Object::Number(a)), Some(Object::Number(b))) => a == b,
            (Some(Object::String(a)), Some(Object::String(b))) => a == b,
            (Some(Object::Class(a)), Some(Object::Class(b))) => Rc::ptr_eq(a, b),
            (Some(Object::Instance(_)), Some(Object::Instance(_))) => self.ptr_eq(other),
            _ => false,
        }
    }
}

impl fmt::Debug for ObjectHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            None => f.write_str("None"),
            Some(object) => fmt::Debug::fmt(object, f),
        }
    }
}

/// Truthiness: non-zero numbers, non-empty strings and `True`.
///
/// `None`, classes and instances are all false.
pub fn is_true(value: &ObjectHolder) -> bool {
    match value.get() {
        Some(Object::Bool(value)) => *value,
        Some(Object::Number(value)) => *value != 0,
        Some(Object::String(value)) => !value.is_empty(),
        Some(Object::Class(_) | Object::Instance(_)) | None => false,
    }
}
