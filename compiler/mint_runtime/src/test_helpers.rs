//! Hand-written method bodies for exercising the object model without an AST.

use std::fmt;
use std::rc::Rc;

use crate::{Class, Closure, Context, ExecResult, Executable, Method, ObjectHolder};

pub type NativeFn = fn(&mut Closure, &mut dyn Context) -> ExecResult;

pub struct Native(pub NativeFn);

impl fmt::Debug for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Native")
    }
}

impl Executable for Native {
    fn execute(&self, closure: &mut Closure, ctx: &mut dyn Context) -> ExecResult {
        (self.0)(closure, ctx)
    }
}

pub fn method(name: &str, params: &[&str], body: NativeFn) -> Method {
    Method::new(
        name,
        params.iter().map(|p| (*p).to_string()).collect(),
        Box::new(Native(body)),
    )
}

pub fn class(name: &str, methods: Vec<Method>, parent: Option<Rc<Class>>) -> Rc<Class> {
    Rc::new(Class::new(name, methods, parent))
}

/// Look up a bound name in a method frame.
pub fn arg(closure: &Closure, name: &str) -> ObjectHolder {
    closure.get(name).cloned().unwrap_or_default()
}
