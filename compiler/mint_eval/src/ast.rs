//! Statement and expression nodes.
//!
//! Mint does not distinguish statements from expressions: every node
//! executes to a value (often `None`).

use std::rc::Rc;

use mint_runtime::{
    equal, greater, greater_or_equal, less, less_or_equal, not_equal, Class, Context,
    ObjectHolder, RuntimeError,
};

/// Comparison operator carried by [`Stmt::Comparison`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparator {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
}

impl Comparator {
    /// Apply the comparison; instances may dispatch to `__eq__`/`__lt__`.
    pub fn apply(
        self,
        lhs: &ObjectHolder,
        rhs: &ObjectHolder,
        ctx: &mut dyn Context,
    ) -> Result<bool, RuntimeError> {
        match self {
            Comparator::Equal => equal(lhs, rhs, ctx),
            Comparator::NotEqual => not_equal(lhs, rhs, ctx),
            Comparator::Less => less(lhs, rhs, ctx),
            Comparator::Greater => greater(lhs, rhs, ctx),
            Comparator::LessOrEqual => less_or_equal(lhs, rhs, ctx),
            Comparator::GreaterOrEqual => greater_or_equal(lhs, rhs, ctx),
        }
    }
}

/// An executable node.
#[derive(Debug)]
pub enum Stmt {
    /// Literal `Number`, `String` or `Bool`.
    Constant(ObjectHolder),
    /// The `None` literal.
    NoneConst,
    /// Dotted name: `x`, `self.pos.x`.
    VariableValue(Vec<String>),
    /// `name = value`
    Assignment { name: String, value: Box<Stmt> },
    /// `object.field = value`, where `object` is a dotted path to an instance.
    FieldAssignment {
        object: Vec<String>,
        field: String,
        value: Box<Stmt>,
    },
    Add(Box<Stmt>, Box<Stmt>),
    Sub(Box<Stmt>, Box<Stmt>),
    Mult(Box<Stmt>, Box<Stmt>),
    Div(Box<Stmt>, Box<Stmt>),
    And(Box<Stmt>, Box<Stmt>),
    Or(Box<Stmt>, Box<Stmt>),
    Not(Box<Stmt>),
    Comparison {
        comparator: Comparator,
        lhs: Box<Stmt>,
        rhs: Box<Stmt>,
    },
    IfElse {
        condition: Box<Stmt>,
        if_body: Box<Stmt>,
        else_body: Option<Box<Stmt>>,
    },
    /// Statements run in order for their effects.
    Compound(Vec<Stmt>),
    Return(Box<Stmt>),
    /// Boundary that catches `return` from anywhere beneath it.
    MethodBody(Box<Stmt>),
    /// Binds the class under its own name.
    ClassDefinition(Rc<Class>),
    NewInstance { class: Rc<Class>, args: Vec<Stmt> },
    Print(Vec<Stmt>),
    /// `str(x)`
    Stringify(Box<Stmt>),
    MethodCall {
        object: Box<Stmt>,
        method: String,
        args: Vec<Stmt>,
    },
}

impl Stmt {
    pub fn number(value: i64) -> Self {
        Stmt::Constant(ObjectHolder::number(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Stmt::Constant(ObjectHolder::string(value))
    }

    pub fn boolean(value: bool) -> Self {
        Stmt::Constant(ObjectHolder::boolean(value))
    }

    pub fn assign(name: impl Into<String>, value: Stmt) -> Self {
        Stmt::Assignment {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn compare(comparator: Comparator, lhs: Stmt, rhs: Stmt) -> Self {
        Stmt::Comparison {
            comparator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn if_else(condition: Stmt, if_body: Stmt, else_body: Option<Stmt>) -> Self {
        Stmt::IfElse {
            condition: Box::new(condition),
            if_body: Box::new(if_body),
            else_body: else_body.map(Box::new),
        }
    }

    pub fn ret(value: Stmt) -> Self {
        Stmt::Return(Box::new(value))
    }

    pub fn method_body(body: Stmt) -> Self {
        Stmt::MethodBody(Box::new(body))
    }

    pub fn call(object: Stmt, method: impl Into<String>, args: Vec<Stmt>) -> Self {
        Stmt::MethodCall {
            object: Box::new(object),
            method: method.into(),
            args,
        }
    }
}
