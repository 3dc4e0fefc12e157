use super::*;
use crate::test_helpers::{class, method};
use crate::BufferContext;
use pretty_assertions::assert_eq;

fn constant(name: &str, params: &[&str], tag: i64) -> Method {
    // fn pointers cannot capture, so pick a body per tag
    let body: crate::test_helpers::NativeFn = match tag {
        1 => |_, _| Ok(ObjectHolder::number(1)),
        2 => |_, _| Ok(ObjectHolder::number(2)),
        _ => |_, _| Ok(ObjectHolder::number(3)),
    };
    method(name, params, body)
}

#[test]
fn lookup_walks_the_parent_chain() {
    let base = class("Base", vec![constant("who", &[], 1)], None);
    let middle = class("Middle", Vec::new(), Some(base));
    let leaf = class("Leaf", Vec::new(), Some(middle));

    assert!(leaf.has_method("who", 0));
    let result = ObjectHolder::instance(Rc::clone(&leaf))
        .call("who", Vec::new(), &mut BufferContext::new())
        .unwrap();
    assert_eq!(result, ObjectHolder::number(1));
    assert_eq!(leaf.parent().map(|p| p.name()), Some("Middle"));
}

#[test]
fn override_wins_over_ancestor() {
    let base = class("Base", vec![constant("who", &[], 1)], None);
    let derived = class("Derived", vec![constant("who", &[], 2)], Some(base));

    let result = ObjectHolder::instance(derived)
        .call("who", Vec::new(), &mut BufferContext::new())
        .unwrap();
    assert_eq!(result, ObjectHolder::number(2));
}

#[test]
fn arity_must_match_exactly() {
    let point = class("Point", vec![constant("move", &["dx", "dy"], 1)], None);
    assert!(point.has_method("move", 2));
    assert!(!point.has_method("move", 1));
    assert!(!point.has_method("move", 3));
    assert!(!point.has_method("missing", 0));
}

#[test]
fn override_with_other_arity_hides_parent() {
    let base = class("Base", vec![constant("f", &[], 1)], None);
    let derived = class("Derived", vec![constant("f", &["x"], 2)], Some(base));
    assert!(!derived.has_method("f", 0));
    assert!(derived.has_method("f", 1));
}

#[test]
fn later_definition_replaces_earlier() {
    let twice = class(
        "Twice",
        vec![constant("f", &[], 1), constant("f", &[], 3)],
        None,
    );
    let result = ObjectHolder::instance(twice)
        .call("f", Vec::new(), &mut BufferContext::new())
        .unwrap();
    assert_eq!(result, ObjectHolder::number(3));
}

#[test]
fn instance_fields_start_empty() {
    let instance = ClassInstance::new(class("Empty", Vec::new(), None));
    assert_eq!(instance.field("a"), None);
    instance.set_field("a", ObjectHolder::none());
    assert_eq!(instance.field("a"), Some(ObjectHolder::none()));
    assert_eq!(instance.field("b"), None);
}
