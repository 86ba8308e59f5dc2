use std::rc::Rc;

use mython::{
    ast::Statement,
    interpreter::value::{
        class::{Class, ClassInstance, Method},
        core::{Object, ObjectHolder},
    },
};

/// Builds a method with an empty body; resolution tests only look at names
/// and arities.
fn method(name: &str, params: &[&str]) -> Method {
    Method { name:          name.to_string(),
             formal_params: params.iter().map(|p| (*p).to_string()).collect(),
             body:          Statement::MethodBody { body: Box::new(Statement::Compound { statements: Vec::new() }) } }
}

#[test]
fn own_methods_shadow_inherited_ones() {
    let base = Rc::new(Class::new("Base".to_string(),
                                  vec![method("name", &[]), method("only_base", &[])],
                                  None));
    let derived = Rc::new(Class::new("Derived".to_string(),
                                     vec![method("name", &[])],
                                     Some(Rc::clone(&base))));

    let own = &derived.methods()[0];
    assert!(Rc::ptr_eq(derived.method("name").unwrap(), own));
    assert!(derived.method("only_base").is_some());
    assert!(derived.method("missing").is_none());
    assert_eq!(derived.parent().unwrap().name(), "Base");
}

#[test]
fn resolution_reaches_through_grandparents() {
    let a = Rc::new(Class::new("A".to_string(), vec![method("hello", &[])], None));
    let b = Rc::new(Class::new("B".to_string(), Vec::new(), Some(Rc::clone(&a))));
    let c = Rc::new(Class::new("C".to_string(), Vec::new(), Some(Rc::clone(&b))));

    assert!(c.method("hello").is_some());
}

#[test]
fn has_method_requires_a_matching_arity() {
    let class = Rc::new(Class::new("C".to_string(), vec![method("f", &["a", "b"])], None));
    let instance = ClassInstance::new(Rc::clone(&class));

    assert!(instance.has_method("f", 2));
    assert!(!instance.has_method("f", 1));
    assert!(!instance.has_method("g", 0));
}

#[test]
fn truthiness_of_every_kind() {
    assert!(ObjectHolder::from(true).is_true());
    assert!(!ObjectHolder::from(false).is_true());
    assert!(ObjectHolder::from(7).is_true());
    assert!(ObjectHolder::from(-1).is_true());
    assert!(!ObjectHolder::from(0).is_true());
    assert!(ObjectHolder::from("x").is_true());
    assert!(!ObjectHolder::from("").is_true());
    assert!(!ObjectHolder::none().is_true());

    let class = Rc::new(Class::new("C".to_string(), Vec::new(), None));
    assert!(!ObjectHolder::own(Object::Class(Rc::clone(&class))).is_true());
    assert!(!ObjectHolder::own(Object::Instance(ClassInstance::new(class))).is_true());
}

#[test]
fn holders_alias_their_referent() {
    let class = Rc::new(Class::new("C".to_string(), Vec::new(), None));
    let x = ObjectHolder::own(Object::Instance(ClassInstance::new(class)));
    let y = x.clone();

    x.as_instance()
     .unwrap()
     .fields_mut()
     .insert("v".to_string(), 1.into());

    let seen = y.as_instance()
                .unwrap()
                .fields()
                .get("v")
                .and_then(ObjectHolder::as_number);
    assert_eq!(seen, Some(1));
}

#[test]
fn stringify_matches_print_rendering() {
    assert_eq!(ObjectHolder::from(57).stringify(1).unwrap(), "57");
    assert_eq!(ObjectHolder::from(-8).stringify(1).unwrap(), "-8");
    assert_eq!(ObjectHolder::from(true).stringify(1).unwrap(), "True");
    assert_eq!(ObjectHolder::from(false).stringify(1).unwrap(), "False");
    assert_eq!(ObjectHolder::from("hello").stringify(1).unwrap(), "hello");
    assert_eq!(ObjectHolder::none().stringify(1).unwrap(), "None");

    let class = Rc::new(Class::new("Cat".to_string(), Vec::new(), None));
    assert_eq!(ObjectHolder::own(Object::Class(class)).stringify(1).unwrap(),
               "Class Cat");
}

#[test]
fn type_names_describe_the_value() {
    assert_eq!(ObjectHolder::from(1).type_name(), "a number");
    assert_eq!(ObjectHolder::from("s").type_name(), "a string");
    assert_eq!(ObjectHolder::from(false).type_name(), "a boolean");
    assert_eq!(ObjectHolder::none().type_name(), "None");
}
