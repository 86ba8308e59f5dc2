use std::{
    cell::{Ref, RefCell, RefMut},
    collections::HashMap,
    rc::Rc,
};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        context::Context,
        evaluator::core::ExecResult,
        value::core::{Closure, ObjectHolder},
    },
};

/// The constructor method, invoked on instantiation when its arity matches.
pub const INIT_METHOD: &str = "__init__";
/// The printing method, used when rendering an instance as text.
pub const STR_METHOD: &str = "__str__";
/// The equality method, used by `==` and `!=` when the left operand is an
/// instance.
pub const EQ_METHOD: &str = "__eq__";
/// The ordering method, used by `<`, `>`, `<=`, and `>=` when the left
/// operand is an instance.
pub const LT_METHOD: &str = "__lt__";
/// The addition method, used by `+` when the left operand is an instance.
pub const ADD_METHOD: &str = "__add__";

/// The name the receiver is bound to inside a method scope.
const SELF_NAME: &str = "self";

/// A method of a class.
#[derive(Debug)]
pub struct Method {
    /// The name of the method.
    pub name:          String,
    /// The names of the formal parameters, excluding the implicit `self`.
    pub formal_params: Vec<String>,
    /// The executable body of the method.
    pub body:          Statement,
}

/// A class descriptor.
///
/// Holds the class name, the methods in declaration order, an optional
/// parent, and a method resolution table precomputed at construction: the
/// parent's table (which already contains all ancestors) is copied and the
/// class's own methods are overlaid, so lookups never walk the parent
/// chain. Class descriptors are immutable once constructed.
#[derive(Debug)]
pub struct Class {
    name:    String,
    methods: Vec<Rc<Method>>,
    parent:  Option<Rc<Class>>,
    table:   HashMap<String, Rc<Method>>,
}

impl Class {
    /// Creates a class named `name` with `methods`, inheriting from
    /// `parent` when one is given.
    ///
    /// Own methods override inherited ones; among own methods sharing a
    /// name, the last declaration wins.
    #[must_use]
    pub fn new(name: String, methods: Vec<Method>, parent: Option<Rc<Self>>) -> Self {
        let methods: Vec<Rc<Method>> = methods.into_iter().map(Rc::new).collect();

        let mut table = parent.as_ref()
                              .map(|class| class.table.clone())
                              .unwrap_or_default();
        for method in &methods {
            table.insert(method.name.clone(), Rc::clone(method));
        }

        Self { name,
               methods,
               parent,
               table }
    }

    /// Returns the name of the class.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a method by name through the resolution table.
    ///
    /// Inherited methods are found here too; `None` means neither the class
    /// nor any ancestor declares the name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Rc<Method>> {
        self.table.get(name)
    }

    /// Returns the class's own methods in declaration order.
    #[must_use]
    pub fn methods(&self) -> &[Rc<Method>] {
        &self.methods
    }

    /// Returns the parent class, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }
}

/// An instance of a user-defined class.
///
/// An instance is a reference to its class plus a mutable field scope,
/// initially empty; `__init__` is the standard way to populate it. The
/// field scope sits behind a `RefCell` so aliases created by assignment all
/// observe the same mutations. Borrows of the field scope are never held
/// across evaluation.
#[derive(Debug)]
pub struct ClassInstance {
    class:  Rc<Class>,
    fields: RefCell<Closure>,
}

impl ClassInstance {
    /// Creates an instance of `class` with an empty field scope.
    #[must_use]
    pub fn new(class: Rc<Class>) -> Self {
        Self { class,
               fields: RefCell::new(Closure::new()) }
    }

    /// Returns the class of the instance.
    #[must_use]
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Returns `true` if the instance has a method `method` taking
    /// `argument_count` parameters.
    ///
    /// A method whose name resolves but whose parameter count differs is
    /// treated as absent.
    #[must_use]
    pub fn has_method(&self, method: &str, argument_count: usize) -> bool {
        self.class
            .method(method)
            .is_some_and(|m| m.formal_params.len() == argument_count)
    }

    /// Borrows the field scope for reading.
    #[must_use]
    pub fn fields(&self) -> Ref<'_, Closure> {
        self.fields.borrow()
    }

    /// Borrows the field scope for writing.
    #[must_use]
    pub fn fields_mut(&self) -> RefMut<'_, Closure> {
        self.fields.borrow_mut()
    }
}

impl ObjectHolder {
    /// Invokes `method` on the instance held by `self`, passing
    /// `actual_args`.
    ///
    /// The method is resolved through the class's table; a fresh scope is
    /// built containing `self` (sharing this very holder, so field
    /// mutations are visible through every alias) and each formal parameter
    /// bound to the corresponding actual value. A `return` executed inside
    /// the body becomes the call's result; a body that runs to completion
    /// yields `None`.
    ///
    /// # Errors
    /// Fails when the holder is not a class instance, when no method of
    /// this name and arity exists, or when the body raises a runtime error.
    pub fn call_method(&self,
                       method: &str,
                       actual_args: &[ObjectHolder],
                       context: &mut dyn Context,
                       line: usize)
                       -> ExecResult {
        let Some(instance) = self.as_instance() else {
            return Err(RuntimeError::NotAnInstance { found: self.type_name(),
                                                     line }.into());
        };

        let resolved = instance.class()
                               .method(method)
                               .filter(|m| m.formal_params.len() == actual_args.len())
                               .map(Rc::clone);
        let Some(resolved) = resolved else {
            return Err(RuntimeError::MethodNotImplemented { method: method.to_string(),
                                                            line }.into());
        };

        let mut closure = Closure::new();
        closure.insert(SELF_NAME.to_string(), self.clone());
        for (param, arg) in resolved.formal_params.iter().zip(actual_args) {
            closure.insert(param.clone(), arg.clone());
        }

        resolved.body.execute(&mut closure, context)
    }
}
