/// Classes, instances, and method invocation.
///
/// Defines the `Class` descriptor with its precomputed method resolution
/// table, the `ClassInstance` with its mutable field scope, and the method
/// call machinery that binds `self` and the formal parameters into a fresh
/// scope.
pub mod class;
/// Comparison primitives.
///
/// Implements the `Equal`/`Less` pair the six comparison operators are
/// built from, including delegation to user-defined `__eq__` and `__lt__`
/// methods.
pub mod comparison;

pub mod core;
