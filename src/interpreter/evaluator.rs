/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions:
/// arithmetic, short-circuiting logic, and comparison dispatch.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the statement and expression dispatch, dotted variable
/// resolution, and the non-local signal type that carries `return` values
/// and runtime errors out of nested nodes.
pub mod core;
