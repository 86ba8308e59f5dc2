/// Core parser state and token helpers.
///
/// Contains the `Parser` over the token cursor, the parse-time class table,
/// and shared expect/consume routines.
pub mod core;

/// Expression parsing.
///
/// Implements the precedence chain from `or` down to primaries, including
/// class instantiation, method calls, and the `str(...)` form.
pub mod expression;

/// Statement parsing.
///
/// Implements programs, class definitions, method definitions, suites, and
/// the statement forms.
pub mod statement;
