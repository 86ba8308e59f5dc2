//! # mython
//!
//! mython is an interpreter for Mython, a small dynamically typed language
//! with Python flavoured surface syntax: numbers, strings, booleans and
//! `None`, user-defined classes with single inheritance, methods with
//! `self`, dotted field access, `print`, arithmetic, logical and comparison
//! operators, `if`/`else`, and significant-whitespace blocks.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        context::StreamContext,
        evaluator::core::Signal,
        lexer::Lexer,
        parser::core::parse_program,
        value::core::Closure,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent
/// parsed source code as a tree of evaluable nodes. The tree is built by
/// the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running a
/// program. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source lines for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the runtime value
/// model, and the output context to provide a complete runtime for Mython
/// programs. It exposes the public API for interpreting source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and executing programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Interprets a program and writes its `print` output to `output`.
///
/// The source is tokenized and parsed up front; the resulting tree is then
/// executed against a fresh outer scope. Execution is deterministic and
/// runs to completion or to the first error.
///
/// # Errors
/// Returns the lexer, parse, or runtime error that stopped the program.
///
/// # Examples
/// ```
/// use mython::run_program;
///
/// let mut output = Vec::new();
/// run_program("print 2 + 2 * 2", &mut output).unwrap();
/// assert_eq!(output, b"6\n");
///
/// // An intentional error: 'x' is never defined.
/// assert!(run_program("print x", &mut Vec::new()).is_err());
/// ```
pub fn run_program(source: &str, output: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    let lexer = Lexer::new(source)?;
    let program = parse_program(lexer)?;

    let mut context = StreamContext::new(output);
    let mut closure = Closure::new();

    match program.execute(&mut closure, &mut context) {
        Ok(_) => Ok(()),
        Err(Signal::Error(error)) => Err(Box::new(error)),
        Err(Signal::Return(_)) => Err(Box::new(RuntimeError::ReturnOutsideMethod)),
    }
}
