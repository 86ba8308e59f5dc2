/// Lexical errors.
///
/// Defines all error types that can occur while turning source text into
/// tokens. Lexer errors include malformed string literals, unknown escape
/// sequences, oversized number literals, and characters that start no known
/// lexeme.
pub mod lexer_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the executable tree
/// from the token stream. Parse errors include unexpected tokens, missing
/// punctuation, malformed blocks, and references to undeclared classes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown variables, missing methods, operator type
/// mismatches, division by zero, and failed comparisons.
pub mod runtime_error;

pub use lexer_error::LexerError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
