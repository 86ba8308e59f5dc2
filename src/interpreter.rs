/// The context module defines where program output goes.
///
/// The evaluator is parameterized over a single external capability: a sink
/// providing the text output stream that `print` writes to. This module
/// declares that trait together with an in-memory implementation (used by
/// `str(...)` and by tests) and a stream-backed one (used by the command
/// line driver).
pub mod context;
/// The evaluator module executes tree nodes and computes results.
///
/// The evaluator walks the executable tree, evaluates expressions and
/// statements against the current scope, performs arithmetic, logical and
/// comparison operations, dispatches method calls, and carries the
/// non-local `return` signal to the enclosing method body. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates tree nodes, performing all supported operations.
/// - Manages scopes, class bindings, and instance fields.
/// - Reports runtime errors such as unknown names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a finite token vector,
/// deriving synthetic `Newline`, `Indent`, and `Dedent` tokens from the
/// significant whitespace. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles string escapes, number literals, keywords, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the executable tree from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs the tree of evaluable nodes, maintaining a parse-time table
/// of declared classes so instantiation sites can capture their class
/// descriptors directly.
///
/// # Responsibilities
/// - Converts tokens into structured tree nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Builds class descriptors, including inherited method resolution.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the tagged object model (`None`, numbers, strings,
/// booleans, classes, and class instances), the shared-ownership holder the
/// evaluator passes around, and the comparison primitives. Class instances
/// use reference semantics: copying a holder aliases the instance, and
/// field mutation through one alias is observed through all.
pub mod value;
