#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found a token that no grammar rule accepts at this position.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input where more tokens were required.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier was expected but not found.
    ExpectedIdentifier {
        /// The token encountered instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific punctuation character was expected but not found.
    ExpectedCharacter {
        /// The character that was expected.
        expected: char,
        /// The token encountered instead.
        token:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A line break was expected after a simple statement.
    ExpectedNewline {
        /// The token encountered instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An indented block was expected after a colon.
    ExpectedIndentedBlock {
        /// The token encountered instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A class was declared with a base class that has not been declared.
    UnknownBaseClass {
        /// The name of the missing base class.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A bare call names neither a declared class nor the `str` form.
    UnknownClass {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A class body contains something other than a method definition.
    ExpectedMethod {
        /// The token encountered instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A method definition appeared outside of a class body.
    MethodOutsideClass {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two comparison operators were chained in a single expression.
    ChainedComparison {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
            Self::ExpectedIdentifier { token, line } => {
                write!(f, "Error on line {line}: Expected identifier, found {token}.")
            },
            Self::ExpectedCharacter { expected, token, line } => {
                write!(f, "Error on line {line}: Expected '{expected}', found {token}.")
            },
            Self::ExpectedNewline { token, line } => {
                write!(f, "Error on line {line}: Expected end of line, found {token}.")
            },
            Self::ExpectedIndentedBlock { token, line } => {
                write!(f, "Error on line {line}: Expected an indented block, found {token}.")
            },
            Self::UnknownBaseClass { name, line } => {
                write!(f, "Error on line {line}: Base class '{name}' has not been declared.")
            },
            Self::UnknownClass { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a declared class.")
            },
            Self::ExpectedMethod { token, line } => {
                write!(f, "Error on line {line}: Class bodies may only contain method definitions, found {token}.")
            },
            Self::MethodOutsideClass { line } => {
                write!(f, "Error on line {line}: Method definitions are only allowed inside a class.")
            },
            Self::ChainedComparison { line } => {
                write!(f, "Error on line {line}: Comparisons cannot be chained.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
