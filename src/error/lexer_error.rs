#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexerError {
    /// Found a character that does not start any lexeme.
    UnexpectedCharacter {
        /// The offending piece of input.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A string literal was not closed before the end of input.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was interrupted by a raw line break.
    UnexpectedEndOfLine {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal contains an escape sequence that is not recognized.
    UnknownEscape {
        /// The character following the backslash.
        escape: char,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A number literal does not fit the numeric value range.
    NumberOutOfRange {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line } => {
                write!(f, "Error on line {line}: Unexpected character: {found:?}.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: String literal is not terminated.")
            },
            Self::UnexpectedEndOfLine { line } => {
                write!(f, "Error on line {line}: Unexpected end of line inside a string literal.")
            },
            Self::UnknownEscape { escape, line } => {
                write!(f, "Error on line {line}: Unrecognized escape sequence '\\{escape}'.")
            },
            Self::NumberOutOfRange { line } => {
                write!(f, "Error on line {line}: Number literal is out of range.")
            },
        }
    }
}

impl std::error::Error for LexerError {}
