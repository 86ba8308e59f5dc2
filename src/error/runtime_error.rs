use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised while a program is running.
pub enum RuntimeError {
    /// Tried to read a variable or field that does not exist.
    UnknownVariable {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use a plain value where a class instance was required.
    NotAnInstance {
        /// The kind of value that was found instead.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Called a method the instance's class does not provide with this arity.
    MethodNotImplemented {
        /// The name of the missing method.
        method: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A binary operator was applied to values it is not defined for.
    IncompatibleOperands {
        /// The operator that was applied.
        op:    BinaryOperator,
        /// The kind of the left operand.
        left:  &'static str,
        /// The kind of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Two values cannot be ordered or tested for equality.
    NotComparable {
        /// The kind of the left operand.
        left:  &'static str,
        /// The kind of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic overflowed the numeric value range.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output stream failed.
    OutputFailed {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` statement was executed outside of any method.
    ReturnOutsideMethod,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::NotAnInstance { found, line } => {
                write!(f, "Error on line {line}: Expected a class instance, found {found}.")
            },
            Self::MethodNotImplemented { method, line } => {
                write!(f, "Error on line {line}: Method '{method}' is not implemented.")
            },
            Self::IncompatibleOperands { op, left, right, line } => {
                write!(f, "Error on line {line}: Operator '{op}' is not defined for {left} and {right}.")
            },
            Self::NotComparable { left, right, line } => {
                write!(f, "Error on line {line}: Cannot compare {left} and {right}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::OutputFailed { line } => {
                write!(f, "Error on line {line}: Failed to write to the output stream.")
            },
            Self::ReturnOutsideMethod => {
                write!(f, "Error: 'return' is only allowed inside a method.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
