use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        value::class::Class,
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program into an executable tree.
///
/// This is the entry point for parsing. The program becomes a compound
/// statement of class definitions and top-level statements, to be executed
/// against the outer scope.
///
/// # Errors
/// Returns a [`ParseError`] carrying the offending token and its source
/// line on any grammar violation.
pub fn parse_program(lexer: Lexer) -> ParseResult<Statement> {
    Parser::new(lexer).parse_program()
}

/// Recursive-descent parser over the token cursor.
///
/// Besides the cursor, the parser maintains the parse-time class table: a
/// mapping from class name to the shared `Class` descriptor, filled in as
/// each `class` declaration is parsed. The table lets instantiation sites
/// capture their class descriptor directly and makes `Name(...)`
/// distinguishable from a method call at parse time. A class's parent must
/// already be in the table when the class is declared.
pub struct Parser {
    pub(in crate::interpreter::parser) lexer:   Lexer,
    pub(in crate::interpreter::parser) classes: HashMap<String, Rc<Class>>,
}

impl Parser {
    pub(in crate::interpreter::parser) fn new(lexer: Lexer) -> Self {
        Self { lexer,
               classes: HashMap::new() }
    }

    /// Builds the error for a token no rule accepts at the current
    /// position.
    pub(in crate::interpreter::parser) fn unexpected(&self) -> ParseError {
        match self.lexer.current() {
            Token::Eof => ParseError::UnexpectedEndOfInput { line: self.lexer.line() },
            token => ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                   line:  self.lexer.line(), },
        }
    }

    /// Renders the current token for an error message.
    pub(in crate::interpreter::parser) fn token_text(&self) -> String {
        format!("{:?}", self.lexer.current())
    }

    /// Consumes the given token if it is current, reporting whether it was.
    pub(in crate::interpreter::parser) fn consume(&mut self, token: &Token) -> bool {
        if self.lexer.current() == token {
            self.lexer.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the given punctuation character if it is current, reporting
    /// whether it was.
    pub(in crate::interpreter::parser) fn consume_char(&mut self, expected: char) -> bool {
        self.consume(&Token::Char(expected))
    }

    /// Consumes the given punctuation character or fails.
    pub(in crate::interpreter::parser) fn expect_char(&mut self,
                                                      expected: char)
                                                      -> ParseResult<()> {
        if self.consume_char(expected) {
            Ok(())
        } else {
            Err(ParseError::ExpectedCharacter { expected,
                                                token: self.token_text(),
                                                line: self.lexer.line() })
        }
    }

    /// Consumes an identifier and returns its name, or fails.
    pub(in crate::interpreter::parser) fn expect_identifier(&mut self) -> ParseResult<String> {
        if let Token::Id(name) = self.lexer.current() {
            let name = name.clone();
            self.lexer.advance();
            Ok(name)
        } else {
            Err(ParseError::ExpectedIdentifier { token: self.token_text(),
                                                 line:  self.lexer.line(), })
        }
    }

    /// Consumes the line break that terminates a simple statement, or
    /// fails.
    pub(in crate::interpreter::parser) fn expect_newline(&mut self) -> ParseResult<()> {
        if self.consume(&Token::Newline) {
            Ok(())
        } else {
            Err(ParseError::ExpectedNewline { token: self.token_text(),
                                              line:  self.lexer.line(), })
        }
    }
}
