use std::rc::Rc;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
        value::class::{Class, Method},
    },
};

impl Parser {
    /// Parses the whole program: a sequence of class definitions and
    /// statements, gathered into one compound statement.
    pub(in crate::interpreter::parser) fn parse_program(&mut self) -> ParseResult<Statement> {
        let mut statements = Vec::new();

        loop {
            match self.lexer.current() {
                Token::Eof => break,
                Token::Newline => {
                    self.lexer.advance();
                },
                Token::Class => statements.push(self.parse_class_definition()?),
                _ => statements.push(self.parse_statement()?),
            }
        }

        Ok(Statement::Compound { statements })
    }

    /// Parses `class NAME [ ( BASE ) ] :` followed by a body of method
    /// definitions, and registers the class in the parse-time table.
    fn parse_class_definition(&mut self) -> ParseResult<Statement> {
        let line = self.lexer.line();
        self.lexer.advance();

        let name = self.expect_identifier()?;

        let parent = if self.consume_char('(') {
            let parent_line = self.lexer.line();
            let parent_name = self.expect_identifier()?;
            self.expect_char(')')?;

            match self.classes.get(&parent_name) {
                Some(class) => Some(Rc::clone(class)),
                None => {
                    return Err(ParseError::UnknownBaseClass { name: parent_name,
                                                              line: parent_line, });
                },
            }
        } else {
            None
        };

        self.expect_char(':')?;
        let methods = self.parse_class_body()?;

        let class = Rc::new(Class::new(name.clone(), methods, parent));
        self.classes.insert(name, Rc::clone(&class));

        Ok(Statement::ClassDefinition { class, line })
    }

    /// Parses the indented body of a class. Only method definitions are
    /// allowed there.
    fn parse_class_body(&mut self) -> ParseResult<Vec<Method>> {
        self.expect_newline()?;
        if !self.consume(&Token::Indent) {
            return Err(ParseError::ExpectedIndentedBlock { token: self.token_text(),
                                                           line:  self.lexer.line(), });
        }

        let mut methods = Vec::new();
        loop {
            match self.lexer.current() {
                Token::Dedent => {
                    self.lexer.advance();
                    break;
                },
                Token::Eof => break,
                Token::Newline => {
                    self.lexer.advance();
                },
                Token::Def => methods.push(self.parse_method()?),
                _ => {
                    return Err(ParseError::ExpectedMethod { token: self.token_text(),
                                                            line:  self.lexer.line(), });
                },
            }
        }

        Ok(methods)
    }

    /// Parses `def NAME ( [ PARAMS ] ) :` and the method's suite. The
    /// implicit `self` is not part of the parameter list.
    fn parse_method(&mut self) -> ParseResult<Method> {
        self.lexer.advance();

        let name = self.expect_identifier()?;
        self.expect_char('(')?;

        let mut formal_params = Vec::new();
        if !self.consume_char(')') {
            loop {
                formal_params.push(self.expect_identifier()?);
                if self.consume_char(',') {
                    continue;
                }
                self.expect_char(')')?;
                break;
            }
        }

        self.expect_char(':')?;
        let body = self.parse_suite()?;

        Ok(Method { name,
                    formal_params,
                    body: Statement::MethodBody { body: Box::new(body) } })
    }

    /// Parses a suite: a line break, an indented run of statements, and the
    /// closing dedent. End of input is tolerated in place of the dedent.
    fn parse_suite(&mut self) -> ParseResult<Statement> {
        self.expect_newline()?;
        if !self.consume(&Token::Indent) {
            return Err(ParseError::ExpectedIndentedBlock { token: self.token_text(),
                                                           line:  self.lexer.line(), });
        }

        let mut statements = Vec::new();
        loop {
            match self.lexer.current() {
                Token::Dedent => {
                    self.lexer.advance();
                    break;
                },
                Token::Eof => break,
                Token::Newline => {
                    self.lexer.advance();
                },
                _ => statements.push(self.parse_statement()?),
            }
        }

        Ok(Statement::Compound { statements })
    }

    /// Parses a single statement.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.lexer.current() {
            Token::If => self.parse_if_statement(),
            Token::Print => self.parse_print_statement(),
            Token::Return => {
                let line = self.lexer.line();
                self.lexer.advance();

                let value = self.parse_expression()?;
                self.expect_newline()?;
                Ok(Statement::Return { value, line })
            },
            Token::Def => Err(ParseError::MethodOutsideClass { line: self.lexer.line() }),
            Token::Id(_) => self.parse_assignment_or_expression(),
            _ => {
                let line = self.lexer.line();
                let expr = self.parse_expression()?;
                self.expect_newline()?;
                Ok(Statement::Expression { expr, line })
            },
        }
    }

    /// Parses `if EXPR :` with its suite and an optional `else :` suite.
    fn parse_if_statement(&mut self) -> ParseResult<Statement> {
        let line = self.lexer.line();
        self.lexer.advance();

        let condition = self.parse_expression()?;
        self.expect_char(':')?;
        let then_branch = Box::new(self.parse_suite()?);

        let else_branch = if self.consume(&Token::Else) {
            self.expect_char(':')?;
            Some(Box::new(self.parse_suite()?))
        } else {
            None
        };

        Ok(Statement::IfElse { condition,
                               then_branch,
                               else_branch,
                               line })
    }

    /// Parses `print` with zero or more comma-separated arguments.
    fn parse_print_statement(&mut self) -> ParseResult<Statement> {
        let line = self.lexer.line();
        self.lexer.advance();

        let mut args = Vec::new();
        if !matches!(self.lexer.current(), Token::Newline | Token::Eof) {
            loop {
                args.push(self.parse_expression()?);
                if self.consume_char(',') {
                    continue;
                }
                break;
            }
        }
        self.expect_newline()?;

        Ok(Statement::Print { args, line })
    }

    /// Disambiguates a statement that starts with an identifier.
    ///
    /// A dotted name followed by `=` is an assignment (plain for a single
    /// name, field assignment for a longer path); anything else rewinds and
    /// parses as an expression statement.
    fn parse_assignment_or_expression(&mut self) -> ParseResult<Statement> {
        let line = self.lexer.line();
        let start = self.lexer.position();

        let path = self.parse_dotted_path()?;
        if !self.consume_char('=') {
            self.lexer.rewind(start);

            let expr = self.parse_expression()?;
            self.expect_newline()?;
            return Ok(Statement::Expression { expr, line });
        }

        let value = self.parse_expression()?;
        self.expect_newline()?;

        match path.split_last() {
            Some((name, [])) => Ok(Statement::Assignment { name: name.clone(),
                                                           value,
                                                           line }),
            Some((field, object_path)) => {
                Ok(Statement::FieldAssignment { object: Expr::Variable { path: object_path.to_vec(),
                                                                         line },
                                                field: field.clone(),
                                                value,
                                                line })
            },
            None => unreachable!("dotted paths are never empty"),
        }
    }

    /// Parses `NAME { . NAME }` and returns the names in source order.
    pub(in crate::interpreter::parser) fn parse_dotted_path(&mut self)
                                                           -> ParseResult<Vec<String>> {
        let mut path = vec![self.expect_identifier()?];
        while self.consume_char('.') {
            path.push(self.expect_identifier()?);
        }
        Ok(path)
    }
}
