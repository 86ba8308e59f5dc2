use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// The reserved stringify form. Recognized before the class table is
/// consulted, so `str(...)` always renders its argument.
const STR_FORM: &str = "str";

impl Parser {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, `or`, and recursively descends through the
    /// precedence hierarchy.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_or()
    }

    /// Parses `or` expressions, left-associative.
    fn parse_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_and()?;

        while *self.lexer.current() == Token::Or {
            let line = self.lexer.line();
            self.lexer.advance();

            let right = self.parse_and()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::Or,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }

    /// Parses `and` expressions, left-associative.
    fn parse_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_not()?;

        while *self.lexer.current() == Token::And {
            let line = self.lexer.line();
            self.lexer.advance();

            let right = self.parse_not()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::And,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }

    /// Parses `not` expressions. `not` nests, so `not not x` is allowed.
    fn parse_not(&mut self) -> ParseResult<Expr> {
        if *self.lexer.current() == Token::Not {
            let line = self.lexer.line();
            self.lexer.advance();

            let operand = self.parse_not()?;
            return Ok(Expr::Not { operand: Box::new(operand),
                                  line });
        }

        self.parse_comparison()
    }

    /// Parses a comparison. Comparisons are non-associative: at most one
    /// comparison operator may appear at this level.
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let left = self.parse_additive()?;

        let Some(op) = comparison_operator(self.lexer.current()) else {
            return Ok(left);
        };
        let line = self.lexer.line();
        self.lexer.advance();

        let right = self.parse_additive()?;

        if comparison_operator(self.lexer.current()).is_some() {
            return Err(ParseError::ChainedComparison { line: self.lexer.line() });
        }

        Ok(Expr::BinaryOp { left: Box::new(left),
                            op,
                            right: Box::new(right),
                            line })
    }

    /// Parses addition and subtraction, left-associative.
    fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.lexer.current() {
                Token::Char('+') => BinaryOperator::Add,
                Token::Char('-') => BinaryOperator::Sub,
                _ => break,
            };
            let line = self.lexer.line();
            self.lexer.advance();

            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }

    /// Parses multiplication and division, left-associative.
    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.lexer.current() {
                Token::Char('*') => BinaryOperator::Mul,
                Token::Char('/') => BinaryOperator::Div,
                _ => break,
            };
            let line = self.lexer.line();
            self.lexer.advance();

            let right = self.parse_unary()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }

    /// Parses unary minus.
    ///
    /// A negated number literal folds into a negative literal; any other
    /// operand desugars to a subtraction from zero, which also confines
    /// negation to numbers at run time.
    fn parse_unary(&mut self) -> ParseResult<Expr> {
        if *self.lexer.current() != Token::Char('-') {
            return self.parse_primary();
        }
        let line = self.lexer.line();
        self.lexer.advance();

        let operand = self.parse_unary()?;
        if let Expr::Literal { value: LiteralValue::Number(n), .. } = operand {
            return Ok(Expr::Literal { value: LiteralValue::Number(-n),
                                      line });
        }

        Ok(Expr::BinaryOp { left: Box::new(Expr::Literal { value: LiteralValue::Number(0),
                                                           line }),
                            op: BinaryOperator::Sub,
                            right: Box::new(operand),
                            line })
    }

    /// Parses a primary expression: a literal, a parenthesized expression,
    /// the `str(...)` form, a dotted name, a method call, or a class
    /// instantiation.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let line = self.lexer.line();

        match self.lexer.current() {
            Token::Number(n) => {
                let value = LiteralValue::Number(*n);
                self.lexer.advance();
                Ok(Expr::Literal { value, line })
            },
            Token::String(s) => {
                let value = LiteralValue::String(s.clone());
                self.lexer.advance();
                Ok(Expr::Literal { value, line })
            },
            Token::True => {
                self.lexer.advance();
                Ok(Expr::Literal { value: LiteralValue::Bool(true),
                                   line })
            },
            Token::False => {
                self.lexer.advance();
                Ok(Expr::Literal { value: LiteralValue::Bool(false),
                                   line })
            },
            Token::None => {
                self.lexer.advance();
                Ok(Expr::Literal { value: LiteralValue::None,
                                   line })
            },
            Token::Char('(') => {
                self.lexer.advance();
                let expr = self.parse_expression()?;
                self.expect_char(')')?;
                Ok(expr)
            },
            Token::Id(name) if name == STR_FORM => self.parse_stringify(),
            Token::Id(_) => self.parse_name_expression(),
            _ => Err(self.unexpected()),
        }
    }

    /// Parses `str ( EXPR )`, falling back to a plain name when no call
    /// follows (`str` stays usable as a variable).
    fn parse_stringify(&mut self) -> ParseResult<Expr> {
        let line = self.lexer.line();
        let start = self.lexer.position();
        self.lexer.advance();

        if !self.consume_char('(') {
            self.lexer.rewind(start);
            return self.parse_name_expression();
        }

        let operand = self.parse_expression()?;
        self.expect_char(')')?;

        Ok(Expr::Stringify { operand: Box::new(operand),
                             line })
    }

    /// Parses an expression that starts with an identifier: a dotted
    /// variable path, optionally called.
    ///
    /// A called single name must be a declared class and becomes an
    /// instantiation; a called dotted path is a method call on the path
    /// before the final name.
    fn parse_name_expression(&mut self) -> ParseResult<Expr> {
        let line = self.lexer.line();
        let path = self.parse_dotted_path()?;

        if !self.consume_char('(') {
            return Ok(Expr::Variable { path, line });
        }
        let args = self.parse_call_arguments()?;

        match path.split_last() {
            Some((name, [])) => match self.classes.get(name) {
                Some(class) => Ok(Expr::NewInstance { class: Rc::clone(class),
                                                      args,
                                                      line }),
                None => Err(ParseError::UnknownClass { name: name.clone(),
                                                       line }),
            },
            Some((method, object_path)) => {
                Ok(Expr::MethodCall { object: Box::new(Expr::Variable { path:
                                                                            object_path.to_vec(),
                                                                        line }),
                                      method: method.clone(),
                                      args,
                                      line })
            },
            None => unreachable!("dotted paths are never empty"),
        }
    }

    /// Parses the arguments of a call, after the opening parenthesis.
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut args = Vec::new();
        if self.consume_char(')') {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);
            if self.consume_char(',') {
                continue;
            }
            self.expect_char(')')?;
            break;
        }

        Ok(args)
    }
}

/// Maps a token to the comparison operator it spells, if any.
const fn comparison_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Eq => Some(BinaryOperator::Equal),
        Token::NotEq => Some(BinaryOperator::NotEqual),
        Token::Char('<') => Some(BinaryOperator::Less),
        Token::Char('>') => Some(BinaryOperator::Greater),
        Token::LessOrEq => Some(BinaryOperator::LessEqual),
        Token::GreaterOrEq => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
