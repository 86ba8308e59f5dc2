use logos::Logos;

use crate::error::LexerError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language, including the
/// synthetic `Newline`, `Indent`, and `Dedent` tokens derived from
/// significant whitespace.
///
/// Token equality is structural: two tokens are equal iff their kinds match
/// and, for the payload-bearing kinds, their payloads compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A number literal, such as `42`.
    Number(i32),
    /// An identifier; a variable, field, class, or method name.
    Id(String),
    /// A string literal, already unescaped.
    String(String),
    /// A single punctuation character, such as `(`, `.`, or `+`.
    Char(char),
    /// End of a logical line.
    Newline,
    /// An increase of the indentation level by one unit (two spaces).
    Indent,
    /// A decrease of the indentation level by one unit.
    Dedent,
    /// End of input.
    Eof,
    /// `class`
    Class,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `def`
    Def,
    /// `print`
    Print,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `None`
    None,
    /// `True`
    True,
    /// `False`
    False,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LessOrEq,
    /// `>=`
    GreaterOrEq,
}

/// Additional information carried by the raw lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
struct LexerExtras {
    /// The current line number in the source being tokenized.
    line: usize,
}

/// Raw-layer failures, mapped to [`LexerError`] once the offending slice and
/// line are known.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum LexemeError {
    /// A character that starts no lexeme.
    #[default]
    UnexpectedCharacter,
    /// A string literal without a closing quote.
    UnterminatedString,
    /// A raw line break inside a string literal.
    UnexpectedEndOfLine,
    /// An unrecognized escape sequence inside a string literal.
    UnknownEscape(char),
    /// A number literal that does not fit a 32-bit integer.
    NumberOutOfRange,
}

impl LexemeError {
    fn into_error(self, slice: &str, line: usize) -> LexerError {
        match self {
            Self::UnexpectedCharacter => LexerError::UnexpectedCharacter { found: slice.to_string(),
                                                                           line },
            Self::UnterminatedString => LexerError::UnterminatedString { line },
            Self::UnexpectedEndOfLine => LexerError::UnexpectedEndOfLine { line },
            Self::UnknownEscape(escape) => LexerError::UnknownEscape { escape, line },
            Self::NumberOutOfRange => LexerError::NumberOutOfRange { line },
        }
    }
}

/// A raw lexeme, before indentation structuring.
///
/// This layer recognizes everything except the synthetic
/// `Newline`/`Indent`/`Dedent` tokens: those are derived from the
/// `Indentation` lexeme (a line break plus the following run of spaces) by
/// [`Lexer::new`]. Comments and mid-line spaces are skipped here and never
/// reach the structuring pass.
#[derive(Logos, Debug, PartialEq)]
#[logos(extras = LexerExtras)]
#[logos(error = LexemeError)]
#[logos(skip r" +")]
#[logos(skip r"#[^\n]*")]
enum Lexeme {
    /// A line break and the spaces that indent the next line.
    #[regex(r"\n *", newline_indent)]
    Indentation(usize),

    /// A string literal in either quote style. The unterminated fallbacks
    /// always produce an error.
    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*""#, unescape)]
    #[regex(r"'([^'\\\n\r]|\\[^\n\r])*'", unescape)]
    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*\\?"#, unterminated)]
    #[regex(r"'([^'\\\n\r]|\\[^\n\r])*\\?", unterminated)]
    StringLiteral(String),

    /// `class`
    #[token("class")]
    Class,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `def`
    #[token("def")]
    Def,
    /// `print`
    #[token("print")]
    Print,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `None`
    #[token("None")]
    None,
    /// `True`
    #[token("True")]
    True,
    /// `False`
    #[token("False")]
    False,

    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<=`
    #[token("<=")]
    LessOrEq,
    /// `>=`
    #[token(">=")]
    GreaterOrEq,

    /// Identifier lexemes; names such as `x` or `__init__`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Number literal lexemes, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i32),

    /// Any other ASCII punctuation character, as itself. Quotes, `#`, and
    /// `_` are claimed by the rules above and excluded here.
    #[regex(r"[!$-&(-/:-@\[-^`{-~]", |lex| lex.slice().chars().next())]
    Punct(char),
}

impl Lexeme {
    /// Maps a content lexeme to its public token. `Indentation` never gets
    /// here; the structuring pass consumes it.
    fn into_token(self) -> Token {
        match self {
            Self::Indentation(_) => unreachable!("indentation is handled by the structuring pass"),
            Self::StringLiteral(value) => Token::String(value),
            Self::Class => Token::Class,
            Self::Return => Token::Return,
            Self::If => Token::If,
            Self::Else => Token::Else,
            Self::Def => Token::Def,
            Self::Print => Token::Print,
            Self::And => Token::And,
            Self::Or => Token::Or,
            Self::Not => Token::Not,
            Self::None => Token::None,
            Self::True => Token::True,
            Self::False => Token::False,
            Self::Eq => Token::Eq,
            Self::NotEq => Token::NotEq,
            Self::LessOrEq => Token::LessOrEq,
            Self::GreaterOrEq => Token::GreaterOrEq,
            Self::Identifier(name) => Token::Id(name),
            Self::Number(value) => Token::Number(value),
            Self::Punct(c) => Token::Char(c),
        }
    }
}

/// Consumes a line break and counts the spaces indenting the next line.
fn newline_indent(lex: &mut logos::Lexer<Lexeme>) -> usize {
    lex.extras.line += 1;
    lex.slice().len() - 1
}

/// Unescapes the body of a terminated string literal.
///
/// Recognized escape sequences: `\n`, `\t`, `\r`, `\"`, `\'`, and `\\`.
/// Anything else after a backslash is an error.
fn unescape(lex: &logos::Lexer<Lexeme>) -> Result<String, LexemeError> {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some('"') => value.push('"'),
            Some('\'') => value.push('\''),
            Some('\\') => value.push('\\'),
            Some(other) => return Err(LexemeError::UnknownEscape(other)),
            None => return Err(LexemeError::UnterminatedString),
        }
    }

    Ok(value)
}

/// Rejects a string literal that was never closed, distinguishing a raw line
/// break from plain end of input.
fn unterminated(lex: &logos::Lexer<Lexeme>) -> Result<String, LexemeError> {
    if lex.remainder().starts_with(['\n', '\r']) {
        Err(LexemeError::UnexpectedEndOfLine)
    } else {
        Err(LexemeError::UnterminatedString)
    }
}

/// Parses a number literal from the current lexeme slice.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Result<i32, LexemeError> {
    lex.slice().parse().map_err(|_| LexemeError::NumberOutOfRange)
}

/// Number of spaces that make up one indentation level.
const INDENT_SPACES: i64 = 2;

/// Tokenizes a whole source text and exposes the result through a cursor.
///
/// The lexer runs in two passes. The raw pass (see [`Lexeme`]) recognizes
/// every lexeme, including one lexeme per line break carrying the indentation
/// of the following line. The structuring pass then derives the significant
/// whitespace tokens:
///
/// - a `Newline` is emitted for a line break unless the previous token is
///   already a `Newline` (or nothing has been emitted yet);
/// - blank lines and comment-only lines neither emit indentation tokens nor
///   move the tracked indentation level;
/// - otherwise the difference to the tracked level, in units of two spaces,
///   is emitted as that many `Indent` or `Dedent` tokens;
/// - at end of input a final `Newline` is synthesized unless the last token
///   is already a `Newline` or a `Dedent`, and an `Eof` token is appended.
///
/// The token vector is materialized up front; the parser walks it through
/// [`current`](Self::current) and [`advance`](Self::advance), and may save
/// and restore its position.
pub struct Lexer {
    tokens: Vec<(Token, usize)>,
    cursor: usize,
}

impl Lexer {
    /// Tokenizes `source`.
    ///
    /// # Errors
    /// Returns a [`LexerError`] for malformed string literals, out-of-range
    /// number literals, and characters outside the language's alphabet.
    pub fn new(source: &str) -> Result<Self, LexerError> {
        let mut raw = Vec::new();
        let mut lexer = Lexeme::lexer_with_extras(source, LexerExtras { line: 1 });

        while let Some(result) = lexer.next() {
            match result {
                Ok(lexeme) => raw.push((lexeme, lexer.extras.line)),
                Err(kind) => return Err(kind.into_error(lexer.slice(), lexer.extras.line)),
            }
        }

        Ok(Self { tokens: structure(raw, lexer.extras.line),
                  cursor: 0 })
    }

    /// Returns the token under the cursor without consuming it.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.cursor].0
    }

    /// Returns the source line of the token under the cursor.
    #[must_use]
    pub fn line(&self) -> usize {
        self.tokens[self.cursor].1
    }

    /// Moves the cursor forward and returns the new current token.
    ///
    /// Past the end of input the cursor stays on `Eof`.
    pub fn advance(&mut self) -> &Token {
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Returns the cursor position, for a later [`rewind`](Self::rewind).
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor back to a position previously returned by
    /// [`position`](Self::position).
    pub fn rewind(&mut self, position: usize) {
        self.cursor = position;
    }
}

/// The structuring pass: folds `Indentation` lexemes into `Newline`,
/// `Indent`, and `Dedent` tokens and appends the terminating `Eof`.
fn structure(raw: Vec<(Lexeme, usize)>, final_line: usize) -> Vec<(Token, usize)> {
    let mut tokens: Vec<(Token, usize)> = Vec::new();
    let mut tracked_spaces: i64 = 0;
    let mut iter = raw.into_iter().peekable();

    while let Some((lexeme, line)) = iter.next() {
        let spaces = match lexeme {
            Lexeme::Indentation(spaces) => spaces,
            content => {
                tokens.push((content.into_token(), line));
                continue;
            },
        };

        if let Some((last, _)) = tokens.last()
           && *last != Token::Newline
        {
            tokens.push((Token::Newline, line));
        }

        // A blank or comment-only line shows up as another indentation
        // lexeme right behind this one; only the line that carries content
        // takes part in the indentation computation.
        if matches!(iter.peek(), Some((Lexeme::Indentation(_), _))) {
            continue;
        }

        let delta = (spaces as i64 - tracked_spaces) / INDENT_SPACES;
        let token = if delta > 0 { Token::Indent } else { Token::Dedent };
        for _ in 0..delta.unsigned_abs() {
            tokens.push((token.clone(), line));
        }
        tracked_spaces = spaces as i64;
    }

    if let Some((last, _)) = tokens.last()
       && *last != Token::Newline
       && *last != Token::Dedent
    {
        tokens.push((Token::Newline, final_line));
    }
    tokens.push((Token::Eof, final_line));

    tokens
}
