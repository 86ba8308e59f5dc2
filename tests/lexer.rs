use mython::interpreter::lexer::{Lexer, Token};

/// Tokenizes a source and collects the whole token sequence, including the
/// terminating `Eof`.
fn tokens_of(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source).expect("lexer failed");
    let mut tokens = vec![lexer.current().clone()];
    while *lexer.current() != Token::Eof {
        tokens.push(lexer.advance().clone());
    }
    tokens
}

#[test]
fn plain_statement() {
    assert_eq!(tokens_of("x = 57"),
               vec![Token::Id("x".to_string()),
                    Token::Char('='),
                    Token::Number(57),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(tokens_of("class return if else def print and or not None True False classy"),
               vec![Token::Class,
                    Token::Return,
                    Token::If,
                    Token::Else,
                    Token::Def,
                    Token::Print,
                    Token::And,
                    Token::Or,
                    Token::Not,
                    Token::None,
                    Token::True,
                    Token::False,
                    Token::Id("classy".to_string()),
                    Token::Newline,
                    Token::Eof]);
    // `str` is not a keyword; the parser gives it meaning.
    assert_eq!(tokens_of("str")[0], Token::Id("str".to_string()));
    assert_eq!(tokens_of("_x9")[0], Token::Id("_x9".to_string()));
}

#[test]
fn operators_two_char_before_one_char() {
    assert_eq!(tokens_of("a == b != c <= d >= e < f > g = h"),
               vec![Token::Id("a".to_string()),
                    Token::Eq,
                    Token::Id("b".to_string()),
                    Token::NotEq,
                    Token::Id("c".to_string()),
                    Token::LessOrEq,
                    Token::Id("d".to_string()),
                    Token::GreaterOrEq,
                    Token::Id("e".to_string()),
                    Token::Char('<'),
                    Token::Id("f".to_string()),
                    Token::Char('>'),
                    Token::Id("g".to_string()),
                    Token::Char('='),
                    Token::Id("h".to_string()),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn indent_and_dedent() {
    assert_eq!(tokens_of("if x:\n  y\nz"),
               vec![Token::If,
                    Token::Id("x".to_string()),
                    Token::Char(':'),
                    Token::Newline,
                    Token::Indent,
                    Token::Id("y".to_string()),
                    Token::Newline,
                    Token::Dedent,
                    Token::Id("z".to_string()),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn two_levels_unwind_with_two_dedents() {
    assert_eq!(tokens_of("a:\n  b:\n    c\nd"),
               vec![Token::Id("a".to_string()),
                    Token::Char(':'),
                    Token::Newline,
                    Token::Indent,
                    Token::Id("b".to_string()),
                    Token::Char(':'),
                    Token::Newline,
                    Token::Indent,
                    Token::Id("c".to_string()),
                    Token::Newline,
                    Token::Dedent,
                    Token::Dedent,
                    Token::Id("d".to_string()),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn trailing_newline_closes_open_blocks() {
    // A file ending in a line break unwinds the indentation before Eof.
    assert_eq!(tokens_of("if x:\n  y\n"),
               vec![Token::If,
                    Token::Id("x".to_string()),
                    Token::Char(':'),
                    Token::Newline,
                    Token::Indent,
                    Token::Id("y".to_string()),
                    Token::Newline,
                    Token::Dedent,
                    Token::Eof]);
    // Without one the block stays open and a newline is synthesized.
    assert_eq!(tokens_of("if x:\n  y"),
               vec![Token::If,
                    Token::Id("x".to_string()),
                    Token::Char(':'),
                    Token::Newline,
                    Token::Indent,
                    Token::Id("y".to_string()),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn blank_and_comment_lines_do_not_move_indentation() {
    assert_eq!(tokens_of("if x:\n  y\n\n      \n  # comment\n  z\nw"),
               vec![Token::If,
                    Token::Id("x".to_string()),
                    Token::Char(':'),
                    Token::Newline,
                    Token::Indent,
                    Token::Id("y".to_string()),
                    Token::Newline,
                    Token::Id("z".to_string()),
                    Token::Newline,
                    Token::Dedent,
                    Token::Id("w".to_string()),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn consecutive_newlines_collapse() {
    assert_eq!(tokens_of("x\n\n\ny"),
               vec![Token::Id("x".to_string()),
                    Token::Newline,
                    Token::Id("y".to_string()),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn leading_whitespace_on_the_first_line_is_ignored() {
    assert_eq!(tokens_of("  x"),
               vec![Token::Id("x".to_string()), Token::Newline, Token::Eof]);
}

#[test]
fn comment_runs_to_end_of_line() {
    assert_eq!(tokens_of("x # all of this is # ignored"),
               vec![Token::Id("x".to_string()), Token::Newline, Token::Eof]);
    assert_eq!(tokens_of("# a comment-only program"), vec![Token::Eof]);
}

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(tokens_of(""), vec![Token::Eof]);
    assert_eq!(tokens_of("\n"), vec![Token::Eof]);
}

#[test]
fn string_literals_and_escapes() {
    assert_eq!(tokens_of("'hello'")[0], Token::String("hello".to_string()));
    assert_eq!(tokens_of("\"world\"")[0], Token::String("world".to_string()));
    assert_eq!(tokens_of(r"'a\nb\tc\rd'")[0],
               Token::String("a\nb\tc\rd".to_string()));
    assert_eq!(tokens_of(r#"'it\'s \"fine\" \\'"#)[0],
               Token::String("it's \"fine\" \\".to_string()));
    // A quote of the other kind needs no escape.
    assert_eq!(tokens_of("\"don't\"")[0], Token::String("don't".to_string()));
}

#[test]
fn numbers() {
    assert_eq!(tokens_of("0 7 2147483647"),
               vec![Token::Number(0),
                    Token::Number(7),
                    Token::Number(2_147_483_647),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn punctuation_comes_through_as_chars() {
    assert_eq!(tokens_of("(.,:)"),
               vec![Token::Char('('),
                    Token::Char('.'),
                    Token::Char(','),
                    Token::Char(':'),
                    Token::Char(')'),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn token_equality_is_structural() {
    assert_eq!(Token::Number(1), Token::Number(1));
    assert_ne!(Token::Number(1), Token::Number(2));
    assert_eq!(Token::Id("a".to_string()), Token::Id("a".to_string()));
    assert_ne!(Token::Id("a".to_string()), Token::String("a".to_string()));
    assert_eq!(Token::Dedent, Token::Dedent);
}

#[test]
fn malformed_input_is_rejected() {
    assert!(Lexer::new("'unterminated").is_err());
    assert!(Lexer::new("\"unterminated").is_err());
    assert!(Lexer::new("'ends in backslash\\").is_err());
    assert!(Lexer::new("'line\nbreak'").is_err());
    assert!(Lexer::new(r"'bad \q escape'").is_err());
    assert!(Lexer::new("99999999999999999999").is_err());
    assert!(Lexer::new("x\t= 1").is_err());
}
