use crate::utils::prelude::{Reporter, SrcSpan};

use super::prelude::{scan, Lexer, LexicalErrorType, Literal, Token, TokenKind};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_punctuation() {
    let mut reporter = Reporter::null();
    let tokens = scan("(){},.-+;*/", &mut reporter);

    assert_eq!(kinds(&tokens), vec![
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Minus,
        TokenKind::Plus,
        TokenKind::Semicolon,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Eof,
    ]);
    assert!(!reporter.had_error());
}

#[test]
fn test_one_or_two_char_operators() {
    let mut reporter = Reporter::null();
    let tokens = scan("! != = == < <= > >= !==", &mut reporter);

    assert_eq!(kinds(&tokens), vec![
        TokenKind::Bang,
        TokenKind::BangEqual,
        TokenKind::Equal,
        TokenKind::EqualEqual,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::BangEqual,
        TokenKind::Equal,
        TokenKind::Eof,
    ]);
    assert_eq!(tokens[1].lexeme, "!=");
}

#[test]
fn test_comments_and_whitespace() {
    let mut reporter = Reporter::null();
    let tokens = scan("1 // ignored ( \" \n\t2\r\n/ 3", &mut reporter);

    assert_eq!(kinds(&tokens), vec![
        TokenKind::Number,
        TokenKind::Number,
        TokenKind::Slash,
        TokenKind::Number,
        TokenKind::Eof,
    ]);
    assert_eq!(tokens.iter().map(|token| token.line).collect::<Vec<_>>(), vec![1, 2, 3, 3, 3]);
    assert!(!reporter.had_error());
}

#[test]
fn test_numbers() {
    let mut reporter = Reporter::null();
    let tokens = scan("123.45 7 0.5 10", &mut reporter);

    let literals = tokens.iter()
        .filter_map(|token| token.literal.clone())
        .collect::<Vec<Literal>>();

    assert_eq!(literals, vec![
        Literal::Number(123.45),
        Literal::Number(7.0),
        Literal::Number(0.5),
        Literal::Number(10.0),
    ]);

    for token in &tokens[..4] {
        let literal = token.literal.as_ref().map(|literal| literal.to_string());
        assert_eq!(literal.as_deref(), Some(token.lexeme.as_str()));
    }
}

#[test]
fn test_number_trailing_dot() {
    let mut reporter = Reporter::null();
    let tokens = scan("123. .5", &mut reporter);

    assert_eq!(kinds(&tokens), vec![
        TokenKind::Number,
        TokenKind::Dot,
        TokenKind::Dot,
        TokenKind::Number,
        TokenKind::Eof,
    ]);
    assert_eq!(tokens[0].lexeme, "123");
    assert_eq!(tokens[3].literal, Some(Literal::Number(5.0)));
}

#[test]
fn test_strings() {
    let mut reporter = Reporter::null();
    let tokens = scan("\"hello\" \"multi\nline\" \"\"", &mut reporter);

    assert_eq!(tokens[0].literal, Some(Literal::String("hello".into())));
    assert_eq!(tokens[0].lexeme, "\"hello\"");
    assert_eq!(tokens[0].span, SrcSpan::from(0, 7));

    assert_eq!(tokens[1].literal, Some(Literal::String("multi\nline".into())));
    assert_eq!(tokens[1].line, 2);

    assert_eq!(tokens[2].literal, Some(Literal::String(String::new())));
    assert!(!reporter.had_error());
}

#[test]
fn test_strings_keep_escapes_verbatim() {
    let mut reporter = Reporter::null();
    let tokens = scan(r#""a\tb""#, &mut reporter);

    assert_eq!(tokens[0].literal, Some(Literal::String(r"a\tb".into())));
}

#[test]
fn test_unterminated_string() {
    let mut reporter = Reporter::null();
    let tokens = scan("1 \"abc", &mut reporter);

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(reporter.error_count(), 1);

    let error = reporter.syntax_errors().next().unwrap();
    assert_eq!(error.to_string(), "[line 1] Error: Unterminated string.");
}

#[test]
fn test_keywords_and_identifiers() {
    let mut reporter = Reporter::null();
    let tokens = scan(
        "and class else false for fun if nil or print return super this true var while \
         orchid _private x1 Nil",
        &mut reporter
    );

    let reserved = tokens.iter().take(16).all(|token| token.kind.is_reserved_word());
    assert!(reserved);

    assert_eq!(kinds(&tokens[16..]), vec![
        TokenKind::Identifier,
        TokenKind::Identifier,
        TokenKind::Identifier,
        TokenKind::Identifier,
        TokenKind::Eof,
    ]);
    assert_eq!(tokens[17].lexeme, "_private");
}

#[test]
fn test_unexpected_character_continues() {
    let mut reporter = Reporter::null();
    let tokens = scan("1 @ # 2", &mut reporter);

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]);
    assert_eq!(reporter.error_count(), 2);
    assert!(reporter.syntax_errors()
        .all(|error| error.to_string() == "[line 1] Error: Unexpected character."));
}

#[test]
fn test_lexer_yields_errors_in_stream() {
    let mut lexer = Lexer::new("$ 1".chars());

    let first = lexer.next().unwrap();
    assert_eq!(first.unwrap_err().error, LexicalErrorType::UnexpectedCharacter { ch: '$' });

    let second = lexer.next().unwrap().unwrap();
    assert_eq!(second.kind, TokenKind::Number);

    let eof = lexer.next().unwrap().unwrap();
    assert!(eof.is_eof());

    assert!(lexer.next().is_none());
}

#[test]
fn test_eof_line() {
    let mut reporter = Reporter::null();

    let tokens = scan("", &mut reporter);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[0].lexeme, "");

    let tokens = scan("1\n2\n", &mut reporter);
    assert_eq!(tokens.last().unwrap().line, 3);
}

#[test]
fn test_token_display() {
    let mut reporter = Reporter::null();
    let tokens = scan("(12.5 \"s\"", &mut reporter);

    let dump = tokens.iter()
        .map(|token| token.to_string())
        .collect::<Vec<String>>();

    assert_eq!(dump, vec![
        "LEFT_PAREN ( null",
        "NUMBER 12.5 12.5",
        "STRING \"s\" s",
        "EOF  null",
    ]);
}

#[test]
fn test_multibyte_spans() {
    let mut reporter = Reporter::null();
    let tokens = scan("\"ё\" + 1", &mut reporter);

    assert_eq!(tokens[0].span, SrcSpan::from(0, 4));
    assert_eq!(tokens[1].span, SrcSpan::from(5, 6));
}
