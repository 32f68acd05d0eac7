use insta::assert_snapshot;

use crate::{
    lexer::prelude::{scan, Literal, TokenKind},
    utils::prelude::Reporter
};
use super::prelude::{parse, Expression, ParseErrorType, Parser, Postfix};

fn parse_ok(src: &str) -> Expression {
    let mut reporter = Reporter::null();
    let expression = parse(src, &mut reporter);

    assert!(!reporter.had_error(), "unexpected errors: {:?}", reporter.reports());

    expression.expect("expression")
}

fn parse_err(src: &str) -> Vec<String> {
    let mut reporter = Reporter::null();
    let expression = parse(src, &mut reporter);

    assert!(expression.is_none());

    reporter.syntax_errors().map(|error| error.to_string()).collect()
}

#[test]
fn test_precedence() {
    assert_snapshot!(parse_ok("1 + 2 * 3"), @"(+ 1 (* 2 3))");
    assert_snapshot!(parse_ok("1 * 2 + 3"), @"(+ (* 1 2) 3)");
    assert_snapshot!(parse_ok("1 < 2 == 3 >= 4"), @"(== (< 1 2) (>= 3 4))");
    assert_snapshot!(parse_ok("-1 * !true"), @"(* (- 1) (! true))");
}

#[test]
fn test_left_associativity() {
    assert_snapshot!(parse_ok("1 - 2 - 3"), @"(- (- 1 2) 3)");
    assert_snapshot!(parse_ok("8 / 4 / 2"), @"(/ (/ 8 4) 2)");
    assert_snapshot!(parse_ok("1 == 2 != 3"), @"(!= (== 1 2) 3)");
}

#[test]
fn test_unary_is_right_recursive() {
    assert_snapshot!(parse_ok("!!false"), @"(! (! false))");
    assert_snapshot!(parse_ok("- -3"), @"(- (- 3))");
}

#[test]
fn test_grouping() {
    assert_snapshot!(parse_ok("-123 * (45.67)"), @"(* (- 123) (group 45.67))");
    assert_snapshot!(parse_ok("((nil))"), @"(group (group nil))");

    let expression = parse_ok("(\"text\")");
    assert_eq!(
        expression,
        Expression::grouping(Expression::literal(Literal::String("text".into())))
    );
}

#[test]
fn test_postfix() {
    assert_eq!(parse_ok("(1 + 2) * (4 - 3)").postfix(), "1 2 + 4 3 - *");
    assert_eq!(parse_ok("-2 * !nil").postfix(), "2 neg nil ! *");
}

#[test]
fn test_trailing_tokens_are_ignored() {
    assert_snapshot!(parse_ok("1 2"), @"1");
}

#[test]
fn test_missing_right_paren() {
    assert_eq!(parse_err("(1 + 2"), vec!["[line 1] Error at end: Expect ')' after expression."]);
    assert_eq!(parse_err("(1 2"), vec!["[line 1] Error at '2': Expect ')' after expression."]);
}

#[test]
fn test_expect_expression() {
    assert_eq!(parse_err("+ 1"), vec!["[line 1] Error at '+': Expect expression."]);
    assert_eq!(parse_err("1 +"), vec!["[line 1] Error at end: Expect expression."]);
    assert_eq!(parse_err(""), vec!["[line 1] Error at end: Expect expression."]);
    assert_eq!(parse_err("\n\nfoo"), vec!["[line 3] Error at 'foo': Expect expression."]);
}

#[test]
fn test_scan_error_yields_no_tree() {
    assert_eq!(parse_err("1 @"), vec!["[line 1] Error: Unexpected character."]);
    assert_eq!(parse_err("1 # + 2"), vec!["[line 1] Error: Unexpected character."]);
}

#[test]
fn test_first_error_stops_parsing() {
    assert_eq!(parse_err("(+) * (-)").len(), 1);
}

#[test]
fn test_error_carries_offending_token() {
    let mut reporter = Reporter::null();
    let tokens = scan("1 * )", &mut reporter);
    let mut parser = Parser::new(tokens);

    let error = parser.expression().unwrap_err();

    assert_eq!(error.error, ParseErrorType::ExpectExpression);
    assert_eq!(error.token.kind, TokenKind::RightParen);
    assert_eq!(error.details(), "Expect expression.");
}

#[test]
fn test_synchronize_stops_after_semicolon() {
    let mut reporter = Reporter::null();
    let tokens = scan("1 + ; 2", &mut reporter);
    let mut parser = Parser::new(tokens);

    assert!(parser.expression().is_err());
    assert_eq!(parser.peek().kind, TokenKind::Semicolon);

    parser.synchronize();

    assert_eq!(parser.peek().kind, TokenKind::Number);
    assert_snapshot!(parser.expression().unwrap(), @"2");
}

#[test]
fn test_synchronize_stops_before_statement_keyword() {
    let mut reporter = Reporter::null();
    let tokens = scan(") ) print 1", &mut reporter);
    let mut parser = Parser::new(tokens);

    assert!(parser.expression().is_err());

    parser.synchronize();

    assert_eq!(parser.peek().kind, TokenKind::Print);
}

#[test]
fn test_synchronize_stops_at_end() {
    let mut reporter = Reporter::null();
    let mut parser = Parser::new(scan(") ) )", &mut reporter));

    parser.synchronize();

    assert!(parser.is_at_end());
}
