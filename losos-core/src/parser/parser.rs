use crate::{
    lexer::prelude::{scan, Literal, Token, TokenKind},
    utils::prelude::Reporter
};
use super::error::{ParseError, ParseErrorType};
use super::ast::Expression;

pub type ParseResult = Result<Expression, ParseError>;

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// `tokens` must end with an `Eof` token, as produced by the lexer.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
        }
    }

    /// Parses a single expression. On a syntax error the diagnostic goes to
    /// `reporter` and no tree is returned.
    pub fn parse(&mut self, reporter: &mut Reporter) -> Option<Expression> {
        match self.expression() {
            Ok(expression) => {
                tracing::debug!(%expression, "parsed expression");
                Some(expression)
            },
            Err(err) => {
                tracing::debug!(line = err.token.line, error = err.details(), "parse aborted");
                reporter.error_at_token(&err.token, err.details());
                None
            }
        }
    }

    pub fn expression(&mut self) -> ParseResult {
        self.equality()
    }

    fn equality(&mut self) -> ParseResult {
        self.binary_level(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::comparison
        )
    }

    fn comparison(&mut self) -> ParseResult {
        self.binary_level(
            &[TokenKind::Greater, TokenKind::GreaterEqual, TokenKind::Less, TokenKind::LessEqual],
            Self::term
        )
    }

    fn term(&mut self) -> ParseResult {
        self.binary_level(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    fn factor(&mut self) -> ParseResult {
        self.binary_level(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    // Left-associative: `a - b - c` folds into `(a - b) - c`.
    fn binary_level(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> ParseResult
    ) -> ParseResult {
        let mut expression = operand(self)?;

        while let Some(operator) = self.match_any(operators) {
            let right = operand(self)?;
            expression = Expression::binary(expression, operator, right);
        }

        Ok(expression)
    }

    fn unary(&mut self) -> ParseResult {
        if let Some(operator) = self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let right = self.unary()?;
            return Ok(Expression::unary(operator, right));
        }

        self.primary()
    }

    fn primary(&mut self) -> ParseResult {
        let token = self.peek().clone();

        let value = match token.kind {
            TokenKind::False => Literal::Bool(false),
            TokenKind::True => Literal::Bool(true),
            TokenKind::Nil => Literal::Nil,
            TokenKind::Number | TokenKind::String => match token.literal {
                Some(literal) => literal,
                None => unreachable!("{} token without a literal", token.kind),
            },
            TokenKind::LeftParen => {
                self.advance();
                let expression = self.expression()?;
                self.expect_one(TokenKind::RightParen, ParseErrorType::ExpectRightParen)?;

                return Ok(Expression::grouping(expression));
            },
            _ => return parse_error(ParseErrorType::ExpectExpression, token),
        };

        self.advance();

        Ok(Expression::literal(value))
    }

    /// Skips tokens up to the next statement boundary: just past a `;`, or
    /// in front of a keyword that starts a statement.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            if self.peek().kind.is_statement_start() {
                return;
            }

            self.advance();
        }
    }

    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }

        self.previous()
    }

    fn match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.iter().any(|kind| self.check(*kind)) {
            return Some(self.advance().clone());
        }

        None
    }

    fn expect_one(&mut self, kind: TokenKind, error: ParseErrorType) -> Result<&Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        parse_error(error, self.peek().clone())
    }
}

/// Scans and parses `src`. A scanner error leaves no tree even when the
/// remaining tokens parse.
pub fn parse(src: &str, reporter: &mut Reporter) -> Option<Expression> {
    let tokens = scan(src, reporter);
    let mut parser = Parser::new(tokens);

    let expression = parser.parse(reporter)?;

    if reporter.had_error() {
        return None;
    }

    Some(expression)
}

pub fn parse_error<T>(error: ParseErrorType, token: Token) -> Result<T, ParseError> {
    Err(ParseError { error, token })
}
