use crate::lexer::prelude::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorType {
    ExpectExpression,
    ExpectRightParen,
}

/// Unwinds the grammar functions up to [`super::parser::Parser::parse`],
/// which reports it and gives up on the current expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub token: Token
}

impl ParseError {
    pub fn details(&self) -> &'static str {
        match &self.error {
            ParseErrorType::ExpectExpression => "Expect expression.",
            ParseErrorType::ExpectRightParen => "Expect ')' after expression.",
        }
    }
}
