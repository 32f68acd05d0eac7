use std::fmt::Display;

use crate::lexer::prelude::{Literal, Token, TokenKind};

pub trait Postfix {
    fn postfix(&self) -> String;
}

// expression -> <equality>
// equality   -> <comparison> { ( "!=" | "==" ) <comparison> }
// comparison -> <term> { ( ">" | ">=" | "<" | "<=" ) <term> }
// term       -> <factor> { ( "-" | "+" ) <factor> }
// factor     -> <unary> { ( "/" | "*" ) <unary> }
// unary      -> ( "!" | "-" ) <unary> | <primary>
// primary    -> NUMBER | STRING | "true" | "false" | "nil" | "(" <expression> ")"
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal {
        value: Literal,
    },
    Grouping {
        expression: Box<Expression>,
    },
    Unary {
        operator: Token,
        right: Box<Expression>,
    },
    Binary {
        left: Box<Expression>,
        operator: Token,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn literal(value: Literal) -> Self {
        Self::Literal { value }
    }

    pub fn grouping(expression: Expression) -> Self {
        Self::Grouping { expression: Box::new(expression) }
    }

    pub fn unary(operator: Token, right: Expression) -> Self {
        Self::Unary { operator, right: Box::new(right) }
    }

    pub fn binary(left: Expression, operator: Token, right: Expression) -> Self {
        Self::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

/// Lisp-like dump of the tree: `(* (- 123) (group 45.67))`.
impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Grouping { expression } => write!(f, "(group {expression})"),
            Self::Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
            Self::Binary { left, operator, right } => {
                write!(f, "({} {left} {right})", operator.lexeme)
            }
        }
    }
}

impl Postfix for Expression {
    fn postfix(&self) -> String {
        match self {
            Self::Literal { value } => format!("{value}"),
            Self::Grouping { expression } => expression.postfix(),
            Self::Unary { operator, right } => {
                let operator = match operator.kind {
                    TokenKind::Minus => "neg",
                    _ => operator.lexeme.as_str(),
                };

                format!("{} {operator}", right.postfix())
            },
            Self::Binary { left, operator, right } => {
                format!("{} {} {}", left.postfix(), right.postfix(), operator.lexeme)
            }
        }
    }
}
