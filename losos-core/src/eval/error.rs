use thiserror::Error;

use crate::lexer::prelude::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeErrorType {
    #[error("Operand must be a number.")]
    OperandMustBeNumber,
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,
    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings,
}

/// Type violation raised while evaluating; `token` is the offending operator.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}\n[line {line}]", line = .token.line)]
pub struct RuntimeError {
    pub token: Token,
    pub error: RuntimeErrorType,
}

impl RuntimeError {
    pub fn new(token: &Token, error: RuntimeErrorType) -> Self {
        Self {
            token: token.clone(),
            error,
        }
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}
