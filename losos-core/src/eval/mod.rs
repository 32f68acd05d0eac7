pub mod error;
pub mod value;

pub mod prelude {
    pub use super::{
        error::*,
        value::*,
        evaluate,
        interpret
    };
}


use crate::{
    lexer::prelude::{Token, TokenKind},
    parser::prelude::Expression,
    utils::prelude::Reporter
};
use self::{
    error::{RuntimeError, RuntimeErrorType},
    value::Value
};

pub type EvalResult = Result<Value, RuntimeError>;

/// Evaluates the tree and hands the runtime error, if any, to `reporter`.
pub fn interpret(expression: &Expression, reporter: &mut Reporter) -> Option<Value> {
    match evaluate(expression) {
        Ok(value) => {
            tracing::debug!(%value, "evaluated expression");
            Some(value)
        },
        Err(err) => {
            tracing::debug!(line = err.token.line, error = %err.error, "runtime error");
            reporter.runtime_error(err);
            None
        }
    }
}

pub fn evaluate(expression: &Expression) -> EvalResult {
    match expression {
        Expression::Literal { value } => Ok(Value::from(value)),
        Expression::Grouping { expression } => evaluate(expression),
        Expression::Unary { operator, right } => eval_unary(operator, right),
        Expression::Binary { left, operator, right } => eval_binary(left, operator, right),
    }
}

fn eval_unary(operator: &Token, right: &Expression) -> EvalResult {
    let right = evaluate(right)?;

    match operator.kind {
        TokenKind::Bang => Ok(Value::Boolean(!right.is_truthy())),
        TokenKind::Minus => match right {
            Value::Number(value) => Ok(Value::Number(-value)),
            _ => runtime_error(operator, RuntimeErrorType::OperandMustBeNumber),
        },
        _ => unreachable!("parser produced unary operator `{}`", operator.lexeme)
    }
}

fn eval_binary(left: &Expression, operator: &Token, right: &Expression) -> EvalResult {
    let left = evaluate(left)?;
    let right = evaluate(right)?;

    match operator.kind {
        TokenKind::Plus => match (left, right) {
            (Value::Number(left), Value::Number(right)) => Ok(Value::Number(left + right)),
            (Value::String(left), Value::String(right)) => Ok(Value::String(left + &right)),
            _ => runtime_error(operator, RuntimeErrorType::OperandsMustBeNumbersOrStrings),
        },
        TokenKind::Minus => numeric(operator, left, right, |left, right| Value::Number(left - right)),
        TokenKind::Star => numeric(operator, left, right, |left, right| Value::Number(left * right)),
        TokenKind::Slash => numeric(operator, left, right, |left, right| Value::Number(left / right)),
        TokenKind::Greater => numeric(operator, left, right, |left, right| Value::Boolean(left > right)),
        TokenKind::GreaterEqual => numeric(operator, left, right, |left, right| Value::Boolean(left >= right)),
        TokenKind::Less => numeric(operator, left, right, |left, right| Value::Boolean(left < right)),
        TokenKind::LessEqual => numeric(operator, left, right, |left, right| Value::Boolean(left <= right)),
        TokenKind::EqualEqual => Ok(Value::Boolean(left == right)),
        TokenKind::BangEqual => Ok(Value::Boolean(left != right)),
        _ => unreachable!("parser produced binary operator `{}`", operator.lexeme)
    }
}

fn numeric(
    operator: &Token,
    left: Value,
    right: Value,
    apply: impl FnOnce(f64, f64) -> Value
) -> EvalResult {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => Ok(apply(left, right)),
        _ => runtime_error(operator, RuntimeErrorType::OperandsMustBeNumbers),
    }
}

fn runtime_error<T>(token: &Token, error: RuntimeErrorType) -> Result<T, RuntimeError> {
    Err(RuntimeError::new(token, error))
}
