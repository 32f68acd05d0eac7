use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnexpectedCharacter { ch: char },
    UnterminatedString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub line: u32,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> &'static str {
        match self.error {
            LexicalErrorType::UnexpectedCharacter { .. } => "Unexpected character.",
            LexicalErrorType::UnterminatedString => "Unterminated string.",
        }
    }
}
