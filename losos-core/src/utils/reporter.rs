use std::{fmt::Display, rc::Rc, sync::{Arc, RwLock}};

use thiserror::Error;

use crate::{
    eval::prelude::RuntimeError,
    lexer::prelude::{LexicalError, Token},
};
use super::src_span::SrcSpan;

/// A scanner or parser error, keyed by source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct SyntaxError {
    pub line: u32,
    /// Empty for scanner errors, ` at end` or ` at '<lexeme>'` for parser errors.
    pub location: String,
    pub message: String,
    pub span: Option<SrcSpan>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Syntax(SyntaxError),
    Runtime(RuntimeError),
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Syntax(error) => write!(f, "{error}"),
            Report::Runtime(error) => write!(f, "{error}"),
        }
    }
}

pub trait ReporterIO {
    fn emit_report(&self, report: &Report);
}

#[derive(Debug, Clone, Copy)]
pub struct NullReporterIO;

impl ReporterIO for NullReporterIO {
    fn emit_report(&self, _report: &Report) {}
}

#[derive(Debug, Default, Clone)]
pub struct VectorReporterIO {
    pub reports: Arc<RwLock<Vec<Report>>>
}

impl VectorReporterIO {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Report> {
        let mut reports = self.write_lock();
        std::mem::take(&mut *reports)
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Report>> {
        self.reports.write().expect("Vector lock poisoned")
    }
}

impl ReporterIO for VectorReporterIO {
    fn emit_report(&self, report: &Report) {
        let mut reports = self.write_lock();

        reports.push(report.clone());
    }
}

/// Diagnostic sink for one pipeline run.
///
/// Keeps every report in order and forwards it to the emitter as soon as it
/// arrives. The caller inspects the flags afterwards to pick an outcome and
/// calls [`Reporter::clear`] before reusing the sink for unrelated input.
pub struct Reporter {
    reports: Vec<Report>,
    had_error: bool,
    had_runtime_error: bool,
    emitter: Rc<dyn ReporterIO>
}

impl Reporter {
    pub fn new(emitter: Rc<dyn ReporterIO>) -> Self {
        Self {
            reports: vec![],
            had_error: false,
            had_runtime_error: false,
            emitter,
        }
    }

    pub fn null() -> Self {
        Self::new(Rc::new(NullReporterIO))
    }

    /// Scanner-stage entry point.
    pub fn error_at_line(&mut self, line: u32, message: impl Into<String>) {
        self.syntax(SyntaxError {
            line,
            location: String::new(),
            message: message.into(),
            span: None,
        });
    }

    /// Parser-stage entry point.
    pub fn error_at_token(&mut self, token: &Token, message: impl Into<String>) {
        let location = if token.is_eof() {
            " at end".to_string()
        } else {
            format!(" at '{}'", token.lexeme)
        };

        self.syntax(SyntaxError {
            line: token.line,
            location,
            message: message.into(),
            span: Some(token.span),
        });
    }

    pub fn lexical_error(&mut self, error: &LexicalError) {
        self.syntax(SyntaxError {
            line: error.line,
            location: String::new(),
            message: error.details().to_string(),
            span: Some(error.location),
        });
    }

    pub fn runtime_error(&mut self, error: RuntimeError) {
        self.had_runtime_error = true;
        self.push(Report::Runtime(error));
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    pub fn error_count(&self) -> usize {
        self.syntax_errors().count()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn syntax_errors(&self) -> impl Iterator<Item = &SyntaxError> {
        self.reports.iter().filter_map(|report| match report {
            Report::Syntax(error) => Some(error),
            Report::Runtime(_) => None,
        })
    }

    pub fn runtime_errors(&self) -> impl Iterator<Item = &RuntimeError> {
        self.reports.iter().filter_map(|report| match report {
            Report::Runtime(error) => Some(error),
            Report::Syntax(_) => None,
        })
    }

    pub fn take(&mut self) -> Vec<Report> {
        self.had_error = false;
        self.had_runtime_error = false;
        std::mem::take(&mut self.reports)
    }

    pub fn clear(&mut self) {
        let _ = self.take();
    }

    fn syntax(&mut self, error: SyntaxError) {
        self.had_error = true;
        self.push(Report::Syntax(error));
    }

    fn push(&mut self, report: Report) {
        self.emitter.emit_report(&report);
        self.reports.push(report);
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::null()
    }
}
