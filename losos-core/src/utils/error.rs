use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::eval::prelude::RuntimeError;
use super::{
    diagnostic::{Diagnostic, Label, Location},
    reporter::SyntaxError,
    src_span::SrcSpan
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse source code")]
    Syntax {
        path: PathBuf,
        src: String,
        errors: Vec<SyntaxError>
    },
    #[error("evaluation failed")]
    Runtime {
        path: PathBuf,
        src: String,
        error: RuntimeError
    },
    #[error("IO operation failed")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl Error {
    /// Plain `[line N] ...` lines, one per diagnostic.
    pub fn plain_string(&self) -> String {
        match self {
            Error::Syntax { errors, .. } => errors.iter()
                .map(|error| error.to_string())
                .collect::<Vec<String>>()
                .join("\n"),
            Error::Runtime { error, .. } => error.to_string(),
            Error::StdIo { err } => format!("{self}: {err}"),
        }
    }

    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        match self.pretty(&mut nocolor) {
            Ok(()) => String::from_utf8_lossy(nocolor.as_slice()).into_owned(),
            Err(_) => self.plain_string(),
        }
    }

    pub fn pretty(&self, buf: &mut Buffer) -> std::io::Result<()> {
        use std::io::Write;

        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf)?;
            writeln!(buf)?;
        }

        Ok(())
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic<'_>> {
        match self {
            Error::Syntax { path, src, errors } => errors.iter()
                .map(|error| match error.span {
                    Some(span) => Diagnostic {
                        title: "Syntax error".into(),
                        text: String::new(),
                        location: Some(Location {
                            src,
                            path: path.clone(),
                            label: Label {
                                text: Some(error.message.clone()),
                                span: clamp(span, src),
                            },
                        }),
                    },
                    None => Diagnostic {
                        title: "Syntax error".into(),
                        text: error.to_string(),
                        location: None,
                    }
                })
                .collect(),
            Error::Runtime { path, src, error } => {
                vec![Diagnostic {
                    title: "Runtime error".into(),
                    text: format!("[line {}]", error.token.line),
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(error.message()),
                            span: clamp(error.token.span, src),
                        },
                    }),
                }]
            },
            Error::StdIo { err } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    location: None,
                }]
            }
        }
    }
}

// Spans are produced from the same text, but a caller may pair an error
// with a different `src`.
fn clamp(span: SrcSpan, src: &str) -> SrcSpan {
    let len = src.len() as u32;
    SrcSpan::from(span.start.min(len), span.end.min(len))
}
