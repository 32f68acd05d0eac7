#[cfg(test)]
mod tests;

use std::{fs::File, io::BufReader, path::Path};

use utf8_chars::BufReadCharsExt;

use crate::{
    eval::prelude::{interpret, Value},
    lexer::prelude::Lexer,
    parser::prelude::Parser,
    utils::prelude::{Error, Reporter}
};

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(Value),
    /// Scanning or parsing failed; nothing was evaluated.
    SyntaxFailure,
    RuntimeFailure,
}

/// Scans, parses and evaluates one unit of source text. Diagnostics end up
/// in `reporter`; the caller clears it between unrelated inputs.
pub fn run(src: &str, reporter: &mut Reporter) -> Outcome {
    let tokens = Lexer::new(src.chars()).scan(reporter);
    let expression = Parser::new(tokens).parse(reporter);

    let expression = match expression {
        Some(expression) if !reporter.had_error() => expression,
        _ => return Outcome::SyntaxFailure,
    };

    match interpret(&expression, reporter) {
        Some(value) => Outcome::Value(value),
        None => Outcome::RuntimeFailure,
    }
}

pub fn run_file(path: &Path, reporter: &mut Reporter) -> Result<Value, Error> {
    let src = read_source(path)?;

    tracing::info!(path = %path.display(), bytes = src.len(), "running file");

    match run(&src, reporter) {
        Outcome::Value(value) => Ok(value),
        Outcome::SyntaxFailure => Err(Error::Syntax {
            path: path.to_path_buf(),
            src,
            errors: reporter.syntax_errors().cloned().collect(),
        }),
        Outcome::RuntimeFailure => match reporter.runtime_errors().last() {
            Some(error) => Err(Error::Runtime {
                path: path.to_path_buf(),
                error: error.clone(),
                src,
            }),
            None => unreachable!("runtime failure without a reported error"),
        },
    }
}

pub fn read_source(path: &Path) -> Result<String, Error> {
    let file = File::open(path).map_err(|err| Error::StdIo { err: err.kind() })?;

    let file_size = file.metadata()
        .map_err(|err| Error::StdIo { err: err.kind() })?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut reader = BufReader::new(file);

    for ch in reader.chars() {
        src.push(ch.map_err(|err| Error::StdIo { err: err.kind() })?);
    }

    Ok(src)
}
