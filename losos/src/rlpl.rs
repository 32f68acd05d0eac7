use losos_core::lexer::prelude::Lexer;

use crate::prompt::{read_input, Input};

pub fn start() -> std::io::Result<()> {
	let mut stdin = std::io::stdin().lock();

	while let Input::Line(input) = read_input(&mut stdin)? {
		for result in Lexer::new(input.chars()) {
			match result {
				Ok(token) => println!("{token}"),
				Err(err) => println!("[line {}] Lexical Error: {}", err.line, err.details()),
			}
		}
	}

	Ok(())
}
