use std::io::{BufRead, Write};

const PROMPT: &str = "> ";

pub enum Input {
	Line(String),
	Exit,
}

/// Prints the prompt and reads one line. EOF and `.exit` both end the loop.
pub fn read_input(stdin: &mut impl BufRead) -> std::io::Result<Input> {
	loop {
		let mut input = String::new();

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			println!();
			return Ok(Input::Exit);
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			".exit" => return Ok(Input::Exit),
			_ => return Ok(Input::Line(input)),
		}
	}
}
