use std::rc::Rc;

use losos_core::{
	runner::{run, Outcome},
	utils::prelude::Reporter
};

use crate::{prompt::{read_input, Input}, ConsoleReporterIO};

pub fn start() -> std::io::Result<()> {
	let mut stdin = std::io::stdin().lock();
	let mut reporter = Reporter::new(Rc::new(ConsoleReporterIO));

	println!("Type .exit or press Ctrl-D to quit\n");

	while let Input::Line(input) = read_input(&mut stdin)? {
		if let Outcome::Value(value) = run(&input, &mut reporter) {
			println!("{value}");
		}

		// every line starts with an empty sink
		reporter.clear();
	}

	Ok(())
}
