use std::rc::Rc;

use losos_core::{
	parser::prelude::{parse, Postfix},
	utils::prelude::Reporter
};

use crate::{prompt::{read_input, Input}, ConsoleReporterIO};

pub fn start(postfix: bool) -> std::io::Result<()> {
	let mut stdin = std::io::stdin().lock();
	let mut reporter = Reporter::new(Rc::new(ConsoleReporterIO));

	while let Input::Line(input) = read_input(&mut stdin)? {
		if let Some(expression) = parse(&input, &mut reporter) {
			if postfix {
				println!("{}", expression.postfix());
			} else {
				println!("{expression}");
			}
		}

		reporter.clear();
	}

	Ok(())
}
