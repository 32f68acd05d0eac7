mod cli;
mod prompt;
mod repl;
mod rlpl;
mod rppl;

use std::{path::PathBuf, process::ExitCode, rc::Rc};

use clap::{ArgAction, Parser, Subcommand};
use cli::{print_finished, print_running};
use losos_core::{
    runner::run_file,
    utils::prelude::{Error, NullReporterIO, Report, Reporter, ReporterIO}
};
use tracing::Level;

// sysexits(3)
const EX_DATAERR: u8 = 65;
const EX_SOFTWARE: u8 = 70;
const EX_IOERR: u8 = 74;

#[derive(Parser)]
#[command(version, about = "Scans, parses and evaluates Lox expressions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluates the expression stored in a file
    Run {
        /// Path of source file
        path: PathBuf,
        /// Render diagnostics with source snippets
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Runs Read Eval Print Loop (default)
    Repl,
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl {
        /// Print the tree in reverse Polish notation
        #[arg(long, default_value_t = false)]
        postfix: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = match cli.command.unwrap_or(Command::Repl) {
        Command::Run { path, pretty } => return run(path, pretty, cli.verbose > 0),
        Command::Repl => {
            install_interrupt_handler();
            repl::start()
        },
        Command::Rlpl => rlpl::start(),
        Command::Rppl { postfix } => rppl::start(postfix),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(EX_IOERR)
        }
    }
}

fn run(path: PathBuf, pretty: bool, verbose: bool) -> ExitCode {
    let emitter: Rc<dyn ReporterIO> = if pretty {
        Rc::new(NullReporterIO)
    } else {
        Rc::new(ConsoleReporterIO)
    };
    let mut reporter = Reporter::new(emitter);

    if verbose {
        print_running(&path.to_string_lossy());
    }
    let start = std::time::Instant::now();

    let result = run_file(&path, &mut reporter);

    if verbose {
        print_finished(start.elapsed());
    }

    match result {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(err) => {
            if pretty || matches!(err, Error::StdIo { .. }) {
                print_error(&err);
            }

            ExitCode::from(match err {
                Error::Syntax { .. } => EX_DATAERR,
                Error::Runtime { .. } => EX_SOFTWARE,
                Error::StdIo { .. } => EX_IOERR,
            })
        }
    }
}

fn print_error(err: &Error) {
    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    let written = err.pretty(&mut buf)
        .and_then(|_| buf_writer.print(&buf));

    if written.is_err() {
        eprintln!("{}", err.plain_string());
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        println!("\nKeyboard Interrupt");
        std::process::exit(0);
    });

    if let Err(err) = installed {
        tracing::warn!(%err, "failed to install Ctrl-C handler");
    }
}

/// Writes every report to stderr as soon as it is recorded.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporterIO;

impl ReporterIO for ConsoleReporterIO {
    fn emit_report(&self, report: &Report) {
        eprintln!("{report}");
    }
}
