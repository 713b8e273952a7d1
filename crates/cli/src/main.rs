use std::process::ExitCode;

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use calc_lib::session::{self, Reply};

/// A simple floating-point calculator.
///
/// Evaluates infix arithmetic with support for floating-point operations,
/// something the standard 'expr' command does not provide. Arguments are
/// joined with spaces, so both `calc 3 + 3` and `calc '1 / 3 * 9'` work.
/// Quote the expression when it contains '*', otherwise the shell's
/// globbing may cause surprises. With no arguments, starts an interactive
/// session; type 'exit' or 'quit' to leave it.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Expression to evaluate; omit to start an interactive session
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

const PROMPT: &str = "calc> ";

fn repl() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    #[cfg(feature = "with-file-history")]
    if rl.load_history(".calc_history").is_err() {
        println!("No previous history.");
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                match session::respond(&line) {
                    Reply::Skip => {}
                    Reply::Quit => break,
                    Reply::Output(output) => println!("{output}"),
                }
            }
            // End of the session, same as an exit word
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            // A read failure is logged but does not fail the session
            Err(err) => {
                eprintln!("{err}");
                break;
            }
        }
    }

    #[cfg(feature = "with-file-history")]
    if let Err(err) = rl.save_history(".calc_history") {
        eprintln!("Failed to save history file:");
        eprintln!("{err}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.tokens.is_empty() {
        match repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        }
    } else {
        match session::batch(&cli.tokens) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                println!("ERROR: {err}");
                ExitCode::FAILURE
            }
        }
    }
}
