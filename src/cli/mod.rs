//! Non-interactive CLI mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

use std::io;
use std::process::ExitCode;

use crate::pass::Generator;

pub use context::{Context, Halt};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Exit status for a generation failure (no password produced).
pub const EXIT_GENERATION: u8 = 1;
/// Exit status for a bad command line.
pub const EXIT_USAGE: u8 = 2;
/// Exit status when the password could not be written to stdout.
pub const EXIT_OUTPUT: u8 = 3;

pub fn run(args: Vec<String>) -> ExitCode {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try 'passgen --help' for usage.");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    if ctx.flags.interactive && !ctx.flags.help && !ctx.flags.version {
        return crate::tui::run();
    }

    let stdout = io::stdout();
    let outcome = ctx.run(&mut Generator::new(), &mut stdout.lock());
    ExitCode::from(report(outcome))
}

/// Report a failed run on stderr and pick the exit status.
fn report(outcome: Result<(), Halt>) -> u8 {
    match outcome {
        Ok(()) | Err(Halt::Done) => 0,
        Err(Halt::Generation(e)) => {
            tracing::debug!(error = ?e, "generation rejected");
            prompts::error(&format!("Error: {e}"));
            EXIT_GENERATION
        }
        Err(Halt::Output(e)) => {
            prompts::error(&format!("Error writing password: {e}"));
            EXIT_OUTPUT
        }
    }
}
