use std::env;
use std::process::ExitCode;

mod cli;
mod exits;
mod logging;
mod pass;
mod rand;
mod settings;
mod terminal;
mod tui;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();
    logging::init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
