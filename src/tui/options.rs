use std::process::ExitCode;

use crate::cli::{EXIT_GENERATION, prompts};
use crate::pass::output::{self, Delivery};
use crate::pass::{CharacterTypeSet, Generator};
use crate::settings::Settings;
use crate::terminal::{print_error, print_success, reset_terminal};

use super::{
    get_numeric_input, get_yes_no, parse_length, print_banner, print_cancelled, print_summary,
};

/// Smallest length the prompt accepts.
pub const MIN_LENGTH: usize = 4;

pub fn gen_main_menu() -> ExitCode {
    reset_terminal();
    print_banner();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        print_error(&format!("Error loading settings: {}", e));
        Settings::default()
    });

    let Some((length, types)) = prompt_request(&settings) else {
        print_cancelled();
        return ExitCode::SUCCESS;
    };

    let password = match Generator::new().generate(length, &types) {
        Ok(p) => p,
        Err(e) => {
            println!();
            print_error(&format!("Error: {e}"));
            return ExitCode::from(EXIT_GENERATION);
        }
    };

    println!();
    print_success(&format!("Generated password: {}", password.as_str()));
    match output::copy_to_system(&password) {
        Delivery::Copied => print_success("Copied to clipboard!"),
        Delivery::CopyFailed(e) => {
            tracing::debug!(error = %e, "interactive clipboard copy failed");
            print_error("Error copying to clipboard. Password generated but not copied.");
        }
    }
    println!();
    print_summary(&password, &types);

    settings.length = length;
    settings.types = types;
    if let Err(e) = settings.save_to_file() {
        prompts::warn(&format!("Failed to save settings: {}", e));
    }

    ExitCode::SUCCESS
}

/// Walk the prompts. None if the user cancels at any step.
fn prompt_request(settings: &Settings) -> Option<(usize, CharacterTypeSet)> {
    let length = prompt_length(settings.length.max(MIN_LENGTH))?;

    let types = if get_yes_no("Use default settings (all character types)", true)? {
        CharacterTypeSet::all()
    } else {
        prompt_types(&settings.types)?
    };

    Some((length, types))
}

fn prompt_length(initial: usize) -> Option<usize> {
    loop {
        let raw = get_numeric_input("Password length", initial)?;
        match parse_length(&raw, MIN_LENGTH) {
            Ok(n) => return Some(n),
            Err(msg) => print_error(&msg),
        }
    }
}

fn prompt_types(current: &CharacterTypeSet) -> Option<CharacterTypeSet> {
    Some(CharacterTypeSet {
        numbers: get_yes_no("Include numbers", current.numbers)?,
        uppercase: get_yes_no("Include uppercase letters", current.uppercase)?,
        lowercase: get_yes_no("Include lowercase letters", current.lowercase)?,
        special: get_yes_no("Include special characters", current.special)?,
    })
}
