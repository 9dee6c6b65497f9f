//! Centralized warning and status messages for CLI output.
//!
//! Everything here goes to stderr so stdout carries only the password.

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

/// Yellow warning, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// The password is already on stdout; only the copy failed.
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
    eprintln!("Password generated but not copied.");
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}
