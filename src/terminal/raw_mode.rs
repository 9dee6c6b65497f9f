//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Disables raw mode on drop, unless it was already on when the guard was
/// taken (nested prompts leave it to the outer guard).
pub struct RawModeGuard {
    owned: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        if is_raw_mode_enabled()? {
            return Ok(Self { owned: false });
        }
        enable_raw_mode()?;
        Ok(Self { owned: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.owned {
            let _ = disable_raw_mode();
        }
    }
}
