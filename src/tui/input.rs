use std::io::{self, BufRead};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::cli::quiet;
use crate::pass::MAX_LENGTH;
use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Digits the editor accepts; enough for `MAX_LENGTH`.
const MAX_DIGITS: usize = 6;

/// Accepts y/yes/1 and n/no/0, case-insensitive.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "1" => Some(true),
        "n" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Parse a length between `min` and `MAX_LENGTH`.
pub fn parse_length(input: &str, min: usize) -> Result<usize, String> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > MAX_LENGTH => Err(format!("Please enter a number <= {MAX_LENGTH}")),
        Ok(n) if n >= min => Ok(n),
        Ok(_) => Err(format!("Please enter a number >= {min}")),
        Err(_) => Err("Please enter a valid number".to_string()),
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Ctrl+C: restore the terminal and leave with the SIGINT status.
fn interrupt() -> ! {
    reset_terminal();
    println!();
    std::process::exit(130)
}

/// Next key press, skipping releases and non-key events. None on read error.
fn next_key() -> Option<KeyEvent> {
    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return Some(key),
            Ok(_) => continue,
            Err(_) => return None,
        }
    }
}

/// Line-mode fallback when stdin is not a terminal. None on EOF.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Digit-only line editor. Returns the raw digits, None if cancelled.
pub fn get_numeric_input(prompt: &str, initial: usize) -> Option<String> {
    let guard = if quiet::is_interactive() {
        RawModeGuard::new().ok()
    } else {
        None
    };
    let Some(guard) = guard else {
        return read_line(&format!("{prompt} [{initial}]: ")).map(|s| {
            if s.is_empty() { initial.to_string() } else { s }
        });
    };

    let mut digits = if initial > 0 {
        initial.to_string()
    } else {
        String::new()
    };
    let mut cancelled = false;

    print!("{prompt}: {digits}");
    flush();

    while let Some(key) = next_key() {
        match key.code {
            _ if is_ctrl(&key, 'c') => interrupt(),
            _ if is_ctrl(&key, 'u') => digits.clear(),
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                digits.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() && digits.len() < MAX_DIGITS => digits.push(c),
            _ => continue,
        }
        print!("\r\x1b[2K{prompt}: {digits}");
        flush();
    }

    drop(guard);
    println!();
    if cancelled { None } else { Some(digits) }
}

/// Single-key yes/no. Enter takes the default, Esc cancels.
pub fn get_yes_no(prompt: &str, default: bool) -> Option<bool> {
    let hint = if default { "Y/n" } else { "y/N" };

    let guard = if quiet::is_interactive() {
        RawModeGuard::new().ok()
    } else {
        None
    };
    let Some(guard) = guard else {
        loop {
            let line = read_line(&format!("{prompt} ({hint}): "))?;
            if line.is_empty() {
                return Some(default);
            }
            match parse_yes_no(&line) {
                Some(answer) => return Some(answer),
                None => println!("Please enter y/n"),
            }
        }
    };

    print!("{prompt} ({hint}): ");
    flush();

    let mut answer = None;
    while let Some(key) = next_key() {
        answer = match key.code {
            _ if is_ctrl(&key, 'c') => interrupt(),
            KeyCode::Esc => break,
            KeyCode::Enter => Some(default),
            KeyCode::Char(c) => match parse_yes_no(&c.to_string()) {
                Some(a) => Some(a),
                None => continue,
            },
            _ => continue,
        };
        break;
    }

    if let Some(a) = answer {
        print!("{}", if a { "yes" } else { "no" });
    }
    drop(guard);
    println!();
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_no_variants() {
        for yes in ["y", "Y", "yes", "YES", " 1 "] {
            assert_eq!(parse_yes_no(yes), Some(true), "{yes}");
        }
        for no in ["n", "No", "0"] {
            assert_eq!(parse_yes_no(no), Some(false), "{no}");
        }
        for bad in ["", "maybe", "2", "yess"] {
            assert_eq!(parse_yes_no(bad), None, "{bad}");
        }
    }

    #[test]
    fn length_respects_minimum() {
        assert_eq!(parse_length("12", 4), Ok(12));
        assert_eq!(parse_length(" 4 ", 4), Ok(4));
        assert_eq!(parse_length("3", 4), Err("Please enter a number >= 4".into()));
        assert_eq!(parse_length("", 4), Err("Please enter a valid number".into()));
        assert_eq!(parse_length("abc", 4), Err("Please enter a valid number".into()));
    }

    #[test]
    fn length_respects_maximum() {
        assert_eq!(parse_length("999999", 4), Ok(MAX_LENGTH));
        assert_eq!(
            parse_length("1000000", 4),
            Err("Please enter a number <= 999999".into())
        );
        assert_eq!(
            parse_length(&usize::MAX.to_string(), 4),
            Err("Please enter a number <= 999999".into())
        );
    }
}
