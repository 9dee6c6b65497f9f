//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, entropy display.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";

// ============================================================================
// Terminal Control
// ============================================================================

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and reset attributes.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_success(msg: &str) {
    println!("{GREEN}\u{2713} {msg}{RESET}");
}

// ============================================================================
// Box Drawing (56 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 56;

/// ┌─ Title ──────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content          │
pub fn box_line(content: &str) {
    let inner = BOX_WIDTH - 4;
    let padding = inner.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// │     content      │
pub fn box_line_center(content: &str) {
    let inner = BOX_WIDTH - 4;
    let total = inner.saturating_sub(console_width(content));
    let left = total / 2;
    println!(
        "│ {}{}{} │",
        " ".repeat(left),
        content,
        " ".repeat(total - left)
    );
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Help line: flag column then wrapped description.
pub fn box_opt(flag: &str, desc: &str) {
    let inner = BOX_WIDTH - 4;
    let flag_col = 22;
    let desc_col = inner - flag_col;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    for (i, line) in lines.iter().enumerate() {
        let left = if i == 0 { flag } else { "" };
        box_line(&format!("{:<flag_col$}{}", left, line));
    }
}

/// Display width ignoring ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy
// ============================================================================

/// Password entropy in bits for uniform draws from `charset_size` chars.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_skips_escapes() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{RED}err{RESET}")), 3);
        assert_eq!(console_width(""), 0);
    }

    #[test]
    fn entropy_matches_log2() {
        assert_eq!(calculate_entropy(8, 0), 0.0);
        assert!((calculate_entropy(10, 1024) - 100.0).abs() < 1e-9);
        assert!((calculate_entropy(16, 94) - 104.87).abs() < 0.01);
    }

    #[test]
    fn strength_buckets() {
        assert_eq!(entropy_strength(20.0), "Weak");
        assert_eq!(entropy_strength(40.0), "Fair");
        assert_eq!(entropy_strength(104.9), "Strong");
        assert_eq!(entropy_strength(128.0), "Very Strong");
    }
}
