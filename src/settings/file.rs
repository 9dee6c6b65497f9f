//! Settings file persistence.
//!
//! One line: `length,numbers,uppercase,lowercase,special,to_clipboard`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::pass::MAX_LENGTH;

const FIELDS: usize = 6;

pub fn save(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(to_line(settings).as_bytes())?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    let file = match OpenOptions::new().read(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;

    if !parse_line(line.trim(), settings) {
        tracing::warn!(path = %path.display(), "ignoring malformed settings file");
    }
    Ok(())
}

fn to_line(settings: &Settings) -> String {
    let t = &settings.types;
    format!(
        "{},{},{},{},{},{}\n",
        settings.length, t.numbers, t.uppercase, t.lowercase, t.special, settings.to_clipboard
    )
}

/// Apply a settings line. Bad fields (including a length above `MAX_LENGTH`)
/// keep their current value; a line with the wrong field count changes
/// nothing and returns false.
fn parse_line(line: &str, settings: &mut Settings) -> bool {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return false;
    }

    let t = &mut settings.types;
    settings.length = parts[0]
        .parse::<usize>()
        .ok()
        .filter(|&len| len <= MAX_LENGTH)
        .unwrap_or(settings.length);
    t.numbers = parts[1].parse().unwrap_or(t.numbers);
    t.uppercase = parts[2].parse().unwrap_or(t.uppercase);
    t.lowercase = parts[3].parse().unwrap_or(t.lowercase);
    t.special = parts[4].parse().unwrap_or(t.special);
    settings.to_clipboard = parts[5].parse().unwrap_or(settings.to_clipboard);
    true
}

pub fn get_path() -> PathBuf {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
            PathBuf::from(home).join(".config")
        }
    };
    base.join("passgen").join("settings")
}
