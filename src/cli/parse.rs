use thiserror::Error;

use super::CliFlags;
use crate::pass::MAX_LENGTH;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Length too large: {0} (max {max})", max = MAX_LENGTH)]
    LengthTooLarge(usize),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-i" | "--interactive" => flags.interactive = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--no-numbers" => flags.no_numbers = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-special" => flags.no_special = true,
            "-l" | "--length" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ParseError::MissingValue(arg.clone()))?;
                let length: usize = value
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber(value.clone()))?;
                if length > MAX_LENGTH {
                    return Err(ParseError::LengthTooLarge(length));
                }
                flags.length = Some(length);
            }
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
    }

    Ok(flags)
}
