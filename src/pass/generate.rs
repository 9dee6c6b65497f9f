//! Password generation.

use thiserror::Error;

use super::charset::{self, CharacterTypeSet};
use super::password::Password;
use crate::rand::{RandomSource, SecureRand};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("At least one character type must be selected")]
    EmptyCharacterSet,
    #[error("Length must be between {min} and {max} for selected character types (got {length})")]
    InvalidLength { length: usize, min: usize, max: usize },
}

/// Longest password any front end will ask for.
pub const MAX_LENGTH: usize = 999_999;

/// Generates passwords from a random source it owns.
pub struct Generator<R = SecureRand> {
    source: R,
}

impl Generator {
    /// Generator backed by the OS CSPRNG.
    pub fn new() -> Self {
        Self::with_source(SecureRand::os())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Generator<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    pub fn generate(
        &mut self,
        length: usize,
        types: &CharacterTypeSet,
    ) -> Result<Password, GenerateError> {
        generate(length, types, &mut self.source)
    }
}

/// Check a request without touching any randomness.
pub fn validate(length: usize, types: &CharacterTypeSet) -> Result<(), GenerateError> {
    if types.is_empty() {
        return Err(GenerateError::EmptyCharacterSet);
    }
    let min = types.count();
    if !(min..=MAX_LENGTH).contains(&length) {
        return Err(GenerateError::InvalidLength {
            length,
            min,
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

/// Generate one password of `length` characters containing at least one
/// character of every enabled class.
pub fn generate<R: RandomSource>(
    length: usize,
    types: &CharacterTypeSet,
    rng: &mut R,
) -> Result<Password, GenerateError> {
    validate(length, types)?;

    let pool = charset::build(types);
    tracing::debug!(length, classes = types.count(), pool = pool.len(), "generating password");

    let mut buf = Vec::with_capacity(length);

    // One guaranteed character per enabled class, drawn from that class alone
    for class in types.enabled() {
        let chars = class.chars();
        buf.push(chars[rng.uniform_int(chars.len())]);
    }

    // Fill the rest from the combined pool
    let remaining = length - buf.len();
    for _ in 0..remaining {
        buf.push(pool[rng.uniform_int(pool.len())]);
    }

    rng.shuffle(&mut buf);

    Ok(Password::from_ascii(&mut buf))
}
