//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;
mod password;

pub use charset::CharacterTypeSet;
pub use generate::{GenerateError, Generator, MAX_LENGTH};
pub use password::Password;
