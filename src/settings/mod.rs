//! Saved password settings.

mod file;

use std::path::{Path, PathBuf};

use crate::pass::CharacterTypeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub types: CharacterTypeSet,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&Self::path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&Self::path())
    }

    pub fn path() -> PathBuf {
        file::get_path()
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(path, self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            types: CharacterTypeSet::all(),
            to_clipboard: false,
        }
    }
}
