//! Saved generation defaults.

mod file;

use std::path::{Path, PathBuf};

use genpass::GenerationOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: GenerationOptions,
    pub number_of_passwords: usize,
    pub output_file_path: String,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }
}

/// Location of the settings file.
pub fn path() -> PathBuf {
    file::get_path()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            options: GenerationOptions::default(),
            number_of_passwords: 1,
            output_file_path: String::new(),
        }
    }
}
