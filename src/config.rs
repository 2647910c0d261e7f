use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_LENGTH: usize = 12;

/// Shortest length offered to users. Generation itself accepts any length.
pub const MIN_LENGTH: usize = 8;
/// Longest length offered to users.
pub const MAX_LENGTH: usize = 32;

/// Options for a single password generation.
///
/// Deserializes from the loose options object used by web clients, e.g.
/// `{"length": 20, "includeSymbols": false}`; omitted keys take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
}

impl GenerationConfig {
    pub const fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: true,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON options file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn uppercase(mut self, include: bool) -> Self {
        self.include_uppercase = include;
        self
    }

    pub fn lowercase(mut self, include: bool) -> Self {
        self.include_lowercase = include;
        self
    }

    pub fn numbers(mut self, include: bool) -> Self {
        self.include_numbers = include;
        self
    }

    pub fn symbols(mut self, include: bool) -> Self {
        self.include_symbols = include;
        self
    }

    pub fn exclude_similar(mut self, exclude: bool) -> Self {
        self.exclude_similar = exclude;
        self
    }

    pub fn with_clamped_length(self) -> Self {
        let length = self.length.clamp(MIN_LENGTH, MAX_LENGTH);
        self.length(length)
    }

    pub fn has_any_class(&self) -> bool {
        self.include_uppercase
            || self.include_lowercase
            || self.include_numbers
            || self.include_symbols
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
    }
}
