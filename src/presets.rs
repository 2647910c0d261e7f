use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::GenerationConfig;
use crate::error::PasswordError;

/// The named quick-select configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordOptions {
    pub strong: GenerationConfig,
    pub medium: GenerationConfig,
    pub simple: GenerationConfig,
}

pub static PASSWORD_OPTIONS: PasswordOptions = PasswordOptions {
    strong: GenerationConfig {
        length: 16,
        include_uppercase: true,
        include_lowercase: true,
        include_numbers: true,
        include_symbols: true,
        exclude_similar: true,
    },
    medium: GenerationConfig {
        length: 12,
        include_uppercase: true,
        include_lowercase: true,
        include_numbers: true,
        include_symbols: false,
        exclude_similar: true,
    },
    simple: GenerationConfig {
        length: 10,
        include_uppercase: true,
        include_lowercase: true,
        include_numbers: true,
        include_symbols: false,
        exclude_similar: false,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Strong,
    Medium,
    Simple,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Strong, Preset::Medium, Preset::Simple];

    pub fn config(self) -> GenerationConfig {
        match self {
            Preset::Strong => PASSWORD_OPTIONS.strong,
            Preset::Medium => PASSWORD_OPTIONS.medium,
            Preset::Simple => PASSWORD_OPTIONS.simple,
        }
    }

    /// Returns the preset an edited configuration is identical to, if any.
    pub fn matching(config: &GenerationConfig) -> Option<Preset> {
        Self::ALL.into_iter().find(|preset| preset.config() == *config)
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Strong => "strong",
            Preset::Medium => "medium",
            Preset::Simple => "simple",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Preset {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PasswordError::UnknownPreset(s.to_string()))
    }
}
