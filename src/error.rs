use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Custom type alias for Result
pub type Result<T> = std::result::Result<T, PasswordError>;
