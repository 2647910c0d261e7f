//! Password generation and strength scoring for GreenGrow accounts.
//!
//! [`generate_password`] draws a password from the character classes enabled
//! in a [`GenerationConfig`]; [`check_password_strength`] scores any string on
//! a fixed eight-point rubric. The two share no state. [`PASSWORD_OPTIONS`]
//! holds the named presets.

pub mod charset;
pub mod config;
pub mod error;
pub mod generator;
pub mod policy;
pub mod presets;
pub mod strength;

pub use config::GenerationConfig;
pub use error::{PasswordError, Result};
pub use generator::{generate_password, generate_password_with, RandomSource};
pub use presets::{Preset, PASSWORD_OPTIONS};
pub use strength::{check_password_strength, StrengthColor, StrengthReport, StrengthTier};
