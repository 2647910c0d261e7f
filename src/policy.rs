//! Acceptance rules for a password chosen at sign-up.

use thiserror::Error;

use crate::strength::{check_password_strength, StrengthReport};

pub const MIN_SIGNUP_LENGTH: usize = 6;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },
    #[error("Password is too weak. Please use a stronger password.")]
    TooWeak(StrengthReport),
    #[error("Passwords do not match")]
    Mismatch,
}

/// Checks a new password and its confirmation.
///
/// The password itself fails on length first, then on strength tier. The
/// confirmation is compared independently, so a weak password with a
/// mistyped confirmation reports both errors, password error first.
pub fn validate_new_password(
    password: &str,
    confirmation: &str,
) -> Result<StrengthReport, Vec<PolicyError>> {
    let mut errors = Vec::new();
    let report = check_password_strength(password);

    if password.chars().count() < MIN_SIGNUP_LENGTH {
        errors.push(PolicyError::TooShort {
            min: MIN_SIGNUP_LENGTH,
        });
    } else if !report.is_acceptable() {
        errors.push(PolicyError::TooWeak(report.clone()));
    }

    if password != confirmation {
        errors.push(PolicyError::Mismatch);
    }

    if errors.is_empty() {
        Ok(report)
    } else {
        Err(errors)
    }
}
