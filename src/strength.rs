use std::fmt;

use serde::Serialize;

pub const MAX_SCORE: u8 = 8;

/// Entry substituted when no check produced feedback.
pub const LOOKS_GOOD: &str = "Password looks good!";

const COMMON_PATTERNS: [&str; 5] = ["123", "abc", "qwe", "password", "admin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            6..=u8::MAX => StrengthTier::Strong,
            4..=5 => StrengthTier::Medium,
            _ => StrengthTier::Weak,
        }
    }

    pub fn color(self) -> StrengthColor {
        match self {
            StrengthTier::Weak => StrengthColor::Red,
            StrengthTier::Medium => StrengthColor::Yellow,
            StrengthTier::Strong => StrengthColor::Green,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Presentation hint paired with a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthColor {
    Red,
    Yellow,
    Green,
}

impl fmt::Display for StrengthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthColor::Red => write!(f, "red"),
            StrengthColor::Yellow => write!(f, "yellow"),
            StrengthColor::Green => write!(f, "green"),
        }
    }
}

/// The scoring rubric, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    MinLength,
    LongLength,
    Lowercase,
    Uppercase,
    Digit,
    Special,
    NoRepeats,
    NoCommonPatterns,
}

impl Check {
    pub const ALL: [Check; 8] = [
        Check::MinLength,
        Check::LongLength,
        Check::Lowercase,
        Check::Uppercase,
        Check::Digit,
        Check::Special,
        Check::NoRepeats,
        Check::NoCommonPatterns,
    ];

    pub fn passes(self, password: &str) -> bool {
        match self {
            Check::MinLength => password.chars().count() >= 8,
            Check::LongLength => password.chars().count() >= 12,
            Check::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Check::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Check::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Check::Special => password.chars().any(|c| !c.is_ascii_alphanumeric()),
            Check::NoRepeats => !has_run_of_three(password),
            Check::NoCommonPatterns => !has_common_pattern(password),
        }
    }

    /// Suggestion shown when the check fails. The long-length check is a
    /// bonus and has none.
    pub fn feedback(self) -> Option<&'static str> {
        match self {
            Check::MinLength => Some("At least 8 characters"),
            Check::LongLength => None,
            Check::Lowercase => Some("Lowercase letters"),
            Check::Uppercase => Some("Uppercase letters"),
            Check::Digit => Some("Numbers"),
            Check::Special => Some("Special characters"),
            Check::NoRepeats => Some("Avoid repeated characters"),
            Check::NoCommonPatterns => Some("Avoid common patterns"),
        }
    }
}

fn has_run_of_three(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn has_common_pattern(password: &str) -> bool {
    let folded = password.to_ascii_lowercase();
    COMMON_PATTERNS.iter().any(|pattern| folded.contains(pattern))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub strength: StrengthTier,
    pub color: StrengthColor,
    pub feedback: Vec<String>,
}

impl StrengthReport {
    pub fn max_score(&self) -> u8 {
        MAX_SCORE
    }

    pub fn is_acceptable(&self) -> bool {
        self.strength != StrengthTier::Weak
    }
}

/// Scores `password` against every rubric check. Total over all inputs,
/// including the empty string; no trimming or normalization is applied.
pub fn check_password_strength(password: &str) -> StrengthReport {
    let mut score = 0;
    let mut feedback = Vec::new();

    for check in Check::ALL {
        if check.passes(password) {
            score += 1;
        } else if let Some(message) = check.feedback() {
            feedback.push(message.to_string());
        }
    }

    if feedback.is_empty() {
        feedback.push(LOOKS_GOOD.to_string());
    }

    let strength = StrengthTier::from_score(score);

    StrengthReport {
        score,
        strength,
        color: strength.color(),
        feedback,
    }
}
