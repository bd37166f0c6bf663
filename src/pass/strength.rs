//! Heuristic strength scoring.

use std::fmt;

use serde::Serialize;

/// Highest score `score` can return.
pub const MAX_SCORE: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    /// No password to score (generation failed).
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Fair,
            5..=6 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::None => "No password",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }

    /// Fill fraction of the strength bar, in percent.
    pub fn percent(self) -> f32 {
        match self {
            StrengthLevel::None => 0.0,
            StrengthLevel::Weak => 25.0,
            StrengthLevel::Fair => 50.0,
            StrengthLevel::Good => 75.0,
            StrengthLevel::Strong => 100.0,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a password from 0 to 7: up to 3 points for length, 1 per character kind.
pub fn score(password: &str) -> u8 {
    let len = password.chars().count();
    let checks = [
        len >= 8,
        len >= 12,
        len >= 16,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|&&hit| hit).count() as u8
}

pub fn evaluate(password: &str) -> StrengthLevel {
    StrengthLevel::from_score(score(password))
}

/// Detailed breakdown shown next to the strength bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub level: StrengthLevel,
    pub entropy_bits: f64,
    pub consecutive_repeat: bool,
    /// Score criteria plus the no-repeat criterion, out of 8.
    pub criteria_met: u8,
}

pub fn report(password: &str, alphabet_len: usize) -> StrengthReport {
    let score = score(password);
    let consecutive_repeat = has_consecutive_repeat(password);
    StrengthReport {
        score,
        level: evaluate(password),
        entropy_bits: entropy(password.chars().count(), alphabet_len),
        consecutive_repeat,
        criteria_met: score + u8::from(!consecutive_repeat),
    }
}

/// Calculate password entropy in bits.
pub fn entropy(password_length: usize, alphabet_len: usize) -> f64 {
    if alphabet_len == 0 {
        return 0.0;
    }
    password_length as f64 * (alphabet_len as f64).log2()
}

pub fn has_consecutive_repeat(password: &str) -> bool {
    password.chars().zip(password.chars().skip(1)).any(|(a, b)| a == b)
}
