//! Error taxonomy for generation and clipboard output.

use thiserror::Error;

/// Reasons a password cannot be generated from a config.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Select at least one character type")]
    NoCharacterClassSelected,

    #[error("No characters available after exclusions")]
    EmptyAlphabet,

    #[error("Password length must be at least 1")]
    InvalidLength,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to copy password to clipboard: {0}")]
    Write(String),
}

/// Reasons a copy request from the widget is refused or fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    #[error("Please generate a password first!")]
    NothingToCopy,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
