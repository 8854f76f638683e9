//! Chat input validation.
//!
//! Runs after rate limiting and before the upstream call, so malformed
//! requests never cost a responder round-trip.

use thiserror::Error;

/// Rejection reasons for a chat message.
///
/// The `Display` strings are the exact texts returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Message absent or empty after trimming.
    #[error("Message is required")]
    MissingInput,

    /// Trimmed message exceeds the configured maximum length.
    #[error("Input too long")]
    InputTooLong,
}

/// Validate a user message, returning the trimmed text on success.
///
/// Length is counted in characters, not bytes, so multi-byte scripts get the
/// same budget as ASCII.
pub fn validate(message: &str, max_length: usize) -> Result<&str, ValidationError> {
    let trimmed = message.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::MissingInput);
    }

    if trimmed.chars().count() > max_length {
        return Err(ValidationError::InputTooLong);
    }

    Ok(trimmed)
}
