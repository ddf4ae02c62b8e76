//! Error types for validlist

use thiserror::Error;

/// Main error type for validlist operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidlistError {
    /// A plain score collided with zero or a reserved sentinel encoding
    #[error("score {score} is reserved (plain scores must lie in 1..={max_score})")]
    ReservedScore { score: u128, max_score: u128 },

    /// A key name did not match any known tag
    #[error("unknown key name '{0}'")]
    InvalidKeyName(String),
}

/// Result type alias for validlist operations
pub type Result<T> = std::result::Result<T, ValidlistError>;
