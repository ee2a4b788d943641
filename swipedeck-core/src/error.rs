//! Error types for deck operations.

use thiserror::Error;

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that can occur while building decks or loading configuration.
///
/// Gesture and stack operations never fail: out-of-order input is ignored.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Two cards in one collection share an id.
    #[error("Duplicate card id: {0}")]
    DuplicateCardId(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Card or config serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
