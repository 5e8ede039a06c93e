//! Core error types for Beat District
use thiserror::Error;

/// Result type alias using `BeatError`
pub type Result<T> = std::result::Result<T, BeatError>;

/// Core error type for Beat District
///
/// Every crate-level error converts into one of these kinds before it is
/// shown to the user.
#[derive(Error, Debug)]
pub enum BeatError {
    /// Missing or invalid form fields, caught before any network call
    #[error("{0}")]
    Validation(String),

    /// Entity referenced by id or name is absent from current state
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity ("song", "playlist", ...)
        entity: String,
        /// Identifier that was looked up
        id: String,
    },

    /// Any failed API call
    #[error("{0}")]
    Network(String),

    /// Local serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl BeatError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Whether this error was raised before touching the network
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Network(_))
    }
}
