//! Typed error kinds shared by every operation
//!
//! The variants map one-to-one onto response classes an HTTP-facing layer can
//! render; the engine itself never touches status codes. Store failures are
//! wrapped as `Internal` and are the only variant not meant for end users.

use thiserror::Error;

/// Result alias used throughout the application services
pub type GameResult<T> = Result<T, GameError>;

/// Failure kinds surfaced by the engine
#[derive(Debug, Error)]
pub enum GameError {
    /// Referenced character, item, or inventory/equipment line does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Actor does not own the referenced character
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Business-rule violation (insufficient funds/quantity, equip conflicts)
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Uniqueness violation (duplicate character or item name)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Store or wiring failure; not renderable to end users
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl GameError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}
