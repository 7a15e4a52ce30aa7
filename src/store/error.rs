//! Store-specific error types
//!
//! This module defines all error types that can occur while persisting and
//! loading user records. Errors are categorized and carry enough context to
//! tell a corrupt record from an unknown user.

use thiserror::Error;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    Sled(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding user record: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding user record: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// A stored record carries a format version this build does not know
    #[error("User record for '{username}' has unsupported format version {version}")]
    UnsupportedVersion { username: String, version: u32 },

    /// A key in the user tree is not valid UTF-8
    #[error("Corrupt username key in store: {0}")]
    CorruptKey(String),

    /// A user with this username already exists
    #[error("User '{0}' already exists")]
    UserExists(String),

    /// No user with this username exists
    #[error("User '{0}' not found")]
    UserNotFound(String),
}
