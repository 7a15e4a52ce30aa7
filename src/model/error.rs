//! Model-specific error types
//!
//! This module defines all error types that can occur while manipulating the
//! album/user object graph. Errors are raised synchronously to the immediate
//! caller and are never fatal; the caller decides how to present them.

use thiserror::Error;

/// Errors from album and user operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An argument failed basic validation (empty name, empty caption, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The photo is already in the album (identity is by file path)
    #[error("Photo '{0}' already exists in the album")]
    DuplicatePhoto(String),

    /// The photo is not a member of the album
    #[error("Photo '{0}' not found in the album")]
    PhotoNotFound(String),

    /// Navigation was attempted on an album with no photos
    #[error("No photos in the album to navigate")]
    EmptyAlbum,

    /// The album cursor does not point at a photo
    #[error("Cursor {cursor} out of range for album of {len} photo(s)")]
    CursorOutOfRange { cursor: usize, len: usize },

    /// The user already has an album with this name (case-insensitive)
    #[error("Album '{0}' already exists for this user")]
    DuplicateAlbum(String),

    /// No album with this name belongs to the user
    #[error("Album '{0}' not found")]
    AlbumNotFound(String),

    /// A move could not complete; the photo is still in the source album
    #[error("Could not move photo '{photo}' to album '{target}': {reason}")]
    MoveFailed {
        photo: String,
        target: String,
        reason: String,
    },
}
