//! Photor - a photo album manager with tag-based search
//!
//! This library provides the core of a photo album manager: users own named
//! albums of photos, photos carry case-insensitive key/value tags, and a
//! query engine filters a user's photos by date range and tag constraints.
//! Users are persisted whole as versioned records in an embedded database.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod model;
pub mod search;
pub mod session;
pub mod store;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PhotorError {
    /// Album or user model error
    #[error("Model error: {0}")]
    ModelError(#[from] model::ModelError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Persistence error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Session error
    #[error("Session error: {0}")]
    SessionError(#[from] session::SessionError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
