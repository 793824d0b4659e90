//! Unified error handling.
//!
//! Provides a unified `AppError` type for operations that can fail at the
//! storefront boundary (config loading, explicit storage access, lookups).
//! Store reads and mutators never return these; they degrade to empty or
//! unchanged state instead.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage backend operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from the user.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A list change was computed but could not be written. The cause is
    /// logged where the write failed.
    #[error("Not saved: {0}")]
    NotSaved(String),

    /// Feature exists in the UI but has no backing implementation.
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

impl AppError {
    /// Message safe to show to the shopper.
    ///
    /// Storage details (paths, I/O errors) stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Storage(_) => "Something went wrong saving your data".to_string(),
            Self::Config(err) => err.to_string(),
            Self::NotFound(what) => format!("{what} was not found"),
            Self::NotSaved(what) => format!("Your {what} could not be saved"),
            Self::BadRequest(msg) | Self::Unavailable(msg) => msg.clone(),
        }
    }

    /// Process exit code for command-line front ends.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) | Self::BadRequest(_) => 2,
            Self::Unavailable(_) => 3,
            Self::Storage(_) | Self::Config(_) | Self::NotSaved(_) => 1,
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
