//! services/client/src/error.rs
//!
//! Defines the primary error type for the client binary.

use crate::config::ConfigError;
use learning_assistant_core::ClientError;

/// The primary error type for the `client` service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A workflow in the client core failed.
    #[error("{0}")]
    Client(#[from] ClientError),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Represents a standard Input/Output error (e.g., reading the file to upload).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The user is not signed in.
    #[error("Not signed in; set AUTH_TOKEN to continue (redirecting to {0})")]
    SignedOut(&'static str),

    /// A catch-all for any other unexpected errors.
    #[error("{0}")]
    Internal(String),
}
