// Error types for the media resolver

use thiserror::Error;

/// Main error type for the media resolver
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record store (tweet log / URL map) errors
    #[error("Store error: {0}")]
    Store(String),

    /// Logging system errors
    #[error("Logging error: {0}")]
    Log(String),

    /// A referenced URL has no entry in the URL-to-name map
    #[error("No directory name mapped for URL: {0}")]
    UnmappedUrl(String),

    /// An operation that requires a regular file was given something else
    #[error("Not a regular file: {0}")]
    NotAFile(String),

    /// I/O errors from standard library
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary record encoding/decoding errors
    #[error("Encoding error: {0}")]
    Bincode(#[from] bincode::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ResolverError>;
