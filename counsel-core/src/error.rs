//! Error types for Counsel

use thiserror::Error;

/// Result type alias for Counsel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Counsel operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required secret is not set
    #[error("Missing secret: {name} is not set. {hint}")]
    MissingSecret {
        /// Environment variable name of the secret
        name: &'static str,
        /// Where the secret can be provided
        hint: &'static str,
    },

    /// No contract was uploaded
    #[error("Please upload a contract first.")]
    NoContract,

    /// PDF text extraction failed
    #[error("Could not extract text from the contract: {0}")]
    Extraction(String),

    /// Language model call failed
    #[error("Model error: {0}")]
    Model(String),

    /// Notification delivery failed
    #[error("Notification error: {0}")]
    Notification(String),
}
