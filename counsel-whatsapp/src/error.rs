//! Error types for WhatsApp operations

use thiserror::Error;

/// Result type for WhatsApp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when sending messages
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP error
    #[error("WhatsApp request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-200 status
    #[error("WhatsApp API error: {status} - {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Missing or invalid configuration
    #[error("WhatsApp configuration error: {0}")]
    Config(String),

    /// Invalid endpoint URL
    #[error("Invalid WhatsApp API URL: {0}")]
    Url(#[from] url::ParseError),
}

impl From<Error> for counsel_core::Error {
    fn from(err: Error) -> Self {
        counsel_core::Error::Notification(err.to_string())
    }
}
