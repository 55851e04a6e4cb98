//! Error types for supermark-core

use thiserror::Error;

/// Result type alias for supermark operations that can fail outright.
///
/// Document extraction never fails this way; problems with a document are
/// reported as [`SupermarkError`](crate::SupermarkError) values instead.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of document extraction
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration could not be parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
