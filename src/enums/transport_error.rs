use thiserror::Error;

/// Failure below the HTTP status level: nothing usable came back.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("Request could not be built: {0}")]
    Request(String),
}

impl TransportError {
    /// Errors that say nothing about the server's answer and can be retried.
    pub fn is_connection_level(&self) -> bool {
        !matches!(self, Self::Request(_))
    }
}
