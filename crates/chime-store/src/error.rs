use thiserror::Error;

/// Errors that can occur while talking to the data store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (DNS, TLS, connect, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("Store API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded into the expected rows.
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
