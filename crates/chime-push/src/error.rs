use thiserror::Error;

/// Errors that can occur while delivering a push notification.
#[derive(Debug, Error)]
pub enum PushError {
    /// Transport-level failure (DNS, TLS, connect, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The push service answered with a non-success status.
    #[error("Push service error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, PushError>;
