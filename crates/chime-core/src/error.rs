use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChimeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChimeError {
    /// Short error code string used in structured HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            ChimeError::Config(_) => "CONFIG_ERROR",
            ChimeError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, ChimeError>;
