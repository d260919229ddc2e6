//! Error types for coral operations.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed operand: {0}")]
    MalformedOperand(String),

    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response missing expected field '{0}'")]
    MissingField(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Wrap a transport-level failure so it propagates to callers unchanged.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
