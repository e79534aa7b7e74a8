use thiserror::Error;

/// Canonical result for lazyseq.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A reduction without a seed was asked to reduce zero elements.
    #[error("empty sequence: {0}")]
    EmptySequence(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("drain limit of {limit} items exceeded")]
    LimitExceeded { limit: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
