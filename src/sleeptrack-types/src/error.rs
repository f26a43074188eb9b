use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SleepError {
    /// Input has the wrong shape: non-finite number, malformed date, empty list.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Input is well formed but outside the accepted domain.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl SleepError {
    pub fn argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn value(message: impl Into<String>) -> Self {
        Self::InvalidValue(message.into())
    }
}

pub type Result<T, E = SleepError> = std::result::Result<T, E>;
