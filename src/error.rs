//! Crate-wide error type.

use thiserror::Error as ThisError;

/// Errors raised by the solver core.
///
/// All errors propagate to the immediate caller; the core performs no
/// retries and no partial recovery.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = Error::invalid_input("empty point set");
        assert_eq!(err.to_string(), "invalid input: empty point set");
    }

    #[test]
    fn test_display_configuration() {
        let err = Error::configuration("missing cooling schedule");
        assert_eq!(err.to_string(), "configuration error: missing cooling schedule");
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
