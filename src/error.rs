//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its command driver.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache constructed with a capacity of zero
    #[error("Invalid capacity: must be a positive integer, got {0}")]
    InvalidCapacity(usize),

    /// Command line that could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Failure reading commands or writing replies
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::InvalidCapacity(0).to_string(),
            "Invalid capacity: must be a positive integer, got 0"
        );
        assert_eq!(
            CacheError::InvalidCommand("FOO".to_string()).to_string(),
            "Invalid command: FOO"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: CacheError = io.into();
        assert!(matches!(err, CacheError::Io(_)));
    }
}
