//! Error types for line editing.

use std::fmt;
use std::io;

/// Result type alias for line editing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for line editing operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal operations.
    Io(io::Error),
    /// Column outside `[0, size]` passed to a buffer mutator.
    InvalidColumn { col: usize, size: usize },
    /// Backing storage could not grow to the requested length.
    Allocation { requested: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColumn { col, size } => {
                write!(f, "column {col} out of bounds for line of size {size}")
            }
            Self::Allocation { requested } => {
                write!(f, "could not grow line storage to {requested} bytes")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidColumn { col: 7, size: 3 };
        assert_eq!(err.to_string(), "column 7 out of bounds for line of size 3");

        let err = Error::Allocation { requested: 42 };
        assert!(err.to_string().contains("42 bytes"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_non_io_errors_have_no_source() {
        let err = Error::InvalidColumn { col: 1, size: 0 };
        assert!(std::error::Error::source(&err).is_none());
    }
}
