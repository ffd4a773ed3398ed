//! Error types for resumark library.

use std::io;
use thiserror::Error;

/// Result type alias for resumark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading, structuring, or rendering a resume.
///
/// Structuring itself is total. Errors only come from I/O, strict-mode
/// validation, and output serialization.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Strict mode rejected a structurally invalid line.
    #[error("Malformed document at line {line}: {reason}")]
    Malformed {
        /// 1-indexed source line
        line: usize,
        /// Human-readable description
        reason: String,
    },

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Malformed {
            line: 3,
            reason: "bullet before any section".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed document at line 3: bullet before any section"
        );

        let err = Error::Render("bad".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let bad = String::from_utf8(vec![0xFF, 0xFE]).unwrap_err();
        let err: Error = bad.into();
        assert!(matches!(err, Error::Encoding(_)));
    }
}
