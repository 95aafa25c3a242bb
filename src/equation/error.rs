//! Error types for writing equations

use std::fmt;
use std::io;

/// Errors that can occur when writing equations
///
/// Generating equations cannot fail; only the output sink can.
#[derive(Debug)]
pub enum EmitError {
    /// IO error during writing
    Io(io::Error),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for EmitError {
    fn from(err: io::Error) -> Self {
        EmitError::Io(err)
    }
}

impl From<EmitError> for io::Error {
    fn from(err: EmitError) -> Self {
        match err {
            EmitError::Io(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_emit_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe");
        let err: EmitError = io_err.into();
        assert!(err.to_string().contains("broken pipe"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_emit_error_to_io_error_preserves_kind() {
        let err = EmitError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(io_err.to_string(), "denied");
    }
}
