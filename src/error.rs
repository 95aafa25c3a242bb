//! Error types for the equation generator
//!
//! Each stage has its own error type ([`LoadError`] for reading the matrix,
//! [`EmitError`] for writing the equations). [`Error`] unifies them for
//! callers that run the whole pipeline.

use std::fmt;
use std::io;

pub use crate::equation::error::EmitError;
pub use crate::matrix::error::LoadError;

/// Any failure of the load-then-emit pipeline
#[derive(Debug)]
pub enum Error {
    /// The matrix could not be loaded; nothing was written
    Load(LoadError),
    /// The equations could not be written
    Emit(EmitError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Load(e) => write!(f, "{}", e),
            Error::Emit(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Load(e) => Some(e),
            Error::Emit(e) => Some(e),
        }
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<EmitError> for Error {
    fn from(err: EmitError) -> Self {
        Error::Emit(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Emit(EmitError::Io(err))
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Load(e) => e.into(),
            Error::Emit(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_load_error_display_passes_through() {
        let err: Error = LoadError::SheetNotFound {
            sheet: "Sheet2".to_string(),
            available: vec!["Sheet1".to_string()],
        }
        .into();
        assert!(err.to_string().contains("Sheet 'Sheet2' not found"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_becomes_emit_error() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, Error::Emit(EmitError::Io(_))));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_to_io_error() {
        let err = Error::Load(LoadError::InvalidLayout {
            field: "header_row",
            value: 0,
        });
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
