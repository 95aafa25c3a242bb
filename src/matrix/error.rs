//! Error types for loading an influence matrix

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading an influence matrix from a workbook
///
/// All variants are fatal: a partially read matrix is never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The workbook could not be opened or is not a readable spreadsheet
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Message from the spreadsheet reader
        message: String,
    },
    /// The workbook has no sheet with the requested name
    SheetNotFound {
        /// The requested sheet name
        sheet: String,
        /// Sheet names present in the workbook
        available: Vec<String>,
    },
    /// The sheet exists but its contents could not be read
    Sheet {
        /// The sheet name
        sheet: String,
        /// Message from the spreadsheet reader
        message: String,
    },
    /// A layout coordinate is out of range (coordinates are 1-based)
    InvalidLayout {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: u32,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Open { path, message } => {
                write!(f, "Cannot open workbook '{}': {}", path.display(), message)
            }
            LoadError::SheetNotFound { sheet, available } => {
                if available.is_empty() {
                    write!(f, "Sheet '{}' not found (workbook has no sheets)", sheet)
                } else {
                    write!(
                        f,
                        "Sheet '{}' not found (available: {})",
                        sheet,
                        available.join(", ")
                    )
                }
            }
            LoadError::Sheet { sheet, message } => {
                write!(f, "Cannot read sheet '{}': {}", sheet, message)
            }
            LoadError::InvalidLayout { field, value } => write!(
                f,
                "Invalid layout: {} must be 1 or greater (got {})",
                field, value
            ),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<LoadError> for io::Error {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::SheetNotFound { .. } => io::Error::new(io::ErrorKind::NotFound, err),
            LoadError::InvalidLayout { .. } => io::Error::new(io::ErrorKind::InvalidInput, err),
            _ => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_names_path() {
        let err = LoadError::Open {
            path: PathBuf::from("matrix.xlsx"),
            message: "no such file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'matrix.xlsx'"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_sheet_not_found_lists_available() {
        let err = LoadError::SheetNotFound {
            sheet: "Sheet9".to_string(),
            available: vec!["Sheet1".to_string(), "Notes".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'Sheet9'"));
        assert!(msg.contains("Sheet1, Notes"));
    }

    #[test]
    fn test_sheet_not_found_without_sheets() {
        let err = LoadError::SheetNotFound {
            sheet: "Sheet1".to_string(),
            available: Vec::new(),
        };
        assert!(err.to_string().contains("no sheets"));
    }

    #[test]
    fn test_invalid_layout_display() {
        let err = LoadError::InvalidLayout {
            field: "header_row",
            value: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("header_row"));
        assert!(msg.contains("got 0"));
    }

    #[test]
    fn test_to_io_error_kind() {
        let err = LoadError::SheetNotFound {
            sheet: "x".to_string(),
            available: Vec::new(),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);

        let err = LoadError::Open {
            path: PathBuf::from("a"),
            message: "b".to_string(),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
