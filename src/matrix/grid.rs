//! Cell values and grid sources
//!
//! A [`GridSource`] is anything that can answer "what is in cell (row, col)".
//! The loader only ever asks that question, so it runs unchanged over a
//! spreadsheet sheet or an in-memory table.

use std::fmt;

/// Value of a single grid cell
///
/// `Empty` is the absence of a value and is never equal to a numeric zero.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value (blank cell or a read outside the sheet)
    Empty,
    /// Integer value
    Int(i64),
    /// Floating point value (spreadsheets store most numbers this way)
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Text value
    Text(String),
    /// Spreadsheet error value such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Whether the cell terminates label discovery
    ///
    /// Only a blank cell or zero-length text is empty. Whitespace is a value.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Whether the cell is the contributes marker: a value equal to 1
    ///
    /// Booleans compare as numbers, so `TRUE` is 1. Text never matches.
    pub fn is_marker(&self) -> bool {
        match self {
            CellValue::Int(v) => *v == 1,
            CellValue::Float(v) => *v == 1.0,
            CellValue::Bool(v) => *v,
            _ => false,
        }
    }

    /// Whether the cell is a value equal to 0 (`FALSE` included)
    pub fn is_zero(&self) -> bool {
        match self {
            CellValue::Int(v) => *v == 0,
            CellValue::Float(v) => *v == 0.0,
            CellValue::Bool(v) => !*v,
            _ => false,
        }
    }

    /// Render the cell as a signal label, or `None` if it is empty
    ///
    /// Text is kept verbatim, surrounding whitespace included.
    pub fn as_label(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(self.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(v) => write!(f, "{}", v),
            // Whole floats print without the fraction so a numeric label 3.0 reads as "3"
            CellValue::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Error(e) => write!(f, "#ERR({})", e),
        }
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Empty, Into::into)
    }
}

/// Read access to a two-dimensional grid of cells
///
/// Positions are 0-based `(row, column)`. Reads outside the populated area
/// must return [`CellValue::Empty`] rather than fail.
pub trait GridSource {
    /// Value at the given 0-based position
    fn cell(&self, row: u32, col: u32) -> CellValue;
}

impl<G: GridSource + ?Sized> GridSource for &G {
    fn cell(&self, row: u32, col: u32) -> CellValue {
        (**self).cell(row, col)
    }
}

/// In-memory grid stored row-major
///
/// Rows may have different lengths; missing cells read as empty.
///
/// # Examples
///
/// ```
/// use crc_equations::{CellValue, GridSource, VecGrid};
///
/// let grid = VecGrid::from_rows(vec![
///     vec![CellValue::Empty, "R3".into()],
///     vec!["R1".into(), 1i64.into()],
/// ]);
/// assert_eq!(grid.cell(1, 1), CellValue::Int(1));
/// assert_eq!(grid.cell(5, 5), CellValue::Empty);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VecGrid {
    rows: Vec<Vec<CellValue>>,
}

impl VecGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from row-major cell values
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Set a cell, growing the grid as needed
    pub fn set(&mut self, row: u32, col: u32, value: impl Into<CellValue>) {
        let (row, col) = (row as usize, col as usize);
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, CellValue::Empty);
        }
        cells[col] = value.into();
    }
}

impl GridSource for VecGrid {
    fn cell(&self, row: u32, col: u32) -> CellValue {
        self.rows
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }
}
