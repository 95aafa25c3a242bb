//! Influence matrix loading
//!
//! An influence matrix records, for every (input row, output column) pair,
//! whether the input bit feeds the output bit's XOR. The matrix sits somewhere
//! inside a sheet:
//!
//! ```text
//!          A      B      C      D
//!   1
//!   2            R0     R1     R2      <- header row (output signals)
//!   3     R0     0      1      0
//!   4     M0     1      0      1       <- one row per input signal
//!   5
//!         ^ label column
//! ```
//!
//! Column names are read along the header row starting at the first data
//! column, row names down the label column starting at the first data row.
//! Both scans stop at the first empty cell, which is what defines the matrix
//! extent.

pub mod error;
pub mod grid;
pub mod workbook;


use std::path::Path;

pub use error::LoadError;
pub use grid::{CellValue, GridSource, VecGrid};
pub use workbook::{SheetGrid, Workbook};

/// Where the matrix sits inside its sheet
///
/// All coordinates are 1-based, following spreadsheet A1 addressing: row 1 is
/// the first row and column 1 is column `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Row holding the output (column) signal names
    pub header_row: u32,
    /// Column holding the input (row) signal names
    pub label_column: u32,
    /// First row of cell data and of row labels
    pub data_start_row: u32,
    /// First column of cell data and of column headers
    pub data_start_col: u32,
}

impl Default for Layout {
    /// Header in row 2, labels in column A, data from B3
    fn default() -> Self {
        Layout {
            header_row: 2,
            label_column: 1,
            data_start_row: 3,
            data_start_col: 2,
        }
    }
}

impl Layout {
    /// Check that every coordinate is a valid 1-based index
    pub fn validate(&self) -> Result<(), LoadError> {
        let fields = [
            ("header_row", self.header_row),
            ("label_column", self.label_column),
            ("data_start_row", self.data_start_row),
            ("data_start_col", self.data_start_col),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(LoadError::InvalidLayout { field, value });
            }
        }
        Ok(())
    }
}

/// Summary figures for a loaded matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatrixStats {
    /// Number of input (row) signals
    pub num_rows: usize,
    /// Number of output (column) signals
    pub num_columns: usize,
    /// Number of cells holding the contributes marker
    pub num_contributions: usize,
    /// Outputs with no contributing input
    pub num_zero_equations: usize,
    /// Largest number of inputs feeding a single output
    pub max_fan_in: usize,
}

/// Column names, row names and the cells between them
#[derive(Debug, Clone, PartialEq)]
pub struct InfluenceMatrix {
    columns: Vec<String>,
    rows: Vec<String>,
    cells: Vec<Vec<CellValue>>,
}

impl InfluenceMatrix {
    /// Build a matrix from already discovered names and row-major cells
    ///
    /// Short cell rows are padded with [`CellValue::Empty`] and extra cells are
    /// dropped so the result is always `rows.len()` by `columns.len()`.
    pub fn new(columns: Vec<String>, rows: Vec<String>, mut cells: Vec<Vec<CellValue>>) -> Self {
        cells.resize_with(rows.len(), Vec::new);
        for row in cells.iter_mut() {
            row.resize(columns.len(), CellValue::Empty);
        }
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Discover and read a matrix from a grid
    ///
    /// Reading past the populated area is not an error; it just ends discovery.
    /// The layout is 1-based, see [`Layout`]. Call [`Layout::validate`] first
    /// when the layout comes from user input: a zero coordinate is treated as 1.
    pub fn load<G: GridSource>(source: &G, layout: &Layout) -> Self {
        let header_row = layout.header_row.saturating_sub(1);
        let label_column = layout.label_column.saturating_sub(1);
        let start_row = layout.data_start_row.saturating_sub(1);
        let start_col = layout.data_start_col.saturating_sub(1);

        let columns = scan_labels((start_col..=u32::MAX).map(|col| source.cell(header_row, col)));
        let rows = scan_labels((start_row..=u32::MAX).map(|row| source.cell(row, label_column)));
        log::debug!(
            "discovered {} columns and {} rows",
            columns.len(),
            rows.len()
        );

        let cells = (0..rows.len() as u32)
            .map(|r| {
                (0..columns.len() as u32)
                    .map(|c| source.cell(start_row + r, start_col + c))
                    .collect()
            })
            .collect();

        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Open a workbook, read one sheet and load the matrix from it
    ///
    /// The workbook file is closed before this returns.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use crc_equations::{InfluenceMatrix, Layout};
    ///
    /// let matrix = InfluenceMatrix::from_workbook(
    ///     "8_bit_parallel_state_matrix.xlsx",
    ///     "Sheet1",
    ///     &Layout::default(),
    /// )?;
    /// println!("{} outputs", matrix.num_columns());
    /// # Ok::<(), crc_equations::LoadError>(())
    /// ```
    pub fn from_workbook<P: AsRef<Path>>(
        path: P,
        sheet: &str,
        layout: &Layout,
    ) -> Result<Self, LoadError> {
        layout.validate()?;
        let grid = Workbook::open(path)?.sheet(sheet)?;
        Ok(Self::load(&grid, layout))
    }

    /// Output signal names in column order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Input signal names in row order
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of output signals
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of input signals
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Cell at 0-based matrix position, `None` outside the matrix
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.cells.get(row).and_then(|cells| cells.get(col))
    }

    /// Row names whose cell in `col` is the contributes marker, in row order
    pub fn contributors(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .zip(self.cells.iter())
            .filter(move |(_, cells)| cells.get(col).is_some_and(CellValue::is_marker))
            .map(|(name, _)| name.as_str())
    }

    /// Count contributions and fan-in per output
    pub fn stats(&self) -> MatrixStats {
        let mut stats = MatrixStats {
            num_rows: self.num_rows(),
            num_columns: self.num_columns(),
            ..Default::default()
        };
        for col in 0..self.num_columns() {
            let fan_in = self.contributors(col).count();
            stats.num_contributions += fan_in;
            stats.max_fan_in = stats.max_fan_in.max(fan_in);
            if fan_in == 0 {
                stats.num_zero_equations += 1;
            }
        }
        stats
    }
}

/// Collect labels until the first empty cell
///
/// Labels are kept verbatim; surrounding whitespace is reported, not stripped.
fn scan_labels<I: Iterator<Item = CellValue>>(cells: I) -> Vec<String> {
    cells
        .map_while(|cell| cell.as_label())
        .inspect(|label| {
            if label.trim() != label.as_str() {
                log::warn!("label {:?} has surrounding whitespace", label);
            }
        })
        .collect()
}
