//! # CRC Equation Generator
//!
//! Turns a bit-influence matrix kept in a spreadsheet into the XOR equations of
//! bit-parallel combinational logic, typically a CRC/FCS next-state function.
//!
//! ## Overview
//!
//! The matrix has one row per input signal (current CRC register bits `R<n>`
//! and message bits `M<n>`) and one column per output signal. A cell holding
//! `1` means the row's input is XORed into the column's output. Each column
//! becomes one line:
//!
//! ```text
//! crc_r[3] <= crc_r[1] ^ data_in[0];
//! crc_r[4] <= '0;
//! ```
//!
//! ## Loading and Emitting
//!
//! ```no_run
//! use crc_equations::{EmitOptions, EquationWriter, InfluenceMatrix, Layout};
//!
//! # fn main() -> Result<(), crc_equations::Error> {
//! let matrix = InfluenceMatrix::from_workbook(
//!     "8_bit_parallel_state_matrix.xlsx",
//!     "Sheet1",
//!     &Layout::default(),
//! )?;
//! matrix.write_to_stdout(&EmitOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## In-Memory Grids
//!
//! The loader reads through the [`GridSource`] trait, so matrices can also come
//! from code:
//!
//! ```
//! use crc_equations::{emit, InfluenceMatrix, Layout, VecGrid};
//!
//! let mut grid = VecGrid::new();
//! grid.set(1, 1, "R3"); // B2: output header
//! grid.set(2, 0, "R1"); // A3: input label
//! grid.set(3, 0, "M2"); // A4: input label
//! grid.set(2, 1, 1i64); // B3
//! grid.set(3, 1, 0i64); // B4
//!
//! let matrix = InfluenceMatrix::load(&grid, &Layout::default());
//! let lines: Vec<String> = emit(&matrix).map(|eq| eq.to_string()).collect();
//! assert_eq!(lines, ["crc_r[3] <= crc_r[1];"]);
//! ```

pub mod equation;
pub mod error;
pub mod matrix;
pub mod signal;

pub use equation::{emit, EmitOptions, Equation, EquationWriter, Equations, BANNER};
pub use error::{EmitError, Error, LoadError};
pub use matrix::{
    CellValue, GridSource, InfluenceMatrix, Layout, MatrixStats, SheetGrid, VecGrid, Workbook,
};
pub use signal::{format_signal, SignalName};
