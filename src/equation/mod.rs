//! XOR equation generation
//!
//! Every output column of an [`InfluenceMatrix`] becomes one non-blocking
//! assignment whose right-hand side is the XOR of the contributing inputs:
//!
//! ```text
//! crc_r[9] <= crc_r[1] ^ crc_r[2] ^ data_in[3];
//! data_in[5] <= '0;
//! ```
//!
//! [`emit`] yields the equations lazily, one per column, so callers decide
//! whether to collect them, print them, or write them through
//! [`EquationWriter`].

pub mod error;
pub mod writer;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::matrix::{CellValue, InfluenceMatrix};
use crate::signal::SignalName;

pub use error::EmitError;
pub use writer::{EmitOptions, EquationWriter, BANNER};

/// XOR separator between terms
pub const XOR: &str = " ^ ";

/// Right-hand side used when no input contributes
pub const ZERO: &str = "'0";

/// One output signal and the inputs XORed into it
///
/// Inputs keep the row order of the source matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation<'a> {
    output: &'a str,
    inputs: Vec<&'a str>,
}

impl<'a> Equation<'a> {
    /// Create an equation from raw matrix labels
    pub fn new(output: &'a str, inputs: Vec<&'a str>) -> Self {
        Self { output, inputs }
    }

    /// Output label as it appears in the matrix
    pub fn output(&self) -> &'a str {
        self.output
    }

    /// Contributing input labels, in row order
    pub fn inputs(&self) -> &[&'a str] {
        &self.inputs
    }

    /// Whether no input contributes, so the output is tied to zero
    pub fn is_zero(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Renders `<output> <= <in1> ^ <in2> ...;` or `<output> <= '0;`
///
/// # Examples
///
/// ```
/// use crc_equations::Equation;
///
/// let eq = Equation::new("R9", vec!["R1", "R2", "M3"]);
/// assert_eq!(eq.to_string(), "crc_r[9] <= crc_r[1] ^ crc_r[2] ^ data_in[3];");
///
/// let zero = Equation::new("M5", vec![]);
/// assert_eq!(zero.to_string(), "data_in[5] <= '0;");
/// ```
impl fmt::Display for Equation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <= ", SignalName::parse(self.output))?;
        if self.inputs.is_empty() {
            f.write_str(ZERO)?;
        }
        for (i, input) in self.inputs.iter().enumerate() {
            if i > 0 {
                f.write_str(XOR)?;
            }
            write!(f, "{}", SignalName::parse(input))?;
        }
        f.write_str(";")
    }
}

/// Iterator over the equations of a matrix, one per column
///
/// Created by [`emit`]. Single pass: once exhausted, call [`emit`] again to
/// start over.
#[derive(Debug, Clone)]
pub struct Equations<'a> {
    matrix: &'a InfluenceMatrix,
    column: usize,
}

impl<'a> Iterator for Equations<'a> {
    type Item = Equation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let matrix = self.matrix;
        let col = self.column;
        let output = matrix.columns().get(col)?;
        self.column += 1;

        for (row, input) in matrix.rows().iter().enumerate() {
            if let Some(cell) = matrix.cell(row, col) {
                if is_suspicious(cell) {
                    log::warn!(
                        "cell ({}, {}) holds {:?}; only the value 1 marks a contribution",
                        input,
                        output,
                        cell
                    );
                }
            }
        }

        Some(Equation::new(output, matrix.contributors(col).collect()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matrix.num_columns().saturating_sub(self.column);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Equations<'_> {}

impl std::iter::FusedIterator for Equations<'_> {}

/// Generate the equations of a matrix in column order
///
/// # Examples
///
/// ```
/// use crc_equations::{emit, CellValue, InfluenceMatrix};
///
/// let matrix = InfluenceMatrix::new(
///     vec!["R3".into()],
///     vec!["R1".into(), "M2".into()],
///     vec![vec![CellValue::Int(1)], vec![CellValue::Int(0)]],
/// );
/// let lines: Vec<String> = emit(&matrix).map(|eq| eq.to_string()).collect();
/// assert_eq!(lines, ["crc_r[3] <= crc_r[1];"]);
/// ```
pub fn emit(matrix: &InfluenceMatrix) -> Equations<'_> {
    for name in matrix.columns().iter().chain(matrix.rows()) {
        if !SignalName::parse(name).is_conventional() {
            log::debug!("label '{}' is not R<n> or M<n>; emitting it verbatim", name);
        }
    }
    Equations { matrix, column: 0 }
}

/// A populated cell that is neither the marker nor a zero
fn is_suspicious(cell: &CellValue) -> bool {
    !cell.is_empty() && !cell.is_marker() && !cell.is_zero()
}
