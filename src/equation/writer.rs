//! Writing equations to text sinks

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::emit;
use super::error::EmitError;
use crate::matrix::InfluenceMatrix;

/// Comment block written ahead of the equations
pub const BANNER: [&str; 3] = [
    "// -----------------------------",
    "// Auto-generated CRC equations",
    "// -----------------------------",
];

/// Output options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Write [`BANNER`] and a blank line before the equations
    pub banner: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions { banner: true }
    }
}

/// Types that can be written out as a list of equations
pub trait EquationWriter {
    /// Write the equations to any `Write` implementation
    ///
    /// `to_equations_string`, `to_equations_file` and `write_to_stdout` all
    /// delegate here.
    fn write_equations<W: Write>(&self, writer: &mut W, options: &EmitOptions)
        -> Result<(), EmitError>;

    /// Render the equations to a string
    fn to_equations_string(&self, options: &EmitOptions) -> Result<String, EmitError> {
        let mut buffer = Vec::new();
        self.write_equations(&mut buffer, options)?;
        String::from_utf8(buffer)
            .map_err(|e| EmitError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write the equations to a file, replacing it if it exists
    fn to_equations_file<P: AsRef<Path>>(
        &self,
        path: P,
        options: &EmitOptions,
    ) -> Result<(), EmitError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_equations(&mut writer, options)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the equations to standard output
    fn write_to_stdout(&self, options: &EmitOptions) -> Result<(), EmitError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_equations(&mut handle, options)?;
        handle.flush()?;
        Ok(())
    }
}

impl EquationWriter for InfluenceMatrix {
    fn write_equations<W: Write>(
        &self,
        writer: &mut W,
        options: &EmitOptions,
    ) -> Result<(), EmitError> {
        if options.banner {
            for line in BANNER {
                writeln!(writer, "{}", line)?;
            }
            writeln!(writer)?;
        }
        for equation in emit(self) {
            writeln!(writer, "{}", equation)?;
        }
        Ok(())
    }
}
