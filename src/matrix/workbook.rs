//! Spreadsheet access through `calamine`
//!
//! Supports every format `calamine` auto-detects from the file extension
//! (xlsx, xlsm, xlsb, xls, ods).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};

use super::error::LoadError;
use super::grid::{CellValue, GridSource};

/// An open spreadsheet workbook
pub struct Workbook {
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Open a workbook for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let sheets = open_workbook_auto(path).map_err(|e| LoadError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        log::info!("opened workbook '{}'", path.display());
        Ok(Self { sheets })
    }

    /// Names of all sheets, in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Read a whole sheet into memory
    pub fn sheet(&mut self, name: &str) -> Result<SheetGrid, LoadError> {
        let available = self.sheet_names();
        if !available.iter().any(|s| s == name) {
            return Err(LoadError::SheetNotFound {
                sheet: name.to_string(),
                available,
            });
        }
        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|e| LoadError::Sheet {
                sheet: name.to_string(),
                message: e.to_string(),
            })?;
        log::debug!(
            "sheet '{}' spans {:?}..={:?}",
            name,
            range.start(),
            range.end()
        );
        Ok(SheetGrid { range })
    }
}

/// A sheet's cells, detached from the workbook file
///
/// Positions are absolute 0-based sheet coordinates (A1 is `(0, 0)`), not
/// offsets into the populated area.
#[derive(Debug, Clone)]
pub struct SheetGrid {
    range: Range<Data>,
}

impl GridSource for SheetGrid {
    fn cell(&self, row: u32, col: u32) -> CellValue {
        self.range
            .get_value((row, col))
            .map_or(CellValue::Empty, to_cell_value)
    }
}

fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => CellValue::Text(dt.to_string()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
    }
}
