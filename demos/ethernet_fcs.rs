//! Example: 8-bit parallel Ethernet FCS (CRC-32) next-state equations
//!
//! Builds the influence matrix of the CRC-32 LFSR advanced by one byte per
//! clock, lays it out in a grid exactly as it would sit in a spreadsheet, and
//! prints the resulting equations.

use crc_equations::{EmitOptions, EquationWriter, InfluenceMatrix, Layout, VecGrid};

/// IEEE 802.3 CRC-32 generator polynomial (normal form)
const POLY: u32 = 0x04C1_1DB7;

const REGISTER_BITS: u32 = 32;
const DATA_BITS: u32 = 8;

/// Advance the LFSR by one byte, most significant data bit first
fn step(mut crc: u32, data: u8) -> u32 {
    for i in (0..DATA_BITS).rev() {
        let feedback = (crc >> 31) ^ (((data as u32) >> i) & 1);
        crc <<= 1;
        if feedback != 0 {
            crc ^= POLY;
        }
    }
    crc
}

fn main() {
    let layout = Layout::default();
    let header_row = layout.header_row - 1;
    let label_column = layout.label_column - 1;
    let first_row = layout.data_start_row - 1;
    let first_col = layout.data_start_col - 1;

    let mut grid = VecGrid::new();
    grid.set(0, 0, "8-bit parallel CRC-32 state matrix");
    for bit in 0..REGISTER_BITS {
        grid.set(header_row, first_col + bit, format!("R{}", bit));
    }

    // The step is linear over GF(2), so each input's influence is the
    // next state reached from that input alone
    let inputs = (0..REGISTER_BITS)
        .map(|bit| (format!("R{}", bit), step(1 << bit, 0)))
        .chain((0..DATA_BITS).map(|bit| (format!("M{}", bit), step(0, 1 << bit))));

    for (row, (label, next)) in inputs.enumerate() {
        let row = first_row + row as u32;
        grid.set(row, label_column, label);
        for bit in 0..REGISTER_BITS {
            grid.set(row, first_col + bit, ((next >> bit) & 1) as i64);
        }
    }

    let matrix = InfluenceMatrix::load(&grid, &layout);
    let stats = matrix.stats();
    eprintln!(
        "{} inputs, {} outputs, max fan-in {}",
        stats.num_rows, stats.num_columns, stats.max_fan_in
    );

    if let Err(e) = matrix.write_to_stdout(&EmitOptions::default()) {
        eprintln!("Error writing equations: {}", e);
        std::process::exit(1);
    }
}
