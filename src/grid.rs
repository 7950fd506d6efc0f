//! Raw cell grid shared by the sheet parsers
//!
//! A grid is the full materialized contents of one worksheet, row-major and
//! zero-indexed. Absent cells are `Data::Empty` — never the numeral 0 and
//! never the empty string — so sparsity survives the trip from the workbook.
//! Parsers only read through a grid; they never mutate one.

use calamine::{Data, Range};

pub type RawGrid = Vec<Vec<Data>>;

/// Materialize a worksheet range into an owned grid.
pub fn grid_from_range(range: &Range<Data>) -> RawGrid {
    range.rows().map(|row| row.to_vec()).collect()
}

/// Trimmed textual view of a cell, for labels and headers.
///
/// Absent and error cells read as the empty string; numeric cells render
/// through their display form.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty | Data::Error(_) => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Numeric view of a cell, for the transaction value area.
///
/// Cells that cannot be coerced read as absent; a malformed cell degrades
/// that single cell, never the parse.
pub fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
