//! Vertical-layout transaction sheet parser
//!
//! The main bookkeeping sheet keeps one row of period labels and one column
//! of category labels, with values in the intersecting grid:
//!
//! ```text
//! (row 0)  CONTROLE FINANCEIRO
//! (row 1)  PERÍODO      JANEIRO.2025   FEVEREIRO.2025   ...
//! (row 2)  Aluguel      -1000          -1000
//! (row 3)  RECEITAS     54000          61000            <- subtotal row, skipped
//! (row 4)  Faturamento  54000          61000
//! ```
//!
//! Columns are read in chronologically sorted order, not sheet order, and a
//! column whose period label does not resolve is never read at all. A
//! negative value is an expense, a non-negative one income; the emitted
//! amount is always the magnitude.

use tracing::{debug, info};

use crate::grid::{cell_number, cell_text, RawGrid};
use crate::period;
use crate::records::{RecordKind, TransactionRecord};

/// Category labels that mark subtotal/group rows rather than transactions.
/// Matched case-insensitively against the trimmed label.
pub const RESERVED_MARKERS: [&str; 2] = ["RECEITAS", "DESPESAS"];

/// Header row index holding the period labels (second row of the sheet).
const PERIOD_ROW: usize = 1;

/// First data row (third row of the sheet).
const FIRST_DATA_ROW: usize = 2;

/// Parse a vertical-layout grid into normalized transaction records.
///
/// Pure and total: a grid too small to hold the layout, or one whose header
/// resolves to no usable periods, yields an empty batch. Cells that cannot
/// be coerced to a number are treated as absent — sparse cells emit no
/// record, never a zero-filled one.
pub fn parse_vertical(grid: &RawGrid) -> Vec<TransactionRecord> {
    let Some(header) = grid.get(PERIOD_ROW) else {
        debug!("grid has no period header row; returning empty batch");
        return Vec::new();
    };

    let raw_periods: Vec<String> = header.iter().skip(1).map(cell_text).collect();
    let columns = period::sort_columns(&raw_periods);
    if columns.is_empty() {
        debug!("no period column resolved; returning empty batch");
        return Vec::new();
    }

    let mut records = Vec::new();
    let mut skipped_markers = 0usize;

    for row in grid.iter().skip(FIRST_DATA_ROW) {
        let category = row.first().map(cell_text).unwrap_or_default();

        let upper = category.to_uppercase();
        if RESERVED_MARKERS.contains(&upper.as_str()) {
            skipped_markers += 1;
            continue;
        }

        for (original_index, period_key) in &columns {
            // Periods occupy columns 1.. of the sheet, so the resolved index
            // is offset by the category column.
            let Some(value) = row.get(original_index + 1).and_then(cell_number) else {
                continue;
            };

            let (kind, amount) = if value < 0.0 {
                (RecordKind::Expense, value.abs())
            } else {
                (RecordKind::Income, value)
            };

            records.push(TransactionRecord {
                period: period_key.clone(),
                category: category.clone(),
                amount,
                kind,
            });
        }
    }

    info!(
        "parsed {} transaction records across {} periods ({} subtotal rows skipped)",
        records.len(),
        columns.len(),
        skipped_markers
    );

    records
}
