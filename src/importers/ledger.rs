//! Current-account ledger sheet parser
//!
//! Each month tab of the current-account workbook is a two-column sheet:
//! a description label on the left, a currency-formatted string on the
//! right, with section headers ("FATURAMENTO REALIZADO") interspersed among
//! the value rows. Every row becomes one entry — section headers surface
//! with a null value instead of being filtered, and callers find a figure
//! by label equality.

use tracing::info;

use crate::currency::parse_currency;
use crate::grid::{cell_text, RawGrid};
use crate::records::LedgerEntry;

/// Parse a label/value grid into ledger entries, one per row.
///
/// Labels are trimmed and upper-cased so downstream lookups can match
/// case-insensitively. No row filtering happens here: output length always
/// equals input row count.
pub fn parse_ledger(grid: &RawGrid) -> Vec<LedgerEntry> {
    let entries: Vec<LedgerEntry> = grid
        .iter()
        .map(|row| LedgerEntry {
            label: row
                .first()
                .map(cell_text)
                .unwrap_or_default()
                .to_uppercase(),
            value: row.get(1).and_then(parse_currency),
        })
        .collect();

    info!(
        "parsed {} ledger entries ({} with values)",
        entries.len(),
        entries.iter().filter(|e| e.value.is_some()).count()
    );

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    fn row(label: &str, value: Option<&str>) -> Vec<Data> {
        match value {
            Some(v) => vec![
                Data::String(label.to_string()),
                Data::String(v.to_string()),
            ],
            None => vec![Data::String(label.to_string()), Data::Empty],
        }
    }

    #[test]
    fn test_currency_strings_decode() {
        let grid: RawGrid = vec![
            row("FATURAMENTO LOJAS", Some("R$ 203.808,15")),
            row("DESCONTO LOJAS", Some("R$ 555,54")),
        ];

        let entries = parse_ledger(&grid);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, Some(203808.15));
        assert_eq!(entries[1].value, Some(555.54));
    }

    #[test]
    fn test_section_header_rows_keep_null_values() {
        let grid: RawGrid = vec![
            row("FATURAMENTO REALIZADO", None),
            row("FATURAMENTO LOJAS", Some("R$ 100,00")),
        ];

        let entries = parse_ledger(&grid);
        assert_eq!(
            entries[0],
            LedgerEntry {
                label: "FATURAMENTO REALIZADO".to_string(),
                value: None,
            }
        );
        assert_eq!(entries[1].value, Some(100.0));
    }

    #[test]
    fn test_every_row_produces_exactly_one_entry() {
        let grid: RawGrid = vec![
            row("CONTA CORRENTE MARÇO", None),
            row("FATURAMENTO REALIZADO", None),
            row("FATURAMENTO LOJAS", Some("R$ 203.808,15")),
            row("DEVOLUÇÃO", None),
            row("", None),
            row("COMPRAS EM TRÂNSITO", Some("R$ 7.965,61")),
        ];

        let entries = parse_ledger(&grid);
        assert_eq!(entries.len(), grid.len());
    }

    #[test]
    fn test_labels_are_upper_cased_and_trimmed() {
        let grid: RawGrid = vec![row("  Perdas Lojas  ", Some("R$ 567,14"))];

        let entries = parse_ledger(&grid);
        assert_eq!(entries[0].label, "PERDAS LOJAS");
    }

    #[test]
    fn test_text_without_marker_is_null_not_zero() {
        let grid: RawGrid = vec![vec![
            Data::String("LIMITE COMPRA MÊS".to_string()),
            Data::String("a definir".to_string()),
        ]];

        let entries = parse_ledger(&grid);
        assert_eq!(entries[0].value, None);
    }

    #[test]
    fn test_numeric_cells_pass_through() {
        let grid: RawGrid = vec![vec![
            Data::String("COMPRA PARA ATACADO".to_string()),
            Data::Float(2000.0),
        ]];

        let entries = parse_ledger(&grid);
        assert_eq!(entries[0].value, Some(2000.0));
    }

    #[test]
    fn test_single_column_row_is_tolerated() {
        let grid: RawGrid = vec![vec![Data::String("TOTAL RECEBIDAS GERAL".to_string())]];

        let entries = parse_ledger(&grid);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, None);
    }
}
