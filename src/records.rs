//! Normalized data model produced by the sheet parsers
//!
//! Both record types are read-only projections of a raw cell grid: parsing
//! is a pure function from grid to records, and no record retains a
//! reference to the grid it came from.

use serde::Serialize;
use std::fmt;

/// Classification of a transaction cell, derived from its sign.
///
/// Serialized with the domain vocabulary used across the spreadsheets
/// ("Receita"/"Despesa") so exported tables match the source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    #[serde(rename = "Receita")]
    Income,
    #[serde(rename = "Despesa")]
    Expense,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Income => "Receita",
            RecordKind::Expense => "Despesa",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized transaction from a vertical-layout sheet.
///
/// `period` is a canonical `"YYYY-MM"` key (fixed width, so plain string
/// ordering is chronological). `amount` is always the magnitude; the sign of
/// the source cell lives in `kind`. Field order matches the canonical
/// transaction table projection: period, category, amount, kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub period: String,
    pub category: String,
    pub amount: f64,
    pub kind: RecordKind,
}

/// One row of a label/value ledger sheet.
///
/// `value` is `None` for section header rows and malformed cells; callers
/// locate figures by label equality and must not read `None` as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub label: String,
    pub value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_uses_domain_vocabulary() {
        assert_eq!(RecordKind::Income.to_string(), "Receita");
        assert_eq!(RecordKind::Expense.to_string(), "Despesa");
    }

    #[test]
    fn test_record_serializes_in_canonical_column_order() {
        let record = TransactionRecord {
            period: "2025-01".to_string(),
            category: "Aluguel".to_string(),
            amount: 1000.0,
            kind: RecordKind::Expense,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"period":"2025-01","category":"Aluguel","amount":1000.0,"kind":"Despesa"}"#
        );
    }

    #[test]
    fn test_ledger_entry_null_value_serializes_as_null() {
        let entry = LedgerEntry {
            label: "FATURAMENTO REALIZADO".to_string(),
            value: None,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"label":"FATURAMENTO REALIZADO","value":null}"#);
    }
}
