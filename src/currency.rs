//! Brazilian currency formatting and tolerant decoding
//!
//! Centralizes the locale conventions shared by every sheet parser and by
//! the dashboard display: thousands separated by `.`, decimals by `,`, and
//! the `R$` marker prefix. The decoder is deliberately lenient — it is used
//! to scan ledger columns where money strings are interleaved with section
//! header text, and absence of the marker is what tells the two apart.

use calamine::Data;

/// Currency marker expected at the start of every money string.
pub const CURRENCY_MARKER: &str = "R$";

/// Format a value using Brazilian locale conventions.
///
/// The sign follows the marker, matching how the spreadsheets render
/// negative balances: `-42.5` becomes `"R$ -42,50"`.
///
/// # Examples
/// ```
/// use caixa::currency::format_currency;
///
/// assert_eq!(format_currency(1234567.89), "R$ 1.234.567,89");
/// assert_eq!(format_currency(0.0), "R$ 0,00");
/// ```
pub fn format_currency(value: f64) -> String {
    let is_negative = value < 0.0;
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    // Add thousands separators (.) to the integer part
    let with_separators: String = integer_part
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec!['.', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let sign = if is_negative { "-" } else { "" };
    format!("{} {}{},{}", CURRENCY_MARKER, sign, with_separators, decimal_part)
}

/// Tolerant decode of a heterogeneous ledger cell.
///
/// Absent cells and strings without the `R$` marker decode to `None` — that
/// is how header/group rows are told apart from value rows. Numeric cells
/// pass through unchanged. Decode failure is a value, never an error.
pub fn parse_currency(cell: &Data) -> Option<f64> {
    match cell {
        Data::Empty => None,
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => parse_currency_str(s),
        _ => None,
    }
}

/// Decode a single money string (`"R$ 1.234,56"` → `1234.56`).
pub fn parse_currency_str(raw: &str) -> Option<f64> {
    let rest = raw.trim().strip_prefix(CURRENCY_MARKER)?;
    let normalized = rest.trim().replace('.', "").replace(',', ".");
    normalized.parse::<f64>().ok()
}
