//! Period resolution for vertical-layout sheets
//!
//! Sheet columns are labeled `"MÊS.ANO"` (e.g. `"JANEIRO.2025"`) in no
//! guaranteed order. This module maps month names to numbers, normalizes
//! labels into canonical `"YYYY-MM"` keys, and produces the chronological
//! column permutation applied before any value is read.
//!
//! Month lookup is case-insensitive but diacritic-sensitive: the sheets are
//! expected to carry the accented spellings ("MARÇO", not "MARCO").

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Sentinel month number produced for unmapped month names.
///
/// A label like `"XYZ.2025"` therefore normalizes to `"2025-00"`, which
/// sorts before January of the same year. This mirrors the historical
/// spreadsheets' behavior and is pinned by tests rather than rejected.
pub const UNKNOWN_MONTH: &str = "00";

const MONTHS: [(&str, &str); 12] = [
    ("JANEIRO", "01"),
    ("FEVEREIRO", "02"),
    ("MARÇO", "03"),
    ("ABRIL", "04"),
    ("MAIO", "05"),
    ("JUNHO", "06"),
    ("JULHO", "07"),
    ("AGOSTO", "08"),
    ("SETEMBRO", "09"),
    ("OUTUBRO", "10"),
    ("NOVEMBRO", "11"),
    ("DEZEMBRO", "12"),
];

static MONTH_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| MONTHS.iter().copied().collect());

/// Resolve a Portuguese month name to its zero-padded number.
///
/// Unmapped names yield [`UNKNOWN_MONTH`] instead of failing, so column
/// alignment with the raw header row is preserved.
pub fn month_number(name: &str) -> &'static str {
    MONTH_MAP
        .get(name.trim().to_uppercase().as_str())
        .copied()
        .unwrap_or(UNKNOWN_MONTH)
}

/// Display name for a month number, as used by the yearly comparison report.
pub fn month_name(month: u32) -> Option<&'static str> {
    const NAMES: [&str; 12] = [
        "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
        "Outubro", "Novembro", "Dezembro",
    ];
    NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Normalize a raw period label into a `"YYYY-MM"` key.
///
/// Blank labels normalize to `""` and are skipped downstream. Labels that
/// are not exactly two dot-separated parts pass through trimmed but
/// otherwise unchanged — callers must tolerate non-canonical keys reaching
/// the output.
pub fn normalize_period(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() == 2 {
        format!("{}-{}", parts[1].trim(), month_number(parts[0]))
    } else {
        trimmed.to_string()
    }
}

/// Resolve and chronologically order a header row of raw period labels.
///
/// Returns `(original column index, period key)` pairs sorted ascending by
/// key; labels that normalized to `""` are dropped entirely, so their
/// columns are never read. Plain string comparison is chronological because
/// the keys are fixed-width `YYYY-MM`.
pub fn sort_columns(raw_periods: &[String]) -> Vec<(usize, String)> {
    let mut columns: Vec<(usize, String)> = raw_periods
        .iter()
        .enumerate()
        .map(|(i, raw)| (i, normalize_period(raw)))
        .filter(|(_, period)| !period.is_empty())
        .collect();

    columns.sort_by(|a, b| a.1.cmp(&b.1));
    columns
}
