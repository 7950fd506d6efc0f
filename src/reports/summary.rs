//! Aggregations over the normalized transaction table
//!
//! Everything here is computed on demand from a record slice — including
//! the distinct category list, which used to be stashed in ambient UI
//! state. Periods with non-canonical keys (sentinel months, pass-through
//! labels) are kept by the per-period totals but dropped by the
//! year/month breakdown, which needs real calendar coordinates.

use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::records::{RecordKind, TransactionRecord};

/// Income/expense/balance for a single period (the "Resumo do Mês" tiles).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub period: String,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Per-period totals feeding the comparative table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotals {
    pub period: String,
    pub income: f64,
    pub expenses: f64,
}

/// Summarize one period key.
pub fn monthly_summary(records: &[TransactionRecord], period: &str) -> MonthlySummary {
    let mut income = 0.0;
    let mut expenses = 0.0;

    for record in records.iter().filter(|r| r.period == period) {
        match record.kind {
            RecordKind::Income => income += record.amount,
            RecordKind::Expense => expenses += record.amount,
        }
    }

    MonthlySummary {
        period: period.to_string(),
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Income and expense totals for every period, sorted by period key.
pub fn period_totals(records: &[TransactionRecord]) -> Vec<PeriodTotals> {
    let mut totals: BTreeMap<String, (f64, f64)> = BTreeMap::new();

    for record in records {
        let bucket = totals.entry(record.period.clone()).or_insert((0.0, 0.0));
        match record.kind {
            RecordKind::Income => bucket.0 += record.amount,
            RecordKind::Expense => bucket.1 += record.amount,
        }
    }

    totals
        .into_iter()
        .map(|(period, (income, expenses))| PeriodTotals {
            period,
            income,
            expenses,
        })
        .collect()
}

/// The months shown around a selected month in the comparative table:
/// two before through two after, clamped to the calendar.
pub fn comparison_window(month: u32) -> Vec<u32> {
    let start = month.saturating_sub(2).max(1);
    let end = (month + 2).min(12);
    (start..=end).collect()
}

/// Net profit (income minus expenses) keyed by calendar (year, month).
///
/// Records whose period key is not a canonical `"YYYY-MM"` with a month in
/// 1..=12 are skipped — sentinel and pass-through keys have no calendar
/// coordinates to chart against.
pub fn profit_by_month(records: &[TransactionRecord]) -> BTreeMap<(i32, u32), f64> {
    let mut profits: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for record in records {
        let Some((year, month)) = parse_period_key(&record.period) else {
            continue;
        };
        let signed = match record.kind {
            RecordKind::Income => record.amount,
            RecordKind::Expense => -record.amount,
        };
        *profits.entry((year, month)).or_insert(0.0) += signed;
    }

    profits
}

/// Distinct calendar years present in the records, ascending.
pub fn years(records: &[TransactionRecord]) -> Vec<i32> {
    records
        .iter()
        .filter_map(|r| parse_period_key(&r.period))
        .map(|(year, _)| year)
        .sorted()
        .dedup()
        .collect()
}

/// Distinct categories, sorted — recomputed per call, never cached.
pub fn categories(records: &[TransactionRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.category.clone())
        .sorted()
        .dedup()
        .collect()
}

/// Distinct period keys, sorted.
pub fn periods(records: &[TransactionRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.period.clone())
        .sorted()
        .dedup()
        .collect()
}

/// Filtered view for the detailed records listing.
pub fn filter_records<'a>(
    records: &'a [TransactionRecord],
    category: Option<&str>,
    period: Option<&str>,
) -> Vec<&'a TransactionRecord> {
    records
        .iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .filter(|r| period.map_or(true, |p| r.period == p))
        .collect()
}

/// Expense totals per category for one period, largest first, with an
/// exclusion list for categories that would distort the distribution.
pub fn expense_distribution(
    records: &[TransactionRecord],
    period: &str,
    excluded: &[&str],
) -> Vec<(String, f64)> {
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();

    for record in records.iter().filter(|r| {
        r.period == period
            && r.kind == RecordKind::Expense
            && !excluded.contains(&r.category.as_str())
    }) {
        *by_category.entry(record.category.clone()).or_insert(0.0) += record.amount;
    }

    by_category
        .into_iter()
        .sorted_by(|a, b| b.1.total_cmp(&a.1))
        .collect()
}

fn parse_period_key(period: &str) -> Option<(i32, u32)> {
    let (year, month) = period.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}
