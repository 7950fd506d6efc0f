//! Sales-versus-target report
//!
//! The sales workbook has one tab per month plus auxiliary tabs. Month
//! tabs carry a header row (`LOJA`, `VENDAS <year>`, `META`, `PREVISÃO DE
//! FECHAMENTO`) and one row per store. Column positions are not fixed, so
//! the header row is scanned into a mapping first; the two `VENDAS` year
//! columns are told apart by the year in their header.

use serde::Serialize;
use tracing::{debug, warn};

use crate::grid::{cell_number, cell_text, RawGrid};
use crate::period;

/// One store row of a month tab. Missing/unparsable figures stay `None`
/// and are ignored by the totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSales {
    pub store: String,
    pub sales_current: Option<f64>,
    pub sales_previous: Option<f64>,
    pub target: Option<f64>,
    pub projection: Option<f64>,
}

/// One store's standing against its target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorePerformance {
    pub store: String,
    pub sales: f64,
    pub target: f64,
    pub shortfall: f64,
}

/// Aggregated month report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub total_target: f64,
    pub total_sales: f64,
    pub total_sales_previous: f64,
    pub shortfall: f64,
    pub projected_close: f64,
    pub met_target: Vec<StorePerformance>,
    pub missed_target: Vec<StorePerformance>,
}

/// Column mapping scanned from a sales sheet header row
#[derive(Debug, Clone, Default)]
struct ColumnMapping {
    store: Option<usize>,
    sales_current: Option<usize>,
    sales_previous: Option<usize>,
    target: Option<usize>,
    projection: Option<usize>,
}

impl ColumnMapping {
    fn from_header(header: &[calamine::Data]) -> Self {
        let mut mapping = ColumnMapping::default();
        let mut sales_columns: Vec<(i32, usize)> = Vec::new();

        for (idx, cell) in header.iter().enumerate() {
            let text = cell_text(cell).to_uppercase();

            if text == "LOJA" {
                mapping.store = Some(idx);
            }

            if let Some(rest) = text.strip_prefix("VENDAS") {
                if let Ok(year) = rest.trim().parse::<i32>() {
                    sales_columns.push((year, idx));
                }
            }

            if text == "META" {
                mapping.target = Some(idx);
            }

            if text.starts_with("PREVISÃO") || text.starts_with("PREVISAO") {
                mapping.projection = Some(idx);
            }
        }

        // Highest year is the current campaign, the next one down the
        // prior-year comparison column.
        sales_columns.sort_by(|a, b| b.0.cmp(&a.0));
        mapping.sales_current = sales_columns.first().map(|(_, idx)| *idx);
        mapping.sales_previous = sales_columns.get(1).map(|(_, idx)| *idx);

        // The store name is conventionally the first column when no LOJA
        // header is present.
        if mapping.store.is_none() && !header.is_empty() {
            mapping.store = Some(0);
        }

        mapping
    }

    fn is_valid(&self) -> bool {
        self.store.is_some() && self.sales_current.is_some() && self.target.is_some()
    }
}

/// Whether a tab label names a month sheet (vs. an auxiliary tab).
pub fn is_month_sheet(name: &str) -> bool {
    let lowered = name.to_lowercase();
    (1..=12).any(|m| {
        period::month_name(m)
            .map(|n| lowered.contains(&n.to_lowercase()))
            .unwrap_or(false)
    })
}

/// Parse a month tab into per-store rows.
///
/// The header is the first row; rows whose store cell is blank are
/// skipped. An unusable header yields an empty result rather than an
/// error — auxiliary tabs routinely fail the mapping.
pub fn parse_sales(grid: &RawGrid) -> Vec<StoreSales> {
    let Some(header) = grid.first() else {
        return Vec::new();
    };

    let mapping = ColumnMapping::from_header(header);
    if !mapping.is_valid() {
        warn!("sales header row did not map to the expected columns");
        return Vec::new();
    }
    debug!("sales column mapping: {:?}", mapping);

    let cell = |row: &Vec<calamine::Data>, idx: Option<usize>| -> Option<f64> {
        idx.and_then(|i| row.get(i)).and_then(cell_number)
    };

    grid.iter()
        .skip(1)
        .filter_map(|row| {
            let store = mapping
                .store
                .and_then(|i| row.get(i))
                .map(cell_text)
                .unwrap_or_default();
            if store.is_empty() {
                return None;
            }

            Some(StoreSales {
                store,
                sales_current: cell(row, mapping.sales_current),
                sales_previous: cell(row, mapping.sales_previous),
                target: cell(row, mapping.target),
                projection: cell(row, mapping.projection),
            })
        })
        .collect()
}

/// Aggregate store rows into the month report.
pub fn summarize(stores: &[StoreSales]) -> SalesReport {
    let total_target: f64 = stores.iter().filter_map(|s| s.target).sum();
    let total_sales: f64 = stores.iter().filter_map(|s| s.sales_current).sum();
    let total_sales_previous: f64 = stores.iter().filter_map(|s| s.sales_previous).sum();
    let projected_close: f64 = stores.iter().filter_map(|s| s.projection).sum();

    let mut met_target = Vec::new();
    let mut missed_target = Vec::new();

    for store in stores {
        let (Some(sales), Some(target)) = (store.sales_current, store.target) else {
            continue;
        };
        let performance = StorePerformance {
            store: store.store.clone(),
            sales,
            target,
            shortfall: (target - sales).max(0.0),
        };
        if sales >= target {
            met_target.push(performance);
        } else {
            missed_target.push(performance);
        }
    }

    SalesReport {
        total_target,
        total_sales,
        total_sales_previous,
        shortfall: total_target - total_sales,
        projected_close,
        met_target,
        missed_target,
    }
}
