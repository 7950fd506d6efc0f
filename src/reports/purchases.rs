//! Purchase sheet pass-through view
//!
//! Purchase tabs have no fixed schema; they are surfaced as-is (header
//! plus string rows) with one derived view: a histogram of the `Status`
//! column when the sheet has one.

use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;

use crate::grid::{cell_text, RawGrid};

/// A sheet rendered to text, header and all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// First row becomes the header; every other row is kept verbatim,
    /// padded to the header width.
    pub fn from_grid(grid: &RawGrid) -> Self {
        let headers: Vec<String> = grid
            .first()
            .map(|row| row.iter().map(cell_text).collect())
            .unwrap_or_default();

        let rows = grid
            .iter()
            .skip(1)
            .map(|row| {
                let mut cells: Vec<String> = row.iter().map(cell_text).collect();
                cells.resize(headers.len().max(cells.len()), String::new());
                cells
            })
            .collect();

        SheetTable { headers, rows }
    }

    /// Counts per `Status` value, most frequent first; `None` when the
    /// sheet has no Status column.
    pub fn status_histogram(&self) -> Option<Vec<(String, usize)>> {
        let status_idx = self
            .headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case("status"))?;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for row in &self.rows {
            let value = row.get(status_idx).cloned().unwrap_or_default();
            if value.is_empty() {
                continue;
            }
            *counts.entry(value).or_insert(0) += 1;
        }

        Some(
            counts
                .into_iter()
                .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
                .collect(),
        )
    }
}
