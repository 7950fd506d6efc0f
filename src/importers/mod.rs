// Import module - spreadsheet-to-record parsers for the dashboard workbooks

pub mod ledger;
pub mod vertical;

use anyhow::Result;
use std::path::Path;

use crate::loader;
use crate::records::{LedgerEntry, TransactionRecord};

pub use ledger::parse_ledger;
pub use vertical::parse_vertical;

/// Load and parse the main transactions workbook (vertical layout).
///
/// The first sheet of the workbook is the transaction sheet. Loader
/// failures (missing file, unreadable workbook) surface as structured
/// errors; callers that want the degrade-to-empty dashboard behavior match
/// on the error, report it, and continue with an empty record set.
pub fn import_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<TransactionRecord>> {
    let grid = loader::load_grid(path.as_ref(), None)?;
    Ok(parse_vertical(&grid))
}

/// Load and parse one month tab of the current-account workbook.
pub fn import_ledger<P: AsRef<Path>>(path: P, sheet: &str) -> Result<Vec<LedgerEntry>> {
    let grid = loader::load_grid(path.as_ref(), Some(sheet))?;
    Ok(parse_ledger(&grid))
}
