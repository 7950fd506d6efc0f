//! Export of the normalized tables
//!
//! Serializes already-normalized records; no parsing logic lives here.
//! CSV column order follows the canonical projections (period, category,
//! amount, kind / label, value).

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::info;

use crate::records::{LedgerEntry, TransactionRecord};

/// Serialize transactions to CSV.
pub fn transactions_to_csv(records: &[TransactionRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer
            .serialize(record)
            .context("failed to serialize transaction record")?;
    }
    let bytes = writer.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Serialize ledger entries to CSV; null values become empty cells.
pub fn ledger_to_csv(entries: &[LedgerEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in entries {
        writer
            .serialize(entry)
            .context("failed to serialize ledger entry")?;
    }
    let bytes = writer.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Write transactions to an XLSX workbook at `path`.
pub fn transactions_to_xlsx(records: &[TransactionRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in ["period", "category", "amount", "kind"].iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .context("failed to write XLSX header")?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet
            .write_string(row, 0, &record.period)
            .and_then(|ws| ws.write_string(row, 1, &record.category))
            .and_then(|ws| ws.write_number(row, 2, record.amount))
            .and_then(|ws| ws.write_string(row, 3, record.kind.as_str()))
            .context("failed to write XLSX row")?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to save workbook {}", path.display()))?;

    info!("exported {} records to {}", records.len(), path.display());
    Ok(())
}
