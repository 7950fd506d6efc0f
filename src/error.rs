//! Error handling for the caixa dashboard
//!
//! Defines custom error types and establishes a unified Result type
//! using anyhow for context chaining and error propagation.
//!
//! Failures are deliberately coarse: a cell that fails to decode is a
//! value (`None`), not an error — only whole-source conditions (missing
//! workbook, missing sheet, missing ledger label) are typed here.

use std::path::PathBuf;
use thiserror::Error;

/// Structured errors surfaced to the presentation layer
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("source unavailable: {}", .0.display())]
    SourceUnavailable(PathBuf),

    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    #[error("ledger label not found: {0}")]
    LabelNotFound(String),

    #[error("ledger label has no value: {0}")]
    LabelWithoutValue(String),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dashboard operations
pub type Result<T> = anyhow::Result<T>;
