//! Caixa - spreadsheet-driven finance dashboard
//!
//! This library turns the irregular bookkeeping spreadsheets of a small
//! Brazilian retail operation (monthly categorized transactions, a
//! current-account ledger, purchase tracking, sales-versus-target tabs)
//! into normalized, queryable tables, and provides the aggregations and
//! exports the dashboard is built from.

pub mod config;
pub mod currency;
pub mod error;
pub mod export;
pub mod grid;
pub mod importers;
pub mod loader;
pub mod period;
pub mod records;
pub mod reports;
