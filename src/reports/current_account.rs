//! Current-account report derived from a month's ledger entries
//!
//! The ledger is a flat list with section headers mixed in, so figures are
//! located by label, tolerating intervening null-valued rows. The derived
//! metrics reproduce the bookkeeping rules: net revenue is gross minus
//! discounts and losses, and the monthly purchase limit is a fixed share
//! of net revenue.

use serde::Serialize;

use crate::error::{DashboardError, Result};
use crate::records::LedgerEntry;

// Reserved ledger vocabulary. Labels are matched after the parser's
// trim/upper-case normalization.
pub const LABEL_STORE_REVENUE: &str = "FATURAMENTO LOJAS";
pub const LABEL_DISPLAY_REVENUE: &str = "FATURAMENTO DISPLAY/ATACADO";
pub const LABEL_DISCOUNTS: &str = "DESCONTO LOJAS";
pub const LABEL_LOSSES: &str = "PERDAS LOJAS";
pub const LABEL_AVAILABLE_BALANCE: &str = "SALDO DISPONIVEL PARA COMPRAS";
pub const LABEL_PENDING_PURCHASES: &str = "COMPRAS PARA APROVAR (PENDENTE)";
pub const LABEL_IN_TRANSIT_PURCHASES: &str = "COMPRAS EM TRÂNSITO";
pub const LABEL_INVOICE_PURCHASES: &str = "TOTAL COMPRAS NOTA FISCAL";
pub const LABEL_SPECIAL_INVOICE_PURCHASES: &str = "TOTAL COMPRAS NOTA ESPECIAL";

/// Share of net revenue available for the month's purchases.
pub const PURCHASE_LIMIT_FACTOR: f64 = 0.40;

/// Derived metrics for one month of the current account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentAccountReport {
    pub store_revenue: f64,
    pub display_revenue: f64,
    pub gross_revenue: f64,
    pub discounts: f64,
    pub losses: f64,
    pub net_revenue: f64,
    pub purchase_limit: f64,
    pub available_balance: f64,
    pub pending_purchases: f64,
    pub in_transit_purchases: f64,
    pub invoice_purchases: f64,
    pub special_invoice_purchases: f64,
    pub registered_purchases: f64,
}

/// Find a figure by label, skipping header rows.
///
/// Matching is case-insensitive (labels are stored upper-cased); the first
/// matching row wins. Returns `None` both when the label is absent and
/// when it exists without a value.
pub fn lookup(entries: &[LedgerEntry], label: &str) -> Option<f64> {
    let wanted = label.trim().to_uppercase();
    entries
        .iter()
        .find(|entry| entry.label == wanted)
        .and_then(|entry| entry.value)
}

/// Like [`lookup`], but a missing label or a label without a value is a
/// structured error naming the label.
pub fn required(entries: &[LedgerEntry], label: &str) -> Result<f64> {
    let wanted = label.trim().to_uppercase();
    let entry = entries
        .iter()
        .find(|entry| entry.label == wanted)
        .ok_or_else(|| DashboardError::LabelNotFound(wanted.clone()))?;
    entry
        .value
        .ok_or_else(|| DashboardError::LabelWithoutValue(wanted).into())
}

impl CurrentAccountReport {
    /// Build the report from one month tab's parsed entries.
    pub fn from_entries(entries: &[LedgerEntry]) -> Result<Self> {
        let store_revenue = required(entries, LABEL_STORE_REVENUE)?;
        let display_revenue = required(entries, LABEL_DISPLAY_REVENUE)?;
        let discounts = required(entries, LABEL_DISCOUNTS)?;
        let losses = required(entries, LABEL_LOSSES)?;
        let available_balance = required(entries, LABEL_AVAILABLE_BALANCE)?;
        let pending_purchases = required(entries, LABEL_PENDING_PURCHASES)?;
        let in_transit_purchases = required(entries, LABEL_IN_TRANSIT_PURCHASES)?;
        let invoice_purchases = required(entries, LABEL_INVOICE_PURCHASES)?;
        let special_invoice_purchases = required(entries, LABEL_SPECIAL_INVOICE_PURCHASES)?;

        let gross_revenue = store_revenue + display_revenue;
        let net_revenue = gross_revenue - discounts - losses;

        Ok(CurrentAccountReport {
            store_revenue,
            display_revenue,
            gross_revenue,
            discounts,
            losses,
            net_revenue,
            purchase_limit: net_revenue * PURCHASE_LIMIT_FACTOR,
            available_balance,
            pending_purchases,
            in_transit_purchases,
            invoice_purchases,
            special_invoice_purchases,
            registered_purchases: invoice_purchases + special_invoice_purchases,
        })
    }
}
