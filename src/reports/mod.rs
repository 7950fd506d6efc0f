// Reporting module - aggregations over the normalized tables

pub mod current_account;
pub mod purchases;
pub mod sales;
pub mod summary;

pub use current_account::CurrentAccountReport;
pub use purchases::SheetTable;
pub use sales::{SalesReport, StoreSales};
pub use summary::{MonthlySummary, PeriodTotals};
