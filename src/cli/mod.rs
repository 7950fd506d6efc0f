use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod formatters;

#[derive(Parser)]
#[command(name = "caixa")]
#[command(version, about = "Finance dashboard for spreadsheet-based bookkeeping")]
#[command(
    long_about = "Reads the bookkeeping workbooks (monthly transactions, current account, purchases, sales targets) and renders summary metrics, comparative tables, filtered listings, and CSV/XLSX exports."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Directory holding the workbooks (overrides caixa.toml)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Monthly summary, comparative totals, and detailed records
    Dashboard {
        /// Month to summarize (1-12, defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,

        /// Year to summarize (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Only list records of this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Current-account report for one month tab
    Conta {
        /// Sheet tab name (defaults to the current month's tab)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Sales-versus-target report for one month tab
    Vendas {
        /// Sheet tab name (defaults to the first month tab)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Purchase sheet listing with status histogram
    Compras {
        /// Sheet tab name (defaults to the first tab)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Export the normalized transaction table
    Export {
        /// Output file path
        output: PathBuf,

        /// Output format (inferred from the extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    /// Infer the format from a file extension, defaulting to CSV.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => ExportFormat::Xlsx,
            _ => ExportFormat::Csv,
        }
    }
}
