mod cli;

use anyhow::Result;
use caixa::config::Settings;
use caixa::export::{transactions_to_csv, transactions_to_xlsx};
use caixa::importers::{self, parse_ledger};
use caixa::loader::WorkbookCache;
use caixa::period;
use caixa::records::TransactionRecord;
use caixa::reports::sales::{is_month_sheet, parse_sales, summarize};
use caixa::reports::{summary, CurrentAccountReport, SheetTable};
use chrono::{Datelike, Local};
use clap::Parser;
use cli::{Cli, Commands, ExportFormat};
use colored::Colorize;
use serde_json::json;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging; stdout stays reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut settings = Settings::load()?;
    if let Some(dir) = cli.data_dir.clone() {
        settings = settings.with_data_dir(dir);
    }

    match cli.command {
        Commands::Dashboard {
            month,
            year,
            category,
        } => handle_dashboard(&settings, month, year, category.as_deref(), cli.json),
        Commands::Conta { sheet } => handle_conta(&settings, sheet.as_deref(), cli.json),
        Commands::Vendas { sheet } => handle_vendas(&settings, sheet.as_deref(), cli.json),
        Commands::Compras { sheet } => handle_compras(&settings, sheet.as_deref(), cli.json),
        Commands::Export { output, format } => handle_export(&settings, &output, format),
    }
}

/// Categories kept out of the expense distribution view.
const EXCLUDED_FROM_DISTRIBUTION: &[&str] = &["Faturamento - Spezia", "Faturamento - AMD"];

/// Load the transaction workbook, degrading to an empty record set with a
/// user-visible warning when the source is unavailable.
fn load_transactions_or_empty(settings: &Settings) -> Vec<TransactionRecord> {
    match importers::import_transactions(settings.transactions_path()) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{} {}", "⚠".yellow().bold(), e);
            Vec::new()
        }
    }
}

/// Handle dashboard command
fn handle_dashboard(
    settings: &Settings,
    month: Option<u32>,
    year: Option<i32>,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    let today = Local::now();
    let month = month.unwrap_or(today.month());
    let year = year.unwrap_or(today.year());
    let period_key = format!("{:04}-{:02}", year, month);

    let records = load_transactions_or_empty(settings);
    info!("dashboard over {} records, period {}", records.len(), period_key);

    let month_summary = summary::monthly_summary(&records, &period_key);

    // Comparative table bounded to the window around the selected month
    let window = summary::comparison_window(month);
    let totals: Vec<_> = summary::period_totals(&records)
        .into_iter()
        .filter(|t| {
            window
                .iter()
                .any(|m| t.period == format!("{:04}-{:02}", year, m))
        })
        .collect();

    let distribution =
        summary::expense_distribution(&records, &period_key, EXCLUDED_FROM_DISTRIBUTION);
    let profits = summary::profit_by_month(&records);
    let years = summary::years(&records);
    let filtered = summary::filter_records(&records, category, None);

    if json {
        let yearly_profit: Vec<_> = profits
            .iter()
            .map(|((y, m), profit)| json!({ "year": y, "month": m, "profit": profit }))
            .collect();
        let payload = json!({
            "summary": month_summary,
            "totals": totals,
            "expense_distribution": distribution,
            "yearly_profit": yearly_profit,
            "records": filtered,
            "categories": summary::categories(&records),
            "periods": summary::periods(&records),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", cli::formatters::format_summary(&month_summary));
    println!("{}", cli::formatters::format_period_totals(&totals));
    if !distribution.is_empty() {
        println!("{}", cli::formatters::format_distribution(&distribution));
    }
    if !profits.is_empty() {
        println!("\n{} Comparativo Geral\n", "📈".cyan().bold());
        println!("{}", cli::formatters::format_yearly_profit(&years, &profits));
    }
    println!("\n{} Registros Detalhados\n", "📋".cyan().bold());
    println!("{}", cli::formatters::format_records(&filtered));

    Ok(())
}

/// Handle current-account command
fn handle_conta(settings: &Settings, sheet: Option<&str>, json: bool) -> Result<()> {
    let path = settings.current_account_path();
    let mut cache = WorkbookCache::new();
    let sheets = cache.sheets(&path)?;

    // Default to the current month's tab when present, else the first tab
    let current_month_tab = period::month_name(Local::now().month())
        .map(|n| n.to_uppercase())
        .unwrap_or_default();
    let sheet_name = sheet
        .map(str::to_string)
        .or_else(|| {
            sheets
                .iter()
                .map(|(name, _)| name.clone())
                .find(|name| name.to_uppercase() == current_month_tab)
        })
        .or_else(|| sheets.first().map(|(name, _)| name.clone()))
        .ok_or_else(|| anyhow::anyhow!("current-account workbook has no sheets"))?;

    let grid = cache.sheet(&path, &sheet_name)?;
    let entries = parse_ledger(grid);
    let report = CurrentAccountReport::from_entries(&entries)?;

    if json {
        let payload = json!({ "sheet": sheet_name, "report": report, "entries": entries });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("\n{} Conta Corrente — {}", "📘".cyan().bold(), sheet_name.bold());
    println!("{}", cli::formatters::format_current_account(&report));

    Ok(())
}

/// Handle sales report command
fn handle_vendas(settings: &Settings, sheet: Option<&str>, json: bool) -> Result<()> {
    let path = settings.sales_path();
    let mut cache = WorkbookCache::new();
    let sheets = cache.sheets(&path)?;

    let sheet_name = sheet
        .map(str::to_string)
        .or_else(|| {
            sheets
                .iter()
                .map(|(name, _)| name.clone())
                .find(|name| is_month_sheet(name))
        })
        .or_else(|| sheets.first().map(|(name, _)| name.clone()))
        .ok_or_else(|| anyhow::anyhow!("sales workbook has no sheets"))?;

    let grid = cache.sheet(&path, &sheet_name)?;
    let stores = parse_sales(grid);
    let report = summarize(&stores);

    if json {
        let payload = json!({ "sheet": sheet_name, "report": report, "stores": stores });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("\n{} Vendas — {}", "💳".cyan().bold(), sheet_name.bold());
    println!("{}", cli::formatters::format_sales(&report));

    Ok(())
}

/// Handle purchases command
fn handle_compras(settings: &Settings, sheet: Option<&str>, json: bool) -> Result<()> {
    let path = settings.purchases_path();
    let mut cache = WorkbookCache::new();
    let sheets = cache.sheets(&path)?;

    let sheet_name = sheet
        .map(str::to_string)
        .or_else(|| sheets.first().map(|(name, _)| name.clone()))
        .ok_or_else(|| anyhow::anyhow!("purchases workbook has no sheets"))?;

    let grid = cache.sheet(&path, &sheet_name)?;
    let table = SheetTable::from_grid(grid);
    let histogram = table.status_histogram();

    if json {
        let payload = json!({ "sheet": sheet_name, "table": table, "status": histogram });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("\n{} Compras — {}\n", "📦".cyan().bold(), sheet_name.bold());
    println!("{}", cli::formatters::format_sheet(&table));
    if let Some(histogram) = histogram {
        println!("{}", cli::formatters::format_histogram(&histogram));
    }

    Ok(())
}

/// Handle export command
fn handle_export(
    settings: &Settings,
    output: &std::path::Path,
    format: Option<ExportFormat>,
) -> Result<()> {
    let records = load_transactions_or_empty(settings);
    let format = format.unwrap_or_else(|| ExportFormat::from_path(output));

    match format {
        ExportFormat::Csv => {
            std::fs::write(output, transactions_to_csv(&records)?)?;
        }
        ExportFormat::Xlsx => {
            transactions_to_xlsx(&records, output)?;
        }
    }

    println!(
        "{} Exported {} records to {}",
        "✓".green().bold(),
        records.len(),
        output.display()
    );

    Ok(())
}
