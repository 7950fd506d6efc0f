//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating the
//! concerns of data calculation from presentation. Every formatter has a
//! table flavor (tabled) and relies on the shared currency codec so the
//! terminal shows the same `R$ 1.234,56` strings the spreadsheets use.

use caixa::currency::format_currency;
use caixa::records::TransactionRecord;
use caixa::reports::sales::StorePerformance;
use caixa::reports::{CurrentAccountReport, MonthlySummary, PeriodTotals, SalesReport, SheetTable};
use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::Style,
    Table, Tabled,
};

/// Format the month summary tiles (Receitas / Despesas / Saldo).
pub fn format_summary(summary: &MonthlySummary) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{} Resumo do Mês {}\n\n",
        "📅".cyan().bold(),
        summary.period.bold()
    ));
    output.push_str(&format!(
        "  💸 Receitas: {}\n",
        format_currency(summary.income).green()
    ));
    output.push_str(&format!(
        "  🛒 Despesas: {}\n",
        format_currency(summary.expenses).red()
    ));
    output.push_str(&format!(
        "  ⚖️ Saldo:    {}\n",
        format_currency(summary.balance).bold()
    ));

    if summary.balance > 0.0 {
        output.push_str(&format!("\n  {} lucro no mês\n", "🎉".green()));
    } else if summary.balance < 0.0 {
        output.push_str(&format!("\n  {} prejuízo no mês\n", "⚠️".red()));
    } else {
        output.push_str("\n  🔄 saldo equilibrado\n");
    }

    output
}

/// Format the comparative per-period totals table.
pub fn format_period_totals(totals: &[PeriodTotals]) -> String {
    #[derive(Tabled)]
    struct TotalsRow {
        #[tabled(rename = "Mês")]
        period: String,
        #[tabled(rename = "Receitas")]
        income: String,
        #[tabled(rename = "Despesas")]
        expenses: String,
        #[tabled(rename = "Saldo")]
        balance: String,
    }

    let rows: Vec<TotalsRow> = totals
        .iter()
        .map(|t| TotalsRow {
            period: t.period.clone(),
            income: format_currency(t.income),
            expenses: format_currency(t.expenses),
            balance: format_currency(t.income - t.expenses),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the detailed records listing.
pub fn format_records(records: &[&TransactionRecord]) -> String {
    #[derive(Tabled)]
    struct RecordRow {
        #[tabled(rename = "Data")]
        period: String,
        #[tabled(rename = "Categoria")]
        category: String,
        #[tabled(rename = "Valor")]
        amount: String,
        #[tabled(rename = "Tipo")]
        kind: String,
    }

    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow {
            period: r.period.clone(),
            category: r.category.clone(),
            amount: format_currency(r.amount),
            kind: r.kind.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the cross-year profit comparison: one row per calendar month,
/// one column per year.
pub fn format_yearly_profit(
    years: &[i32],
    profits: &std::collections::BTreeMap<(i32, u32), f64>,
) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Mês".to_string()];
    header.extend(years.iter().map(|y| y.to_string()));
    builder.push_record(header);

    for month in 1..=12u32 {
        if !years.iter().any(|y| profits.contains_key(&(*y, month))) {
            continue;
        }
        let mut row = vec![caixa::period::month_name(month).unwrap_or("?").to_string()];
        for year in years {
            row.push(
                profits
                    .get(&(*year, month))
                    .map(|p| format_currency(*p))
                    .unwrap_or_else(|| "-".to_string()),
            );
        }
        builder.push_record(row);
    }

    builder.build().with(Style::rounded()).to_string()
}

/// Format the current-account report metrics.
pub fn format_current_account(report: &CurrentAccountReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{} Faturamento\n\n", "📊".cyan().bold()));
    output.push_str(&metric("Faturamento Lojas", report.store_revenue));
    output.push_str(&metric("Faturamento Display", report.display_revenue));
    output.push_str(&metric("Faturamento Bruto", report.gross_revenue));
    output.push_str(&metric("Descontos", report.discounts));
    output.push_str(&metric("Perdas", report.losses));
    output.push_str(&metric("Faturamento Líquido", report.net_revenue));

    output.push_str(&format!("\n{} Compras\n\n", "🛒".cyan().bold()));
    output.push_str(&metric("Limite de Compra", report.purchase_limit));
    output.push_str(&metric("Saldo Disponível", report.available_balance));
    output.push_str(&metric("Compras P/ Aprovar", report.pending_purchases));
    output.push_str(&metric("Compras em Trânsito", report.in_transit_purchases));
    output.push_str(&metric("Compras NF", report.invoice_purchases));
    output.push_str(&metric("Nota Especial", report.special_invoice_purchases));
    output.push_str(&metric("Compras Registradas", report.registered_purchases));

    output
}

/// Format the sales-versus-target report.
pub fn format_sales(report: &SalesReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{} Relatório de Vendas\n\n", "📊".cyan().bold()));
    output.push_str(&metric("🎯 Meta Mensal", report.total_target));
    output.push_str(&metric("💰 Total Vendas", report.total_sales));
    output.push_str(&metric("📉 Falta p/ Meta", report.shortfall));
    output.push_str(&metric("📈 Previsão Fechamento", report.projected_close));

    if !report.met_target.is_empty() {
        output.push_str(&format!("\n{} Lojas que bateram a meta:\n", "✅".green()));
        for store in &report.met_target {
            output.push_str(&performance_line(store));
        }
    }
    if !report.missed_target.is_empty() {
        output.push_str(&format!("\n{} Lojas abaixo da meta:\n", "❌".red()));
        for store in &report.missed_target {
            output.push_str(&performance_line(store));
        }
    }

    output
}

/// Format a schemaless sheet (purchases pass-through).
pub fn format_sheet(table: &SheetTable) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.headers.clone());
    for row in &table.rows {
        builder.push_record(row.clone());
    }
    builder.build().with(Style::rounded()).to_string()
}

/// Format the per-category expense distribution for one period.
pub fn format_distribution(distribution: &[(String, f64)]) -> String {
    let total: f64 = distribution.iter().map(|(_, v)| v).sum();
    let mut output = String::new();
    output.push_str(&format!(
        "\n{} Despesas por Categoria\n\n",
        "🧾".cyan().bold()
    ));
    for (category, value) in distribution {
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        output.push_str(&format!(
            "  {:<24} {} ({:.1}%)\n",
            category,
            format_currency(*value),
            share
        ));
    }
    output
}

/// Format a status histogram as count lines.
pub fn format_histogram(histogram: &[(String, usize)]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{} Situação das Compras\n\n", "📇".cyan().bold()));
    for (status, count) in histogram {
        output.push_str(&format!("  {:<24} {}\n", status, count));
    }
    output
}

fn metric(label: &str, value: f64) -> String {
    format!("  {:<24} {}\n", label, format_currency(value))
}

fn performance_line(store: &StorePerformance) -> String {
    if store.shortfall > 0.0 {
        format!(
            "  - {}: vendeu {} (meta {}, faltou {})\n",
            store.store.bold(),
            format_currency(store.sales),
            format_currency(store.target),
            format_currency(store.shortfall).red()
        )
    } else {
        format!(
            "  - {}: vendeu {} (meta {})\n",
            store.store.bold(),
            format_currency(store.sales),
            format_currency(store.target)
        )
    }
}
