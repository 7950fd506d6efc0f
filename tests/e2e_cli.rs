//! End-to-end CLI tests
//!
//! Drive the compiled binary against fixture workbooks and assert on the
//! rendered output. JSON mode is used wherever values are checked so the
//! assertions do not depend on table styling.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

mod common;

fn caixa() -> Command {
    Command::cargo_bin("caixa").expect("binary builds")
}

#[test]
fn test_dashboard_json_summary() {
    let dir = TempDir::new().unwrap();
    common::write_transactions_workbook(&dir.path().join("dados.xlsx"));

    let output = caixa()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--json",
            "dashboard",
            "--month",
            "1",
            "--year",
            "2025",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(payload["summary"]["period"], "2025-01");
    assert_eq!(payload["summary"]["income"], 54000.0);
    assert!((payload["summary"]["expenses"].as_f64().unwrap() - 1320.45).abs() < 1e-9);
    assert_eq!(payload["categories"].as_array().unwrap().len(), 3);
    assert_eq!(payload["records"].as_array().unwrap().len(), 5);
    assert_eq!(payload["periods"].as_array().unwrap().len(), 2);
    // One (year, month) profit point per populated period
    assert_eq!(payload["yearly_profit"].as_array().unwrap().len(), 2);
}

#[test]
fn test_dashboard_category_filter() {
    let dir = TempDir::new().unwrap();
    common::write_transactions_workbook(&dir.path().join("dados.xlsx"));

    let output = caixa()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--json",
            "dashboard",
            "--month",
            "1",
            "--year",
            "2025",
            "--category",
            "Aluguel",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let records = payload["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["category"] == "Aluguel"));
}

#[test]
fn test_dashboard_degrades_when_workbook_is_missing() {
    let dir = TempDir::new().unwrap();

    caixa()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--no-color",
            "dashboard",
            "--month",
            "1",
            "--year",
            "2025",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("source unavailable"))
        .stdout(predicate::str::contains("R$ 0,00"));
}

#[test]
fn test_conta_report_for_month_tab() {
    let dir = TempDir::new().unwrap();
    common::write_current_account_workbook(&dir.path().join("conta_corrente.xlsx"));

    let output = caixa()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--json",
            "conta",
            "--sheet",
            "MARÇO",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(payload["sheet"], "MARÇO");
    let report = &payload["report"];
    assert!((report["gross_revenue"].as_f64().unwrap() - 209147.11).abs() < 1e-6);
    assert!((report["purchase_limit"].as_f64().unwrap() - 83209.772).abs() < 1e-6);
    assert_eq!(payload["entries"].as_array().unwrap().len(), 21);
}

#[test]
fn test_vendas_defaults_to_first_month_tab() {
    let dir = TempDir::new().unwrap();
    common::write_sales_workbook(&dir.path().join("relatorio_vendas.xlsx"));

    let output = caixa()
        .args(["--data-dir", dir.path().to_str().unwrap(), "--json", "vendas"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    // "Resumo" is skipped; the month tab is picked by name
    assert_eq!(payload["sheet"], "Março");
    assert_eq!(payload["report"]["total_sales"], 200000.0);
    assert_eq!(payload["report"]["met_target"].as_array().unwrap().len(), 1);
}

#[test]
fn test_compras_histogram() {
    let dir = TempDir::new().unwrap();
    common::write_purchases_workbook(&dir.path().join("compras.xlsx"));

    caixa()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--no-color",
            "compras",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distribuidora A"))
        .stdout(predicate::str::contains("Aprovado"));
}

#[test]
fn test_export_csv() {
    let dir = TempDir::new().unwrap();
    common::write_transactions_workbook(&dir.path().join("dados.xlsx"));
    let out = dir.path().join("financas.csv");

    caixa()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "export",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("period,category,amount,kind"));
    assert_eq!(csv.lines().count(), 6);
    assert!(csv.contains("2025-01,Aluguel,1000.0,Despesa"));
}

#[test]
fn test_export_xlsx_round_trips() {
    let dir = TempDir::new().unwrap();
    common::write_transactions_workbook(&dir.path().join("dados.xlsx"));
    let out = dir.path().join("financas.xlsx");

    caixa()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "export",
            out.to_str().unwrap(),
            "--format",
            "xlsx",
        ])
        .assert()
        .success();

    let grid = caixa::loader::load_grid(&out, None).unwrap();
    // Header plus the five normalized records
    assert_eq!(grid.len(), 6);
    assert_eq!(caixa::grid::cell_text(&grid[0][0]), "period");
}
