//! Shared fixture builders for the integration suite.
//!
//! Each builder writes a real XLSX workbook shaped like the production
//! spreadsheets, including their quirks: out-of-order period columns,
//! subtotal rows, currency strings mixed with section headers.

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Vertical-layout transactions workbook (`dados.xlsx`).
///
/// Period columns are deliberately out of chronological order and one cell
/// is left sparse.
pub fn write_transactions_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "CONTROLE FINANCEIRO").unwrap();

    worksheet.write_string(1, 0, "PERÍODO").unwrap();
    worksheet.write_string(1, 1, "FEVEREIRO.2025").unwrap();
    worksheet.write_string(1, 2, "JANEIRO.2025").unwrap();

    worksheet.write_string(2, 0, "Aluguel").unwrap();
    worksheet.write_number(2, 1, -1100.0).unwrap();
    worksheet.write_number(2, 2, -1000.0).unwrap();

    // Subtotal row, must be excluded from the normalized output
    worksheet.write_string(3, 0, "RECEITAS").unwrap();
    worksheet.write_number(3, 1, 99999.0).unwrap();
    worksheet.write_number(3, 2, 99999.0).unwrap();

    worksheet.write_string(4, 0, "Faturamento - Spezia").unwrap();
    worksheet.write_number(4, 1, 61000.0).unwrap();
    worksheet.write_number(4, 2, 54000.0).unwrap();

    // Sparse: no February figure for this category
    worksheet.write_string(5, 0, "Energia").unwrap();
    worksheet.write_number(5, 2, -320.45).unwrap();

    workbook.save(path).unwrap();
}

/// Current-account workbook (`conta_corrente.xlsx`) with one tab per
/// month; the MARÇO tab carries the full documented layout.
pub fn write_current_account_workbook(path: &Path) {
    let mut workbook = Workbook::new();

    let janeiro = workbook.add_worksheet();
    janeiro.set_name("JANEIRO").unwrap();
    janeiro.write_string(0, 0, "CONTA CORRENTE JANEIRO").unwrap();
    janeiro.write_string(1, 0, "FATURAMENTO LOJAS").unwrap();
    janeiro.write_string(1, 1, "R$ 150.000,00").unwrap();

    let marco = workbook.add_worksheet();
    marco.set_name("MARÇO").unwrap();

    let rows: &[(&str, Option<&str>)] = &[
        ("CONTA CORRENTE MARÇO", None),
        ("FATURAMENTO REALIZADO", None),
        ("FATURAMENTO LOJAS", Some("R$ 203.808,15")),
        ("FATURAMENTO DISPLAY/ATACADO", Some("R$ 5.338,96")),
        ("DESCONTO LOJAS", Some("R$ 555,54")),
        ("PERDAS LOJAS", Some("R$ 567,14")),
        ("RESULTADO DO FATURAMENTO", Some("R$ 208.579,97")),
        ("LIMITE COMPRA MÊS", Some("R$ 83.658,84")),
        ("COMPRA PARA ATACADO", Some("R$ 2.000,00")),
        ("SALDO DISPONIVEL PARA COMPRAS", Some("R$ 13.272,67")),
        ("CUSTO FIXO GERAL (CD + LOJAS)", Some("R$ 152.000,00")),
        ("DEVOLUÇÃO", None),
        ("TRANSFERENCIA PRODUTO ENTRE LOJAS", Some("R$ 77.820,62")),
        ("", None),
        ("COMPRAS REALIZADA ATÉ O MOMENTO", None),
        ("COMPRAS PARA APROVAR (PENDENTE)", Some("R$ 465,00")),
        ("COMPRAS EM TRÂNSITO", Some("R$ 7.965,61")),
        ("TOTAL COMPRAS NOTA FISCAL", Some("R$ 52.300,52")),
        ("TOTAL COMPRAS NOTA ESPECIAL", Some("R$ 10.120,04")),
        ("TOTAL RECEBIDAS GERAL", Some("R$ 62.420,56")),
        ("TOTAL RECEBIDAS + TRÂNSITO", Some("R$ 70.386,17")),
    ];

    for (i, (label, value)) in rows.iter().enumerate() {
        let row = i as u32;
        marco.write_string(row, 0, *label).unwrap();
        if let Some(value) = value {
            marco.write_string(row, 1, *value).unwrap();
        }
    }

    workbook.save(path).unwrap();
}

/// Sales workbook (`relatorio_vendas.xlsx`): an auxiliary tab followed by
/// a month tab with the year columns swapped out of their usual order.
pub fn write_sales_workbook(path: &Path) {
    let mut workbook = Workbook::new();

    let resumo = workbook.add_worksheet();
    resumo.set_name("Resumo").unwrap();
    resumo.write_string(0, 0, "observações gerais").unwrap();

    let marco = workbook.add_worksheet();
    marco.set_name("Março").unwrap();

    let headers = [
        "LOJA",
        "VENDAS 2024",
        "VENDAS 2025",
        "META",
        "PREVISÃO DE FECHAMENTO",
    ];
    for (col, header) in headers.iter().enumerate() {
        marco.write_string(0, col as u16, *header).unwrap();
    }

    marco.write_string(1, 0, "Loja Centro").unwrap();
    marco.write_number(1, 1, 110000.0).unwrap();
    marco.write_number(1, 2, 120000.0).unwrap();
    marco.write_number(1, 3, 100000.0).unwrap();
    marco.write_number(1, 4, 130000.0).unwrap();

    marco.write_string(2, 0, "Loja Norte").unwrap();
    marco.write_number(2, 1, 90000.0).unwrap();
    marco.write_number(2, 2, 80000.0).unwrap();
    marco.write_number(2, 3, 95000.0).unwrap();
    marco.write_number(2, 4, 85000.0).unwrap();

    workbook.save(path).unwrap();
}

/// Purchases workbook (`compras.xlsx`) with a Status column.
pub fn write_purchases_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Pedidos").unwrap();

    let headers = ["Fornecedor", "Valor", "Status"];
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }

    let rows: &[(&str, f64, &str)] = &[
        ("Distribuidora A", 1200.0, "Aprovado"),
        ("Distribuidora B", 830.5, "Pendente"),
        ("Distribuidora C", 410.0, "Aprovado"),
    ];
    for (i, (supplier, value, status)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, *supplier).unwrap();
        worksheet.write_number(row, 1, *value).unwrap();
        worksheet.write_string(row, 2, *status).unwrap();
    }

    workbook.save(path).unwrap();
}
