//! Dashboard settings
//!
//! The workbooks live in a single data directory with well-known file
//! names. Defaults match the historical layout; a `caixa.toml` next to the
//! data (or passed explicitly) overrides any of them.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "caixa.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding every workbook.
    pub data_dir: PathBuf,
    /// Vertical-layout transactions workbook.
    pub transactions_file: String,
    /// Current-account workbook, one tab per month.
    pub current_account_file: String,
    /// Purchase tracking workbook.
    pub purchases_file: String,
    /// Sales-versus-target workbook.
    pub sales_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_dir: PathBuf::from("data"),
            transactions_file: "dados.xlsx".to_string(),
            current_account_file: "conta_corrente.xlsx".to_string(),
            purchases_file: "compras.xlsx".to_string(),
            sales_file: "relatorio_vendas.xlsx".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `caixa.toml` when present, defaults otherwise.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Override the data directory (the CLI's `--data-dir` flag).
    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = dir;
        self
    }

    pub fn transactions_path(&self) -> PathBuf {
        self.data_dir.join(&self.transactions_file)
    }

    pub fn current_account_path(&self) -> PathBuf {
        self.data_dir.join(&self.current_account_file)
    }

    pub fn purchases_path(&self) -> PathBuf {
        self.data_dir.join(&self.purchases_file)
    }

    pub fn sales_path(&self) -> PathBuf {
        self.data_dir.join(&self.sales_file)
    }
}
