//! Workbook loading and caching
//!
//! Owns every filesystem touch point: the parsers themselves only ever see
//! an already-materialized [`RawGrid`]. Missing files and missing sheets
//! surface as structured [`DashboardError`] values so the presentation
//! layer can degrade to an empty dashboard instead of aborting.
//!
//! [`WorkbookCache`] is the explicit replacement for the old process-wide
//! memoized multi-sheet read: it is owned by the caller, keyed by file
//! path, and invalidated when the file's mtime changes.

use anyhow::{Context, Result};
use calamine::{open_workbook, Reader, Xlsx};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info};

use crate::error::DashboardError;
use crate::grid::{grid_from_range, RawGrid};

/// Load one sheet of a workbook as a raw grid.
///
/// With `sheet: None` the first sheet is used (the transactions workbook
/// keeps its data there). A missing file maps to
/// [`DashboardError::SourceUnavailable`], an unknown sheet name to
/// [`DashboardError::SheetNotFound`].
pub fn load_grid(path: &Path, sheet: Option<&str>) -> Result<RawGrid> {
    if !path.exists() {
        return Err(DashboardError::SourceUnavailable(path.to_path_buf()).into());
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("failed to open workbook {}", path.display()))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| DashboardError::SheetNotFound("<empty workbook>".to_string()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|_| DashboardError::SheetNotFound(sheet_name.clone()))?;

    debug!(
        "loaded sheet '{}' from {} ({} rows)",
        sheet_name,
        path.display(),
        range.height()
    );

    Ok(grid_from_range(&range))
}

/// Sheet tab names in workbook order (the current-account workbook keeps
/// one tab per month).
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(DashboardError::SourceUnavailable(path.to_path_buf()).into());
    }

    let workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("failed to open workbook {}", path.display()))?;

    Ok(workbook.sheet_names().to_vec())
}

/// Materialize every sheet of a workbook, preserving tab order.
pub fn load_all_sheets(path: &Path) -> Result<Vec<(String, RawGrid)>> {
    if !path.exists() {
        return Err(DashboardError::SourceUnavailable(path.to_path_buf()).into());
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("failed to open workbook {}", path.display()))?;

    let names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|_| DashboardError::SheetNotFound(name.clone()))?;
        sheets.push((name, grid_from_range(&range)));
    }

    info!("loaded {} sheets from {}", sheets.len(), path.display());
    Ok(sheets)
}

struct CachedWorkbook {
    mtime: SystemTime,
    sheets: Vec<(String, RawGrid)>,
}

/// Explicit memoization of full multi-sheet reads.
///
/// Keyed by file path; an entry is reused until the file's mtime changes,
/// at which point the whole workbook is re-read. Owned by the caller
/// rather than hidden in global state.
#[derive(Default)]
pub struct WorkbookCache {
    entries: HashMap<PathBuf, CachedWorkbook>,
}

impl WorkbookCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// All sheets of `path`, re-reading only when the file changed on disk.
    pub fn sheets(&mut self, path: &Path) -> Result<&[(String, RawGrid)]> {
        let mtime = fs::metadata(path)
            .map_err(|_| DashboardError::SourceUnavailable(path.to_path_buf()))?
            .modified()?;

        let entry = match self.entries.entry(path.to_path_buf()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().mtime != mtime {
                    debug!("workbook {} changed on disk; reloading", path.display());
                    occupied.insert(CachedWorkbook {
                        mtime,
                        sheets: load_all_sheets(path)?,
                    });
                }
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(CachedWorkbook {
                mtime,
                sheets: load_all_sheets(path)?,
            }),
        };

        Ok(&entry.sheets)
    }

    /// One named sheet out of the cached workbook.
    pub fn sheet(&mut self, path: &Path, name: &str) -> Result<&RawGrid> {
        let sheets = self.sheets(path)?;
        sheets
            .iter()
            .find(|(sheet_name, _)| sheet_name == name)
            .map(|(_, grid)| grid)
            .ok_or_else(|| DashboardError::SheetNotFound(name.to_string()).into())
    }

    /// Drop a cached workbook (e.g. after an export overwrote it).
    pub fn invalidate(&mut self, path: &Path) {
        self.entries.remove(path);
    }
}
