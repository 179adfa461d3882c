// Standard defence theses, keyed by claim type
//
// Stored as a spreadsheet (xlsx/xls/ods via calamine) or CSV. The first
// non-empty row is the header; the claim and defence columns are found by
// name so extra columns and reordering are tolerated.

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Reader};
use std::path::Path;

use crate::config::constants::{THESIS_CLAIM_COLUMN, THESIS_DEFENSE_COLUMN};

/// One row of the theses table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thesis {
    /// Claim type ("Pedido")
    pub claim: String,
    /// Standard line of defence ("Linha de Defesa Padrão")
    pub defense: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThesisTable {
    pub rows: Vec<Thesis>,
}

impl ThesisTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Build the table from a grid of cell strings (header row first)
    pub fn from_grid<I>(grid: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut rows = grid
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()));

        let header = rows.next().context("Theses table has no header row")?;
        let claim_idx = column_index(&header, THESIS_CLAIM_COLUMN)?;
        let defense_idx = column_index(&header, THESIS_DEFENSE_COLUMN)?;

        Ok(Self {
            rows: rows
                .map(|row| Thesis {
                    claim: cell(&row, claim_idx),
                    defense: cell(&row, defense_idx),
                })
                .collect(),
        })
    }
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}

fn column_index(header: &[String], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| anyhow!("Theses table is missing column '{}'", name))
}

/// Load the theses table, degrading to an empty table on any failure
pub fn load_theses(path: &Path) -> ThesisTable {
    match read_theses(path) {
        Ok(table) => {
            tracing::debug!(path = %path.display(), count = table.len(), "Loaded theses table");
            table
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %format!("{:#}", e), "Theses table unavailable");
            ThesisTable::default()
        }
    }
}

fn read_theses(path: &Path) -> Result<ThesisTable> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let grid = if is_csv {
        read_csv_grid(path)?
    } else {
        read_sheet_grid(path)?
    };

    ThesisTable::from_grid(grid)
}

fn read_sheet_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .context("Spreadsheet has no worksheets")?
        .context("Failed to read first worksheet")?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect())
}

fn read_csv_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV: {}", path.display()))?;

    reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect::<Vec<String>>())
                .context("Failed to parse CSV record")
        })
        .collect()
}
