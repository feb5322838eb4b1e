//! Search console export loader

use super::read_delimited;
use crate::domain::{normalize_keyword, Column, KeywordRow, KeywordTable};
use crate::error::{KeywordError, Result};
use std::path::Path;

/// Data columns after the keyword, renamed by position regardless of their header.
const COLUMNS: [Column; 4] = [Column::Impressions, Column::Clicks, Column::Ctr, Column::Position];

/// Load a comma-delimited search console export.
///
/// Search console encodes spaces in queries as `+`, so `running+shoes` and
/// `running shoes` join to the same key.
pub fn load_search_console(path: &Path) -> Result<KeywordTable> {
    let raw = read_delimited(path, "utf-8", b',')?;

    let expected = COLUMNS.len() + 1;
    if raw.headers.len() != expected {
        return Err(KeywordError::ColumnCount {
            expected,
            found: raw.headers.len(),
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::with_capacity(raw.records.len());
    for record in &raw.records {
        let keyword = normalize_keyword(&record.get(0).unwrap_or_default().replace('+', " "));
        if keyword.is_empty() {
            continue;
        }
        let mut row = KeywordRow::new(keyword);
        for (idx, column) in COLUMNS.into_iter().enumerate() {
            row.set_cell(column, record.get(idx + 1).unwrap_or_default())?;
        }
        rows.push(row);
    }

    let table = KeywordTable::keep_last(rows);
    tracing::info!("Loaded {} search console keywords from {}", table.len(), path.display());
    Ok(table)
}
