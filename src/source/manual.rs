//! Manually curated keyword list loader

use super::read_delimited;
use crate::domain::{normalize_keyword, Column, KeywordRow, KeywordTable};
use crate::error::Result;
use std::path::Path;

/// Load a comma-delimited keyword list.
///
/// The first column is the keyword. Further columns whose header names an
/// output column (`CPC`, `search volume`, ...) override the other sources;
/// anything else is ignored. A list of bare keywords is valid.
pub fn load_manual_keywords(path: &Path) -> Result<KeywordTable> {
    let raw = read_delimited(path, "utf-8", b',')?;

    let mut mapped: Vec<(usize, Column)> = Vec::new();
    for (idx, header) in raw.headers.iter().enumerate().skip(1) {
        match Column::from_header(header) {
            Some(column) if Column::BASE.contains(&column) => mapped.push((idx, column)),
            _ => tracing::debug!("Ignoring manual keyword column '{}'", header),
        }
    }

    let mut rows = Vec::with_capacity(raw.records.len());
    for record in &raw.records {
        let keyword = normalize_keyword(record.get(0).unwrap_or_default());
        if keyword.is_empty() {
            continue;
        }
        let mut row = KeywordRow::new(keyword);
        for &(idx, column) in &mapped {
            row.set_cell(column, record.get(idx).unwrap_or_default())?;
        }
        rows.push(row);
    }

    let table = KeywordTable::keep_last(rows);
    tracing::info!("Loaded {} manual keywords from {}", table.len(), path.display());
    Ok(table)
}
