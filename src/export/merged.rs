//! The merged keyword research file
//!
//! This is the only state kept between runs: `--update` and `--rankfalcon`
//! read it back, and users are expected to edit it by hand in between.

use crate::domain::{normalize_keyword, Column, KeywordRow, KeywordTable};
use crate::error::{KeywordError, Result};
use crate::source::read_delimited;
use std::path::Path;

pub const KEYWORD_HEADER: &str = "keyword";

/// Write every row with all columns, keyword first.
pub fn write_merged(table: &KeywordTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![KEYWORD_HEADER];
    header.extend(Column::ALL.iter().map(|c| c.header()));
    writer.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![row.keyword.clone()];
        record.extend(Column::ALL.iter().map(|&c| row.cell(c)));
        writer.write_record(&record)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} keywords to {}", table.len(), path.display());
    Ok(())
}

/// Read a merged file back, preserving its row order.
///
/// The first column is the keyword whatever its header. The source columns
/// must all be present; `quality` and `potential` may be missing.
pub fn read_merged(path: &Path) -> Result<KeywordTable> {
    let raw = read_delimited(path, "utf-8", b',')?;
    if raw.headers.is_empty() {
        return Err(KeywordError::MissingColumn {
            column: KEYWORD_HEADER.to_string(),
            path: path.to_path_buf(),
        });
    }

    let mut mapped: Vec<(usize, Column)> = Vec::new();
    for (idx, header) in raw.headers.iter().enumerate().skip(1) {
        if let Some(column) = Column::from_header(header) {
            mapped.push((idx, column));
        }
    }
    for required in Column::BASE {
        if !mapped.iter().any(|&(_, c)| c == required) {
            return Err(KeywordError::MissingColumn {
                column: required.header().to_string(),
                path: path.to_path_buf(),
            });
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

    tracing::debug!("Read {} keywords from {}", rows.len(), path.display());
    Ok(KeywordTable::new(rows))
}
