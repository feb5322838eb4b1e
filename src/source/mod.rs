//! Source loaders: turn each input export into a keyword-keyed table

pub mod keyword_planner;
pub mod manual;
pub mod search_console;

pub use keyword_planner::load_keyword_planner;
pub use manual::load_manual_keywords;
pub use search_console::load_search_console;

use crate::error::{KeywordError, Result};
use crate::utils::read_text;
use csv::StringRecord;
use std::path::{Path, PathBuf};

/// A decoded delimited file: header plus data records.
///
/// Records may be shorter or longer than the header; missing cells read as blank.
pub(crate) struct RawTable {
    pub path: PathBuf,
    pub headers: StringRecord,
    pub records: Vec<StringRecord>,
}

impl RawTable {
    /// Index of the column whose header is exactly `name` (surrounding whitespace ignored).
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers.iter().position(|h| h.trim() == name).ok_or_else(|| {
            KeywordError::MissingColumn { column: name.to_string(), path: self.path.clone() }
        })
    }
}

pub(crate) fn read_delimited(path: &Path, encoding: &str, delimiter: u8) -> Result<RawTable> {
    let text = read_text(path, encoding)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
    tracing::debug!("Read {} records from {}", records.len(), path.display());

    Ok(RawTable { path: path.to_path_buf(), headers, records })
}
