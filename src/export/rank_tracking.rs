//! RankFalcon keyword import

use super::merged::KEYWORD_HEADER;
use crate::domain::{Config, KeywordTable};
use crate::error::Result;
use std::path::Path;

const FIELDS: [&str; 5] = ["site", "search_engine", "location_name", "groups", "language"];

/// Fixed values stamped onto every exported keyword.
#[derive(Debug, Clone)]
pub struct RankTrackingOptions {
    pub site: String,
    pub search_engine: String,
    pub language: String,
    pub cutoff: usize,
}

impl From<&Config> for RankTrackingOptions {
    fn from(config: &Config) -> Self {
        Self {
            site: config.site.clone(),
            search_engine: config.search_engine.clone(),
            language: config.language.clone(),
            cutoff: config.cutoff,
        }
    }
}

/// Write the first `cutoff` rows of `table`, in table order, as an import file.
///
/// `location_name` and `groups` are left empty. Returns the number of rows written.
pub fn write_rank_tracking(
    table: &KeywordTable,
    path: &Path,
    options: &RankTrackingOptions,
) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![KEYWORD_HEADER];
    header.extend(FIELDS);
    writer.write_record(&header)?;

    let mut written = 0;
    for row in table.rows.iter().take(options.cutoff) {
        writer.write_record([
            row.keyword.as_str(),
            options.site.as_str(),
            options.search_engine.as_str(),
            "",
            "",
            options.language.as_str(),
        ])?;
        written += 1;
    }
    writer.flush()?;

    tracing::info!("Wrote {} of {} keywords to {}", written, table.len(), path.display());
    Ok(written)
}
