//! The three entry points: process, update and rank-tracking export

use crate::domain::{Config, KeywordTable};
use crate::error::Result;
use crate::export::{read_merged, write_merged, write_rank_tracking, RankTrackingOptions};
use crate::merge::merge_sources;
use crate::score::calculate_metrics;
use crate::source::{load_keyword_planner, load_manual_keywords, load_search_console};

/// Load all three sources and join them into one unscored table.
pub fn merge_files(config: &Config) -> Result<KeywordTable> {
    let search_console = load_search_console(&config.search_console_path())?;
    let keyword_planner = load_keyword_planner(
        &config.working_dir,
        &config.keyword_planner_glob,
        &config.keyword_planner_encoding,
    )?;
    let manual = load_manual_keywords(&config.manual_keywords_path())?;
    Ok(merge_sources(search_console, keyword_planner, manual))
}

/// Merge, score and write the merged research file.
pub fn process(config: &Config) -> Result<KeywordTable> {
    let mut table = merge_files(config)?;
    calculate_metrics(&mut table)?;
    write_merged(&table, &config.output_path())?;
    Ok(table)
}

/// Rescore an existing (possibly hand-edited) research file in place.
pub fn update(config: &Config) -> Result<KeywordTable> {
    let mut table = read_merged(&config.output_path())?;
    calculate_metrics(&mut table)?;
    write_merged(&table, &config.output_path())?;
    Ok(table)
}

/// What the rank-tracking export did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankTrackingOutcome {
    /// The research file was missing and had to be built first.
    pub processed: bool,
    pub rows_written: usize,
}

/// Write the rank-tracker import from the research file, building it first if absent.
///
/// Only a missing research file triggers processing; any other failure
/// reading or writing it is returned as is.
pub fn rank_tracking(config: &Config) -> Result<RankTrackingOutcome> {
    let merged_path = config.output_path();
    let (table, processed) = if merged_path.exists() {
        (read_merged(&merged_path)?, false)
    } else {
        tracing::info!("{} not found, processing keyword files first", merged_path.display());
        (process(config)?, true)
    };

    let rows_written = write_rank_tracking(
        &table,
        &config.rank_tracking_output_path(),
        &RankTrackingOptions::from(config),
    )?;
    Ok(RankTrackingOutcome { processed, rows_written })
}
