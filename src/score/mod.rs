//! Keyword scoring and ordering
//!
//! `quality` estimates how valuable a keyword is for the site: a high CPC
//! marks a commercially valuable keyword, a high CTR marks one the site is
//! already relevant for. `potential` ranks keywords worth working on: good
//! quality, room to climb in position, low competition and mid-range volume.

pub mod volume;

pub use volume::VolumeBucket;

use crate::domain::{Column, KeywordRow, KeywordTable};
use crate::error::{KeywordError, Result};
use std::cmp::Ordering;

const DEFAULT_CTR: f64 = 0.0;
const DEFAULT_CPC: f64 = 0.0;
const DEFAULT_POSITION: f64 = 10.0;
const DEFAULT_COMPETITION: f64 = 1.0;

/// Keeps the denominator non-zero for keywords without competition.
const COMPETITION_EPSILON: f64 = 1e-4;

/// `5 * CTR + CPC`.
///
/// CTR is read as a plain number once a trailing `%` is removed, so `"3.2%"`
/// contributes 3.2, not 0.032.
pub fn quality(row: &KeywordRow) -> Result<f64> {
    let ctr = match row.ctr.as_deref() {
        Some(raw) => parse_ctr(raw).ok_or_else(|| KeywordError::InvalidNumber {
            column: Column::Ctr.header().to_string(),
            keyword: row.keyword.clone(),
            value: raw.to_string(),
        })?,
        None => DEFAULT_CTR,
    };
    let cpc = row.cpc.unwrap_or(DEFAULT_CPC);
    Ok(5.0 * ctr + cpc)
}

/// `quality * 0.01 * position * volume weight / (competition + 1e-4)`.
pub fn potential(row: &KeywordRow, quality: f64) -> Result<f64> {
    let position = row.position.unwrap_or(DEFAULT_POSITION);
    let competition = row.competition.unwrap_or(DEFAULT_COMPETITION);
    let bucket = VolumeBucket::from_cell(row.search_volume.as_deref()).map_err(|e| {
        KeywordError::UnknownVolumeBucket { keyword: row.keyword.clone(), label: e.0 }
    })?;
    Ok(quality * 0.01 * position * bucket.weight() / (competition + COMPETITION_EPSILON))
}

/// Recompute `quality` and `potential` for every row, then sort by potential.
pub fn calculate_metrics(table: &mut KeywordTable) -> Result<()> {
    for row in &mut table.rows {
        let q = quality(row)?;
        let p = potential(row, q)?;
        row.quality = Some(q);
        row.potential = Some(p);
    }
    sort_by_potential(table);
    tracing::debug!("Scored {} keywords", table.len());
    Ok(())
}

/// Stable sort, highest potential first. Rows without a potential sort last.
pub fn sort_by_potential(table: &mut KeywordTable) {
    table.rows.sort_by(|a, b| descending(a.potential, b.potential));
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.filter(|v| !v.is_nan());
    let b = b.filter(|v| !v.is_nan());
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn parse_ctr(raw: &str) -> Option<f64> {
    raw.trim().trim_end_matches('%').trim().parse().ok()
}
