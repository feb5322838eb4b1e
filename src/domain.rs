//! Core types: configuration, keyword rows and the merged table

use crate::error::{KeywordError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Runtime configuration for a pipeline run.
///
/// File names are resolved against `working_dir`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub working_dir: PathBuf,
    pub search_console_file: String,
    pub manual_keywords_file: String,
    pub keyword_planner_glob: String,
    pub keyword_planner_encoding: String,
    pub output_file: String,
    pub rank_tracking_output_file: String,
    pub site: String,
    pub search_engine: String,
    pub language: String,
    pub cutoff: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            search_console_file: "search_console.csv".to_string(),
            manual_keywords_file: "manual_keywords.csv".to_string(),
            keyword_planner_glob: "Keyword Planner*".to_string(),
            keyword_planner_encoding: "utf-16".to_string(),
            output_file: "keyword_research.csv".to_string(),
            rank_tracking_output_file: "rankfalcon_csv_import.csv".to_string(),
            site: "http://www.rankfalcon.com".to_string(),
            search_engine: "google.com".to_string(),
            language: "English".to_string(),
            cutoff: 250,
        }
    }
}

impl Config {
    pub fn search_console_path(&self) -> PathBuf {
        self.working_dir.join(&self.search_console_file)
    }

    pub fn manual_keywords_path(&self) -> PathBuf {
        self.working_dir.join(&self.manual_keywords_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.working_dir.join(&self.output_file)
    }

    pub fn rank_tracking_output_path(&self) -> PathBuf {
        self.working_dir.join(&self.rank_tracking_output_file)
    }
}

/// Named columns of the merged table, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    SearchVolume,
    Cpc,
    Competition,
    Impressions,
    Clicks,
    Ctr,
    Position,
    Quality,
    Potential,
}

impl Column {
    /// Columns carried over from the sources.
    pub const BASE: [Column; 7] = [
        Column::SearchVolume,
        Column::Cpc,
        Column::Competition,
        Column::Impressions,
        Column::Clicks,
        Column::Ctr,
        Column::Position,
    ];

    /// Every column of the merged output, after the keyword.
    pub const ALL: [Column; 9] = [
        Column::SearchVolume,
        Column::Cpc,
        Column::Competition,
        Column::Impressions,
        Column::Clicks,
        Column::Ctr,
        Column::Position,
        Column::Quality,
        Column::Potential,
    ];

    pub const fn header(self) -> &'static str {
        match self {
            Column::SearchVolume => "search volume",
            Column::Cpc => "CPC",
            Column::Competition => "competition",
            Column::Impressions => "impressions",
            Column::Clicks => "clicks",
            Column::Ctr => "CTR",
            Column::Position => "position",
            Column::Quality => "quality",
            Column::Potential => "potential",
        }
    }

    /// Case-insensitive lookup by header name.
    pub fn from_header(name: &str) -> Option<Column> {
        let name = name.trim();
        Self::ALL.into_iter().find(|c| c.header().eq_ignore_ascii_case(name))
    }
}

/// One keyword and whatever metrics the sources supplied for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordRow {
    pub keyword: String,
    pub search_volume: Option<String>,
    pub cpc: Option<f64>,
    pub competition: Option<f64>,
    pub impressions: Option<u64>,
    pub clicks: Option<u64>,
    pub ctr: Option<String>,
    pub position: Option<f64>,
    pub quality: Option<f64>,
    pub potential: Option<f64>,
}

impl KeywordRow {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), ..Self::default() }
    }

    /// Parse `raw` into the field for `column`. Blank cells clear the field.
    pub fn set_cell(&mut self, column: Column, raw: &str) -> Result<()> {
        let value = raw.trim();
        match column {
            Column::SearchVolume => self.search_volume = non_empty(value),
            Column::Ctr => self.ctr = non_empty(value),
            Column::Cpc => self.cpc = parse_float(column, &self.keyword, value)?,
            Column::Competition => self.competition = parse_float(column, &self.keyword, value)?,
            Column::Position => self.position = parse_float(column, &self.keyword, value)?,
            Column::Quality => self.quality = parse_float(column, &self.keyword, value)?,
            Column::Potential => self.potential = parse_float(column, &self.keyword, value)?,
            Column::Impressions => self.impressions = parse_count(column, &self.keyword, value)?,
            Column::Clicks => self.clicks = parse_count(column, &self.keyword, value)?,
        }
        Ok(())
    }

    /// Render the field for `column` as a CSV cell; `None` renders empty.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::SearchVolume => self.search_volume.clone().unwrap_or_default(),
            Column::Ctr => self.ctr.clone().unwrap_or_default(),
            Column::Cpc => format_float(self.cpc),
            Column::Competition => format_float(self.competition),
            Column::Position => format_float(self.position),
            Column::Quality => format_float(self.quality),
            Column::Potential => format_float(self.potential),
            Column::Impressions => self.impressions.map(|v| v.to_string()).unwrap_or_default(),
            Column::Clicks => self.clicks.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    /// Copy every populated source field of `other` over this row.
    pub fn overlay(&mut self, other: &KeywordRow) {
        if other.search_volume.is_some() {
            self.search_volume.clone_from(&other.search_volume);
        }
        if other.ctr.is_some() {
            self.ctr.clone_from(&other.ctr);
        }
        self.cpc = other.cpc.or(self.cpc);
        self.competition = other.competition.or(self.competition);
        self.impressions = other.impressions.or(self.impressions);
        self.clicks = other.clicks.or(self.clicks);
        self.position = other.position.or(self.position);
    }
}

/// An ordered set of keyword rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordTable {
    pub rows: Vec<KeywordRow>,
}

impl KeywordTable {
    pub fn new(rows: Vec<KeywordRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Collapse rows sharing a keyword, keeping the last occurrence.
    /// The result is ordered by keyword.
    pub fn keep_last(rows: impl IntoIterator<Item = KeywordRow>) -> Self {
        let mut by_key: BTreeMap<String, KeywordRow> = BTreeMap::new();
        for row in rows {
            by_key.insert(row.keyword.clone(), row);
        }
        Self { rows: by_key.into_values().collect() }
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordRow> {
        self.rows.iter().find(|r| r.keyword == keyword)
    }
}

/// Normalize keyword text into a join key: trimmed, single-spaced, lowercase.
pub fn normalize_keyword(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Shortest representation that parses back to the same value.
pub fn format_float(value: Option<f64>) -> String {
    value.map(|v| format!("{v:?}")).unwrap_or_default()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_float(column: Column, keyword: &str, value: &str) -> Result<Option<f64>> {
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<f64>().map(Some).map_err(|_| invalid_number(column, keyword, value))
}

// Counts may have been written as floats by a spreadsheet ("100.0").
fn parse_count(column: Column, keyword: &str, value: &str) -> Result<Option<u64>> {
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(n) = value.parse::<u64>() {
        return Ok(Some(n));
    }
    match value.parse::<f64>() {
        Ok(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(Some(f as u64)),
        _ => Err(invalid_number(column, keyword, value)),
    }
}

fn invalid_number(column: Column, keyword: &str, value: &str) -> KeywordError {
    KeywordError::InvalidNumber {
        column: column.header().to_string(),
        keyword: keyword.to_string(),
        value: value.to_string(),
    }
}
