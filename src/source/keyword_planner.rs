//! Keyword planner export loader
//!
//! Planner exports are UTF-16, tab-delimited files. A working directory may
//! hold several of them (one per research session); they are concatenated.

use super::read_delimited;
use crate::domain::{normalize_keyword, Column, KeywordRow, KeywordTable};
use crate::error::{KeywordError, Result};
use globset::Glob;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const KEYWORD: &str = "Keyword";
const VOLUME: &str = "Avg. Monthly Searches (exact match only)";
const COMPETITION: &str = "Competition";
const BID: &str = "Suggested bid";

/// An en dash decoded as Windows-1252 instead of UTF-8.
const MOJIBAKE_EN_DASH: &str = "\u{e2}\u{20ac}\u{201c}";

/// Load and concatenate every planner export in `dir` whose file name matches `pattern`.
pub fn load_keyword_planner(dir: &Path, pattern: &str, encoding: &str) -> Result<KeywordTable> {
    let files = discover_planner_files(dir, pattern)?;
    if files.is_empty() {
        return Err(KeywordError::NoPlannerFiles {
            pattern: pattern.to_string(),
            dir: dir.to_path_buf(),
        });
    }

    let mut rows: Vec<KeywordRow> = Vec::new();
    for file in &files {
        let loaded = load_planner_file(file, encoding)?;
        tracing::debug!("Loaded {} planner rows from {}", loaded.len(), file.display());
        rows.extend(loaded);
    }

    let total = rows.len();
    let mut seen: HashSet<RowKey> = HashSet::with_capacity(total);
    let unique: Vec<KeywordRow> = rows.into_iter().filter(|row| seen.insert(row_key(row))).collect();
    if unique.len() < total {
        tracing::debug!("Dropped {} duplicate planner rows", total - unique.len());
    }

    let table = KeywordTable::keep_last(unique);
    tracing::info!(
        "Loaded {} keyword planner keywords from {} file(s)",
        table.len(),
        files.len()
    );
    Ok(table)
}

/// Regular files directly inside `dir` whose name matches `pattern`, sorted by name.
pub fn discover_planner_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Glob::new(pattern)?.compile_matcher();

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if matcher.is_match(Path::new(&entry.file_name())) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn load_planner_file(path: &Path, encoding: &str) -> Result<Vec<KeywordRow>> {
    let raw = read_delimited(path, encoding, b'\t')?;
    let keyword_idx = raw.column(KEYWORD)?;
    let fields = [
        (raw.column(VOLUME)?, Column::SearchVolume),
        (raw.column(COMPETITION)?, Column::Competition),
        (raw.column(BID)?, Column::Cpc),
    ];

    let mut rows = Vec::with_capacity(raw.records.len());
    for record in &raw.records {
        let keyword = normalize_keyword(record.get(keyword_idx).unwrap_or_default());
        if keyword.is_empty() {
            continue;
        }
        let mut row = KeywordRow::new(keyword);
        for (idx, column) in fields {
            let value = record.get(idx).unwrap_or_default();
            if column == Column::SearchVolume {
                row.set_cell(column, &normalize_dash(value))?;
            } else {
                row.set_cell(column, value)?;
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Identity of a planner row: keyword plus every planner field, floats by bit pattern.
type RowKey = (String, Option<String>, Option<u64>, Option<u64>);

fn row_key(row: &KeywordRow) -> RowKey {
    (
        row.keyword.clone(),
        row.search_volume.clone(),
        row.competition.map(f64::to_bits),
        row.cpc.map(f64::to_bits),
    )
}

fn normalize_dash(value: &str) -> String {
    value.replace(MOJIBAKE_EN_DASH, "-").replace('\u{2013}', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::encoding::utf16le_with_bom;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str =
        "Keyword\tCurrency\tAvg. Monthly Searches (exact match only)\tCompetition\tSuggested bid\n";

    fn write_planner(dir: &Path, name: &str, body: &str) {
        let text = format!("{HEADER}{body}");
        fs::write(dir.join(name), utf16le_with_bom(&text)).expect("write planner");
    }

    #[test]
    fn test_load_selects_and_renames_columns() {
        let tmp = TempDir::new().expect("tmp");
        write_planner(tmp.path(), "Keyword Planner 2016-09-17.csv", "running shoes\tEUR\t1K – 10K\t0.3\t1.5\n");

        let table = load_keyword_planner(tmp.path(), "Keyword Planner*", "utf-16").expect("load");
        let row = table.get("running shoes").expect("row");
        assert_eq!(row.search_volume.as_deref(), Some("1K - 10K"));
        assert_eq!(row.competition, Some(0.3));
        assert_eq!(row.cpc, Some(1.5));
        assert_eq!(row.impressions, None);
    }

    #[test]
    fn test_mojibake_dash_is_normalized() {
        assert_eq!(normalize_dash("100 \u{e2}\u{20ac}\u{201c} 1K"), "100 - 1K");
        assert_eq!(normalize_dash("10K \u{2013} 100K"), "10K - 100K");
        assert_eq!(normalize_dash("1M - 10M"), "1M - 10M");
    }

    #[test]
    fn test_concatenates_files_and_ignores_other_names() {
        let tmp = TempDir::new().expect("tmp");
        write_planner(tmp.path(), "Keyword Planner a.csv", "shoes\tEUR\t10 - 100\t0.5\t0.2\n");
        write_planner(
            tmp.path(),
            "Keyword Planner b.csv",
            "shoes\tEUR\t10 - 100\t0.5\t0.2\nboots\tEUR\t1 - 10\t0.1\t0.4\n",
        );
        write_planner(tmp.path(), "other export.csv", "hats\tEUR\t1 - 10\t0.1\t0.4\n");

        let table = load_keyword_planner(tmp.path(), "Keyword Planner*", "utf-16").expect("load");
        assert_eq!(table.len(), 2);
        assert!(table.get("hats").is_none());
    }

    #[test]
    fn test_identical_rows_collapse_but_distinct_keywords_survive() {
        let tmp = TempDir::new().expect("tmp");
        write_planner(
            tmp.path(),
            "Keyword Planner a.csv",
            "shoes\tEUR\t10 - 100\t0.5\t0.2\nshoes\tEUR\t10 - 100\t0.5\t0.2\nboots\tEUR\t10 - 100\t0.5\t0.2\n",
        );

        let table = load_keyword_planner(tmp.path(), "Keyword Planner*", "utf-16").expect("load");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("boots").unwrap().cpc, Some(0.2));
        assert_eq!(table.get("shoes").unwrap().competition, Some(0.5));
    }

    #[test]
    fn test_later_file_wins_for_same_keyword() {
        let tmp = TempDir::new().expect("tmp");
        write_planner(tmp.path(), "Keyword Planner 1.csv", "shoes\tEUR\t10 - 100\t0.5\t0.2\n");
        write_planner(tmp.path(), "Keyword Planner 2.csv", "shoes\tEUR\t100 - 1K\t0.7\t0.9\n");

        let table = load_keyword_planner(tmp.path(), "Keyword Planner*", "utf-16").expect("load");
        let row = table.get("shoes").expect("row");
        assert_eq!(row.search_volume.as_deref(), Some("100 - 1K"));
        assert_eq!(row.cpc, Some(0.9));
    }

    #[test]
    fn test_no_matching_files_is_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = load_keyword_planner(tmp.path(), "Keyword Planner*", "utf-16").unwrap_err();
        assert!(matches!(err, KeywordError::NoPlannerFiles { .. }));
    }

    #[test]
    fn test_missing_column_is_error() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("Keyword Planner x.csv"),
            utf16le_with_bom("Keyword\tCompetition\nshoes\t0.3\n"),
        )
        .expect("write");

        let err = load_keyword_planner(tmp.path(), "Keyword Planner*", "utf-16").unwrap_err();
        match err {
            KeywordError::MissingColumn { column, .. } => assert_eq!(column, VOLUME),
            other => panic!("unexpected error: {other}"),
        }
    }
}
