//! Outer join of the source tables on the keyword key

use crate::domain::{KeywordRow, KeywordTable};
use std::collections::BTreeMap;

/// Outer-join `right` onto `left`.
///
/// Every key from either side appears once in the result, ordered by key.
/// Where both sides populate a field, `right` wins; nothing is aggregated.
pub fn outer_join(left: KeywordTable, right: KeywordTable) -> KeywordTable {
    let mut by_key: BTreeMap<String, KeywordRow> = BTreeMap::new();
    for row in left.rows.into_iter().chain(right.rows) {
        match by_key.get_mut(&row.keyword) {
            Some(existing) => existing.overlay(&row),
            None => {
                by_key.insert(row.keyword.clone(), row);
            }
        }
    }
    KeywordTable::new(by_key.into_values().collect())
}

/// Join search console, keyword planner and manual keywords, in that order.
///
/// Derived fields are cleared so the scorer always recomputes them.
pub fn merge_sources(
    search_console: KeywordTable,
    keyword_planner: KeywordTable,
    manual: KeywordTable,
) -> KeywordTable {
    let mut merged = outer_join(outer_join(search_console, keyword_planner), manual);
    for row in &mut merged.rows {
        row.quality = None;
        row.potential = None;
    }
    tracing::info!("Merged {} unique keywords", merged.len());
    merged
}
