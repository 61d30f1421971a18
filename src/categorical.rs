//! Categorical-variable summaries: frequency and percentage of group.
//!
//! [`summarize_categorical`] counts category values per subgroup and
//! pivots the long (feature, group, value, count, percent) rows into a
//! dense wide table. The pivot is an explicit two-pass build: first
//! enumerate the groups and each feature's value union, then fill the
//! grid, writing 0 for combinations absent from a subgroup.
//!
//! # Example
//!
//! ```
//! use tabsum::categorical::summarize_categorical;
//! use tabsum::dataframe::{Column, DataFrame};
//! use tabsum::group::GroupSpec;
//! use tabsum::table::Cell;
//!
//! let mut df = DataFrame::new();
//! df.add_column(
//!     "sex".into(),
//!     Column::Text(vec!["M".into(), "F".into(), "M".into(), "M".into()]),
//! )
//! .unwrap();
//!
//! let table =
//!     summarize_categorical(&df, &GroupSpec::None, Some(&["sex"]), "Data Summary").unwrap();
//! assert_eq!(table.cell("sex", Some("M"), "all", "COUNT"), Some(&Cell::Count(3)));
//! assert_eq!(table.cell("sex", Some("M"), "all", "PERCENT"), Some(&Cell::Percent(75.0)));
//! ```

use crate::classify::{classify, DEFAULT_CUTOFF};
use crate::dataframe::{DataFrame, Value, ValueKey};
use crate::error::SummaryError;
use crate::freq::value_counts;
use crate::group::{resolve_subgroups, GroupSpec, Subgroup};
use crate::table::{assemble_tall, Cell, FeatureBlock, ResultTable};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One long-format frequency row, prior to pivoting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotRow {
    /// Feature (column) name.
    pub feature: String,
    /// Group value this row was counted in ("all" when unstratified).
    pub group: String,
    /// Category value.
    pub value: Value,
    /// Occurrences of `value` within the (feature, group) block.
    pub count: usize,
    /// `100 * count / block total`, rounded to 2 decimals.
    pub percent: f64,
}

/// Computes the long-format frequency rows underlying a categorical
/// summary, ordered by feature (input order), then group (descending
/// size), then count descending.
///
/// Exposed for programmatic use; [`summarize_categorical`] pivots the
/// same rows into the wide table. When `columns` is `None`, the
/// categorical partition suggested by [`classify`] with
/// [`DEFAULT_CUTOFF`] is counted.
///
/// # Errors
///
/// [`SummaryError::ColumnNotFound`] if a requested or grouping column
/// is absent.
pub fn frequency_rows(
    df: &DataFrame,
    group: &GroupSpec,
    columns: Option<&[&str]>,
) -> Result<Vec<PivotRow>, SummaryError> {
    let (_, _, rows) = collect_rows(df, group, columns)?;
    Ok(rows)
}

/// Summarizes categorical columns, optionally stratified by `group`.
///
/// When `columns` is `None`, the categorical partition suggested by
/// [`classify`] with [`DEFAULT_CUTOFF`] is summarized; a grouping
/// column is used only for stratification either way.
///
/// Output columns are two-level (group value, COUNT then PERCENT),
/// groups ordered by descending size; rows are (feature, value) pairs,
/// features in input order and values ascending within each feature.
/// Combinations absent from a subgroup are filled with count 0 and
/// percent 0.0. Within every (feature, group) block the percents sum
/// to 100, barring rounding.
///
/// # Errors
///
/// [`SummaryError::ColumnNotFound`] if a requested or grouping column
/// is absent. No partial table is produced.
pub fn summarize_categorical(
    df: &DataFrame,
    group: &GroupSpec,
    columns: Option<&[&str]>,
    caption_prefix: &str,
) -> Result<ResultTable, SummaryError> {
    let (features, groups, rows) = collect_rows(df, group, columns)?;

    // Pass 2: dense grid per feature, 0-filled.
    let mut grid: HashMap<(usize, ValueKey), (usize, f64)> = HashMap::new();
    let group_index: HashMap<&str, usize> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| (g.as_str(), i))
        .collect();

    let blocks: Vec<FeatureBlock> = features
        .iter()
        .map(|feature| {
            grid.clear();
            let mut values: Vec<Value> = Vec::new();
            let mut seen: HashSet<ValueKey> = HashSet::new();
            for row in rows.iter().filter(|r| &r.feature == feature) {
                let gi = group_index[row.group.as_str()];
                grid.insert((gi, row.value.key()), (row.count, row.percent));
                if seen.insert(row.value.key()) {
                    values.push(row.value.clone());
                }
            }
            values.sort_by(|a, b| a.compare(b));

            let cells: Vec<Vec<Cell>> = values
                .iter()
                .map(|value| {
                    let key = value.key();
                    (0..groups.len())
                        .flat_map(|gi| {
                            let (count, percent) =
                                grid.get(&(gi, key.clone())).copied().unwrap_or((0, 0.0));
                            [Cell::Count(count), Cell::Percent(percent)]
                        })
                        .collect()
                })
                .collect();

            FeatureBlock {
                feature: feature.clone(),
                values: values.iter().map(Value::to_string).collect(),
                rows: cells,
            }
        })
        .collect();

    let caption = format!("{caption_prefix} by {}", group.name());
    Ok(assemble_tall(caption, &groups, blocks))
}

/// Pass 1: validates the request, resolves subgroups, and counts
/// (feature, group, value) frequencies.
fn collect_rows(
    df: &DataFrame,
    group: &GroupSpec,
    columns: Option<&[&str]>,
) -> Result<(Vec<String>, Vec<String>, Vec<PivotRow>), SummaryError> {
    let suggested: Vec<String>;
    let mut names: Vec<&str> = match columns {
        Some(cols) => cols.to_vec(),
        None => {
            suggested = classify(df, DEFAULT_CUTOFF).0;
            suggested.iter().map(String::as_str).collect()
        }
    };
    if let Some(gcol) = group.column() {
        if !names.contains(&gcol) {
            names.push(gcol);
        }
    }
    let work = df.select(&names)?;

    let subgroups: Vec<Subgroup> = resolve_subgroups(&work, group)?;
    let groups: Vec<String> = subgroups.iter().map(|s| s.value.clone()).collect();

    let mut features = Vec::new();
    let mut rows = Vec::new();
    for (feature, col) in work.iter() {
        if Some(feature) == group.column() {
            continue;
        }
        features.push(feature.to_string());
        for sub in &subgroups {
            let subcol = col.gather(&sub.indices);
            let counts = value_counts(&subcol);
            let total: usize = counts.iter().map(|(_, c)| c).sum();
            for (value, count) in counts {
                let percent = (count as f64 / total as f64 * 10_000.0).round() / 100.0;
                rows.push(PivotRow {
                    feature: feature.to_string(),
                    group: sub.value.clone(),
                    value,
                    count,
                    percent,
                });
            }
        }
    }
    Ok((features, groups, rows))
}
