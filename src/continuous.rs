//! Continuous-variable summaries: mean/std, median/IQR, min-max.
//!
//! [`summarize_continuous`] computes per-subgroup aggregates for a set
//! of numeric columns and assembles them into a wide table whose outer
//! header is the subgroup label and whose inner header is the selected
//! statistic name.
//!
//! # Example
//!
//! ```
//! use tabsum::continuous::{summarize_continuous, ContinuousConfig};
//! use tabsum::dataframe::{Column, DataFrame};
//! use tabsum::group::GroupSpec;
//!
//! let mut df = DataFrame::new();
//! df.add_column("score".into(), Column::Numeric(vec![1.0, 2.0, 3.0, 4.0, 5.0]))
//!     .unwrap();
//!
//! let table = summarize_continuous(
//!     &df,
//!     &GroupSpec::None,
//!     Some(&["score"]),
//!     &ContinuousConfig::default(),
//!     "Data Summary",
//! )
//! .unwrap();
//!
//! assert_eq!(table.columns[0].group, "all (N = 5)");
//! assert_eq!(table.cells[0][0].to_string(), "3.0 (1.58)");
//! ```

use crate::classify::{classify, DEFAULT_CUTOFF};
use crate::dataframe::DataFrame;
use crate::error::SummaryError;
use crate::group::{resolve_subgroups, GroupSpec};
use crate::stats;
use crate::table::{assemble_wide, round2_str, Cell, ResultTable, StatBlock};

/// Which statistics appear in a continuous summary table.
///
/// Defaults match the common cohort-table convention: mean/std on,
/// median/IQR and min-max off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuousConfig {
    /// Emit a "Mean (std)" column per subgroup.
    pub include_mean: bool,
    /// Emit a "Median (IQR)" column per subgroup.
    pub include_median: bool,
    /// Emit a "Min-Max" column per subgroup.
    pub include_minmax: bool,
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        Self {
            include_mean: true,
            include_median: false,
            include_minmax: false,
        }
    }
}

impl ContinuousConfig {
    /// Config with every statistic enabled.
    pub fn all() -> Self {
        Self {
            include_mean: true,
            include_median: true,
            include_minmax: true,
        }
    }

    fn statistic_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        if self.include_mean {
            names.push("Mean (std)".to_string());
        }
        if self.include_median {
            names.push("Median (IQR)".to_string());
        }
        if self.include_minmax {
            names.push("Min-Max".to_string());
        }
        names
    }
}

/// Summarizes continuous columns, optionally stratified by `group`.
///
/// When `columns` is `None`, the continuous partition suggested by
/// [`classify`] with [`DEFAULT_CUTOFF`] is summarized. The requested
/// columns are deduplicated; the grouping column, if it also appears
/// in the request, is used only for stratification.
/// Subgroups come out in descending size order, labeled
/// `"<group>=<value> (N = <count>)"` (or `"all (N = <count>)"` when
/// unstratified). All statistics are computed on a working copy; the
/// caller's frame is never modified.
///
/// Numbers are rounded to 2 decimal places in the output strings. A
/// single-row subgroup has an undefined sample std, which formats as
/// "NaN" rather than failing.
///
/// # Errors
///
/// [`SummaryError::ColumnNotFound`] if a requested or grouping column
/// is absent; [`SummaryError::NonNumericColumn`] if a requested column
/// is not numeric. No partial table is produced.
pub fn summarize_continuous(
    df: &DataFrame,
    group: &GroupSpec,
    columns: Option<&[&str]>,
    config: &ContinuousConfig,
    caption_prefix: &str,
) -> Result<ResultTable, SummaryError> {
    // Working copy: requested columns plus the grouping column,
    // deduplicated and detached from the caller's frame.
    let suggested: Vec<String>;
    let mut names: Vec<&str> = match columns {
        Some(cols) => cols.to_vec(),
        None => {
            suggested = classify(df, DEFAULT_CUTOFF).1;
            suggested.iter().map(String::as_str).collect()
        }
    };
    if let Some(gcol) = group.column() {
        if !names.contains(&gcol) {
            names.push(gcol);
        }
    }
    let work = df.select(&names)?;

    // Role check up front so no partial table is ever assembled.
    let mut features: Vec<String> = Vec::new();
    let mut feature_values: Vec<&[f64]> = Vec::new();
    for (name, col) in work.iter() {
        if Some(name) == group.column() {
            continue;
        }
        let values = col
            .as_numeric()
            .ok_or_else(|| SummaryError::NonNumericColumn {
                column: name.to_string(),
            })?;
        features.push(name.to_string());
        feature_values.push(values);
    }

    let subgroups = resolve_subgroups(&work, group)?;
    let statistics = config.statistic_names();

    let blocks: Vec<StatBlock> = subgroups
        .iter()
        .map(|sub| {
            let rows = feature_values
                .iter()
                .map(|values| {
                    let sample: Vec<f64> = sub.indices.iter().map(|&i| values[i]).collect();
                    summary_cells(&sample, config)
                })
                .collect();
            StatBlock {
                label: sub.label.clone(),
                statistics: statistics.clone(),
                rows,
            }
        })
        .collect();

    let caption = format!("{caption_prefix} by {}", group.name());
    Ok(assemble_wide(caption, &features, &blocks))
}

fn summary_cells(sample: &[f64], config: &ContinuousConfig) -> Vec<Cell> {
    let fmt = |x: Option<f64>| round2_str(x.unwrap_or(f64::NAN));
    let mut cells = Vec::new();
    if config.include_mean {
        cells.push(Cell::Text(format!(
            "{} ({})",
            fmt(stats::mean(sample)),
            fmt(stats::std_dev(sample))
        )));
    }
    if config.include_median {
        cells.push(Cell::Text(format!(
            "{} ({}, {})",
            fmt(stats::quantile(sample, 0.5)),
            fmt(stats::quantile(sample, 0.25)),
            fmt(stats::quantile(sample, 0.75))
        )));
    }
    if config.include_minmax {
        cells.push(Cell::Text(format!(
            "({}, {})",
            fmt(stats::min(sample)),
            fmt(stats::max(sample))
        )));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataframe::Column;

    fn score_frame() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_column(
            "score".into(),
            Column::Numeric(vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        )
        .unwrap();
        df
    }

    fn cohort_frame() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_column(
            "age".into(),
            Column::Numeric(vec![30.0, 40.0, 50.0, 60.0]),
        )
        .unwrap();
        df.add_column(
            "bmi".into(),
            Column::Numeric(vec![20.0, 25.0, 30.0, 22.0]),
        )
        .unwrap();
        df.add_column(
            "disease".into(),
            Column::Text(vec!["yes".into(), "no".into(), "yes".into(), "yes".into()]),
        )
        .unwrap();
        df
    }

    #[test]
    fn unstratified_mean_and_std() {
        let table = summarize_continuous(
            &score_frame(),
            &GroupSpec::None,
            Some(&["score"]),
            &ContinuousConfig::default(),
            "Data Summary",
        )
        .unwrap();

        assert_eq!(table.caption, "Data Summary by all");
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.columns[0].group, "all (N = 5)");
        assert_eq!(table.columns[0].statistic, "Mean (std)");
        assert_eq!(table.rows[0].feature, "score");
        assert_eq!(table.cells[0][0], Cell::Text("3.0 (1.58)".into()));
    }

    #[test]
    fn median_iqr_and_minmax_columns() {
        let table = summarize_continuous(
            &score_frame(),
            &GroupSpec::None,
            Some(&["score"]),
            &ContinuousConfig::all(),
            "Data Summary",
        )
        .unwrap();

        let stats: Vec<&str> = table
            .columns
            .iter()
            .map(|k| k.statistic.as_str())
            .collect();
        assert_eq!(stats, vec!["Mean (std)", "Median (IQR)", "Min-Max"]);
        assert_eq!(table.cells[0][1], Cell::Text("3.0 (2.0, 4.0)".into()));
        assert_eq!(table.cells[0][2], Cell::Text("(1.0, 5.0)".into()));
    }

    #[test]
    fn stratified_subgroups_descending_with_labeled_headers() {
        let table = summarize_continuous(
            &cohort_frame(),
            &GroupSpec::by("disease"),
            Some(&["age", "bmi"]),
            &ContinuousConfig::default(),
            "Data Summary",
        )
        .unwrap();

        assert_eq!(table.caption, "Data Summary by disease");
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].group, "disease=yes (N = 3)");
        assert_eq!(table.columns[1].group, "disease=no (N = 1)");
        assert_eq!(table.rows.len(), 2);

        // yes subgroup: ages 30, 50, 60
        assert_eq!(table.cells[0][0], Cell::Text("46.67 (15.28)".into()));
    }

    #[test]
    fn single_row_subgroup_has_nan_std_and_equal_min_max() {
        let table = summarize_continuous(
            &cohort_frame(),
            &GroupSpec::by("disease"),
            Some(&["age"]),
            &ContinuousConfig::all(),
            "Data Summary",
        )
        .unwrap();

        // "no" subgroup is the single row with age 40
        let mean = table
            .cell("age", None, "disease=no (N = 1)", "Mean (std)")
            .unwrap();
        assert_eq!(*mean, Cell::Text("40.0 (NaN)".into()));
        let minmax = table
            .cell("age", None, "disease=no (N = 1)", "Min-Max")
            .unwrap();
        assert_eq!(*minmax, Cell::Text("(40.0, 40.0)".into()));
    }

    #[test]
    fn missing_column_fails_whole_call() {
        let err = summarize_continuous(
            &cohort_frame(),
            &GroupSpec::None,
            Some(&["age", "nope"]),
            &ContinuousConfig::default(),
            "Data Summary",
        )
        .unwrap_err();
        assert_eq!(
            err,
            SummaryError::ColumnNotFound {
                name: "nope".into()
            }
        );
    }

    #[test]
    fn missing_group_column_fails_whole_call() {
        let err = summarize_continuous(
            &cohort_frame(),
            &GroupSpec::by("nope"),
            Some(&["age"]),
            &ContinuousConfig::default(),
            "Data Summary",
        )
        .unwrap_err();
        assert!(matches!(err, SummaryError::ColumnNotFound { .. }));
    }

    #[test]
    fn non_numeric_column_is_reported_not_coerced() {
        let err = summarize_continuous(
            &cohort_frame(),
            &GroupSpec::None,
            Some(&["disease"]),
            &ContinuousConfig::default(),
            "Data Summary",
        )
        .unwrap_err();
        assert_eq!(
            err,
            SummaryError::NonNumericColumn {
                column: "disease".into()
            }
        );
    }

    #[test]
    fn group_column_in_feature_list_is_used_only_for_grouping() {
        let table = summarize_continuous(
            &cohort_frame(),
            &GroupSpec::by("disease"),
            Some(&["age", "disease", "age"]),
            &ContinuousConfig::default(),
            "Data Summary",
        )
        .unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].feature, "age");
    }

    #[test]
    fn summarization_is_idempotent_and_leaves_input_untouched() {
        let df = cohort_frame();
        let before = df.clone();
        let args = (GroupSpec::by("disease"), ContinuousConfig::all());
        let first =
            summarize_continuous(&df, &args.0, Some(&["age", "bmi"]), &args.1, "Data Summary").unwrap();
        let second =
            summarize_continuous(&df, &args.0, Some(&["age", "bmi"]), &args.1, "Data Summary").unwrap();
        assert_eq!(first, second);
        assert_eq!(df, before);
    }

    #[test]
    fn omitted_columns_fall_back_to_classifier_partition() {
        // "score" has 12 distinct values (continuous at the default
        // cutoff); "flag" has 2 (categorical) and must not appear.
        let mut df = DataFrame::new();
        df.add_column(
            "score".into(),
            Column::Numeric((0..12).map(f64::from).collect()),
        )
        .unwrap();
        let flags: Vec<String> = (0..12)
            .map(|i| String::from(if i % 2 == 0 { "a" } else { "b" }))
            .collect();
        df.add_column("flag".into(), Column::Text(flags)).unwrap();

        let table = summarize_continuous(
            &df,
            &GroupSpec::None,
            None,
            &ContinuousConfig::default(),
            "Data Summary",
        )
        .unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].feature, "score");
    }

    #[test]
    fn omitted_columns_with_stratification() {
        let mut df = DataFrame::new();
        df.add_column(
            "score".into(),
            Column::Numeric((0..12).map(f64::from).collect()),
        )
        .unwrap();
        let flags: Vec<String> = (0..12)
            .map(|i| String::from(if i < 8 { "a" } else { "b" }))
            .collect();
        df.add_column("flag".into(), Column::Text(flags)).unwrap();

        let table = summarize_continuous(
            &df,
            &GroupSpec::by("flag"),
            None,
            &ContinuousConfig::default(),
            "Data Summary",
        )
        .unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.columns[0].group, "flag=a (N = 8)");
        assert_eq!(table.columns[1].group, "flag=b (N = 4)");
    }
}
