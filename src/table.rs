//! Result table structure and assembly.
//!
//! A [`ResultTable`] is the plain structured output of both
//! summarizers: two-level column keys (group label, statistic name),
//! row keys (feature, optional value), and a row-major grid of typed
//! [`Cell`]s. It carries no styling; rendering is a separate
//! collaborator (see [`crate::render`]).

use serde::Serialize;
use std::fmt;

// ── Keys and cells ────────────────────────────────────────────────────

/// Two-level column key: outer group label, inner statistic name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnKey {
    /// Outer header level: subgroup label or group value.
    pub group: String,
    /// Inner header level: statistic name, e.g. "Mean (std)" or "COUNT".
    pub statistic: String,
}

/// Row key: feature name plus, for categorical tables, the category
/// value the row describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowKey {
    /// Original feature (column) name.
    pub feature: String,
    /// Category value for categorical rows; `None` for continuous rows.
    pub value: Option<String>,
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Cell {
    /// Pre-formatted statistic string, e.g. "3.0 (1.58)".
    Text(String),
    /// Frequency count.
    Count(usize),
    /// Percentage of the (feature, group) block, rounded to 2 decimals.
    Percent(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Count(c) => write!(f, "{c}"),
            Self::Percent(p) => write!(f, "{}", round2_str(*p)),
        }
    }
}

/// Formats a number rounded to 2 decimal places with minimal display:
/// "3.0", "2.5", "1.58". NaN formats as "NaN" instead of raising.
pub(crate) fn round2_str(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    // Round by formatting, then drop a trailing zero in the hundredths
    // place; one decimal always remains.
    let s = format!("{x:.2}");
    match s.strip_suffix('0') {
        Some(trimmed) if !trimmed.ends_with('.') => trimmed.to_string(),
        _ => s,
    }
}

// ── ResultTable ───────────────────────────────────────────────────────

/// Assembled summary table.
///
/// `cells` is row-major and rectangular: `cells[r][c]` belongs to
/// `rows[r]` and `columns[c]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    /// Caption, e.g. "Data Summary by sex". Passed through to the
    /// renderer, never interpreted.
    pub caption: String,
    /// Column keys, outer level first.
    pub columns: Vec<ColumnKey>,
    /// Row keys in presentation order.
    pub rows: Vec<RowKey>,
    /// Row-major cell grid.
    pub cells: Vec<Vec<Cell>>,
}

impl ResultTable {
    /// Returns the position of the (group, statistic) column, if present.
    pub fn column_position(&self, group: &str, statistic: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|k| k.group == group && k.statistic == statistic)
    }

    /// Returns the position of the (feature, value) row, if present.
    pub fn row_position(&self, feature: &str, value: Option<&str>) -> Option<usize> {
        self.rows
            .iter()
            .position(|k| k.feature == feature && k.value.as_deref() == value)
    }

    /// Returns the cell at the named row and column, if present.
    pub fn cell(&self, feature: &str, value: Option<&str>, group: &str, statistic: &str) -> Option<&Cell> {
        let r = self.row_position(feature, value)?;
        let c = self.column_position(group, statistic)?;
        self.cells.get(r)?.get(c)
    }
}

// ── Assembly ──────────────────────────────────────────────────────────

/// Per-subgroup block of formatted continuous statistics, one row per
/// feature, aligned with the feature list passed to [`assemble_wide`].
#[derive(Debug, Clone)]
pub(crate) struct StatBlock {
    pub label: String,
    pub statistics: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Joins per-subgroup stat blocks side by side under subgroup labels.
///
/// Output columns iterate subgroups in the given order, statistics
/// within each subgroup; rows are the features in input order.
pub(crate) fn assemble_wide(
    caption: String,
    features: &[String],
    blocks: &[StatBlock],
) -> ResultTable {
    let mut columns = Vec::new();
    for block in blocks {
        for stat in &block.statistics {
            columns.push(ColumnKey {
                group: block.label.clone(),
                statistic: stat.clone(),
            });
        }
    }
    let rows: Vec<RowKey> = features
        .iter()
        .map(|f| RowKey {
            feature: f.clone(),
            value: None,
        })
        .collect();
    let cells: Vec<Vec<Cell>> = (0..features.len())
        .map(|fi| {
            blocks
                .iter()
                .flat_map(|b| b.rows[fi].iter().cloned())
                .collect()
        })
        .collect();
    ResultTable {
        caption,
        columns,
        rows,
        cells,
    }
}

/// Dense per-feature block of categorical counts and percents, one row
/// per category value, columns aligned with the group order passed to
/// [`assemble_tall`].
#[derive(Debug, Clone)]
pub(crate) struct FeatureBlock {
    pub feature: String,
    pub values: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Stacks per-feature blocks vertically under (group, COUNT/PERCENT)
/// columns, resetting row keys to plain (feature, value) pairs.
pub(crate) fn assemble_tall(
    caption: String,
    groups: &[String],
    blocks: Vec<FeatureBlock>,
) -> ResultTable {
    let mut columns = Vec::new();
    for group in groups {
        for stat in ["COUNT", "PERCENT"] {
            columns.push(ColumnKey {
                group: group.clone(),
                statistic: stat.to_string(),
            });
        }
    }
    let mut rows = Vec::new();
    let mut cells = Vec::new();
    for block in blocks {
        for (value, row) in block.values.into_iter().zip(block.rows) {
            rows.push(RowKey {
                feature: block.feature.clone(),
                value: Some(value),
            });
            cells.push(row);
        }
    }
    ResultTable {
        caption,
        columns,
        rows,
        cells,
    }
}
