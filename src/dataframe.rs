//! Column-major DataFrame for tabular data.
//!
//! The [`DataFrame`] stores named, typed columns aligned by row
//! position. Two column types cover the summarization domain:
//! [`Numeric`](Column::Numeric) columns feed continuous statistics,
//! [`Text`](Column::Text) columns feed frequency tables. Adding a
//! column under an already-used name keeps the first occurrence and
//! drops the new one.
//!
//! # Example
//!
//! ```
//! use tabsum::dataframe::{Column, DataFrame};
//!
//! let mut df = DataFrame::new();
//! df.add_column("score".to_string(), Column::Numeric(vec![1.0, 2.0, 3.0]))
//!     .unwrap();
//! df.add_column(
//!     "label".to_string(),
//!     Column::Text(vec!["a".into(), "b".into(), "a".into()]),
//! )
//! .unwrap();
//! assert_eq!(df.row_count(), 3);
//! assert_eq!(df.column_count(), 2);
//! ```

use crate::error::SummaryError;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

// ── Value ─────────────────────────────────────────────────────────────

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// Numeric cell.
    Num(f64),
    /// Categorical / text cell.
    Str(String),
}

/// Hashable identity of a cell value.
///
/// Numeric identity is bit-exact so that repeated grouping passes see
/// the same distinct values (including a NaN group, should one occur).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Bits(u64),
    Str(String),
}

impl Value {
    /// Returns the numeric value, or `None` for text cells.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(x) => Some(*x),
            Self::Str(_) => None,
        }
    }

    /// Returns the string value, or `None` for numeric cells.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Num(_) => None,
            Self::Str(s) => Some(s),
        }
    }

    /// Total order used when sorting category values ascending.
    ///
    /// Numbers compare numerically (NaN sorts last), strings
    /// lexicographically; numbers sort before strings.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Self::Num(a), Self::Num(b)) => {
                a.partial_cmp(b).unwrap_or_else(|| match (a.is_nan(), b.is_nan()) {
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    _ => Ordering::Equal,
                })
            }
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Num(_), Self::Str(_)) => Ordering::Less,
            (Self::Str(_), Self::Num(_)) => Ordering::Greater,
        }
    }

    pub(crate) fn key(&self) -> ValueKey {
        match self {
            Self::Num(x) => ValueKey::Bits(x.to_bits()),
            Self::Str(s) => ValueKey::Str(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

// ── Column ────────────────────────────────────────────────────────────

/// A typed column of uniform scalar values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Column {
    /// Dense `f64` values.
    Numeric(Vec<f64>),
    /// String values (categorical or free-form).
    Text(Vec<String>),
}

impl Column {
    /// Returns the number of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cell at `idx` as a [`Value`].
    pub fn value(&self, idx: usize) -> Value {
        match self {
            Self::Numeric(v) => Value::Num(v[idx]),
            Self::Text(v) => Value::Str(v[idx].clone()),
        }
    }

    /// Returns the numeric values, or `None` if not a numeric column.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    /// Counts distinct values.
    ///
    /// Numeric distinctness is bit-exact (`f64::to_bits`), matching the
    /// identity used by grouping.
    pub fn distinct_count(&self) -> usize {
        match self {
            Self::Numeric(v) => {
                let bits: HashSet<u64> = v.iter().map(|x| x.to_bits()).collect();
                bits.len()
            }
            Self::Text(v) => {
                let distinct: HashSet<&str> = v.iter().map(String::as_str).collect();
                distinct.len()
            }
        }
    }

    /// Returns the row indices whose cell equals `value`.
    ///
    /// A type mismatch between column and value yields no matches.
    pub fn positions_of(&self, value: &Value) -> Vec<usize> {
        match (self, value) {
            (Self::Numeric(v), Value::Num(x)) => {
                let bits = x.to_bits();
                v.iter()
                    .enumerate()
                    .filter(|(_, y)| y.to_bits() == bits)
                    .map(|(i, _)| i)
                    .collect()
            }
            (Self::Text(v), Value::Str(s)) => v
                .iter()
                .enumerate()
                .filter(|(_, t)| *t == s)
                .map(|(i, _)| i)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Gathers the rows at `indices` into a new column, in order.
    pub fn gather(&self, indices: &[usize]) -> Column {
        match self {
            Self::Numeric(v) => Self::Numeric(indices.iter().map(|&i| v[i]).collect()),
            Self::Text(v) => Self::Text(indices.iter().map(|&i| v[i].clone()).collect()),
        }
    }
}

// ── DataFrame ─────────────────────────────────────────────────────────

/// Column-major tabular data structure.
///
/// All columns have the same number of rows. Column order is the
/// insertion order and is preserved by every operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataFrame {
    names: Vec<String>,
    columns: Vec<Column>,
    row_count: usize,
}

impl DataFrame {
    /// Creates an empty DataFrame with no columns or rows.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            columns: Vec::new(),
            row_count: 0,
        }
    }

    /// Adds a named column.
    ///
    /// A duplicate name is dropped silently, keeping the first
    /// occurrence. Returns [`SummaryError::DimensionMismatch`] if the
    /// column length conflicts with the existing row count.
    pub fn add_column(&mut self, name: String, column: Column) -> Result<(), SummaryError> {
        if self.names.contains(&name) {
            return Ok(());
        }
        let col_len = column.len();
        if self.columns.is_empty() {
            self.row_count = col_len;
        } else if col_len != self.row_count {
            return Err(SummaryError::DimensionMismatch {
                expected: self.row_count,
                actual: col_len,
            });
        }
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Returns the number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the DataFrame has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns column names in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Returns a reference to the column with the given `name`.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|i| &self.columns[i])
    }

    /// Returns the index of the column with the given `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Returns an iterator over (name, column) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    /// Projects the named columns into a new frame.
    ///
    /// Repeated names are deduplicated, keeping the first occurrence.
    /// The result is an owned working copy: summarizers operate on it
    /// and never touch the caller's frame.
    pub fn select(&self, names: &[&str]) -> Result<DataFrame, SummaryError> {
        let mut out = DataFrame::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for &name in names {
            if !seen.insert(name) {
                continue;
            }
            let col = self
                .column_by_name(name)
                .ok_or_else(|| SummaryError::ColumnNotFound {
                    name: name.to_string(),
                })?;
            out.add_column(name.to_string(), col.clone())?;
        }
        Ok(out)
    }
}

impl Default for DataFrame {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────
