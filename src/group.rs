//! Stratification over a grouping column.
//!
//! [`GroupSpec`] makes "no stratification" an explicit case instead of
//! a sentinel placeholder column: either every row belongs to one
//! implicit "all" group, or rows are partitioned by the distinct values
//! of a named column.

use crate::dataframe::DataFrame;
use crate::error::SummaryError;
use crate::freq::value_counts;

/// Stratification choice for a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSpec {
    /// No grouping column: all rows form one implicit "all" group.
    None,
    /// Partition rows by the distinct values of the named column.
    ByColumn(String),
}

impl GroupSpec {
    /// Convenience constructor for [`GroupSpec::ByColumn`].
    pub fn by(name: impl Into<String>) -> Self {
        Self::ByColumn(name.into())
    }

    /// The name used in captions: the grouping column, or "all".
    pub fn name(&self) -> &str {
        match self {
            Self::None => "all",
            Self::ByColumn(name) => name,
        }
    }

    /// The grouping column name, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::ByColumn(name) => Some(name),
        }
    }
}

/// One resolved subgroup of the working frame.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Subgroup {
    /// Display form of the group value ("all" when unstratified).
    pub value: String,
    /// Header label embedding the subgroup size for traceability,
    /// e.g. "sex=M (N = 3)" or "all (N = 5)".
    pub label: String,
    /// Row indices belonging to this subgroup.
    pub indices: Vec<usize>,
}

/// Enumerates subgroups of `df` under `group`.
///
/// Stratified subgroups come back in descending size order (the
/// [`value_counts`] order of the grouping column); unstratified frames
/// yield a single subgroup covering every row. Zero-row subgroups
/// cannot arise: only observed group values are enumerated.
pub(crate) fn resolve_subgroups(
    df: &DataFrame,
    group: &GroupSpec,
) -> Result<Vec<Subgroup>, SummaryError> {
    match group {
        GroupSpec::None => Ok(vec![Subgroup {
            value: "all".to_string(),
            label: format!("all (N = {})", df.row_count()),
            indices: (0..df.row_count()).collect(),
        }]),
        GroupSpec::ByColumn(name) => {
            let col = df
                .column_by_name(name)
                .ok_or_else(|| SummaryError::ColumnNotFound { name: name.clone() })?;
            Ok(value_counts(col)
                .into_iter()
                .map(|(value, count)| Subgroup {
                    value: value.to_string(),
                    label: format!("{name}={value} (N = {count})"),
                    indices: col.positions_of(&value),
                })
                .collect())
        }
    }
}
