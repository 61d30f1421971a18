//! Categorical versus continuous column classification.
//!
//! A column with at most [`DEFAULT_CUTOFF`] distinct values is treated
//! as categorical, anything above as continuous. The cutoff matters for
//! numeric columns that are really codes (a 0/1 flag, a 1-to-5 rating):
//! cardinality, not storage type, decides how a column is summarized.
//!
//! # Example
//!
//! ```
//! use tabsum::classify::classify;
//! use tabsum::dataframe::{Column, DataFrame};
//!
//! let mut df = DataFrame::new();
//! df.add_column("rating".into(), Column::Numeric(vec![1.0, 2.0, 2.0, 1.0])).unwrap();
//! df.add_column("score".into(), Column::Numeric(vec![0.1, 0.4, 0.7, 0.9])).unwrap();
//!
//! let (categorical, continuous) = classify(&df, 2);
//! assert_eq!(categorical, vec!["rating".to_string()]);
//! assert_eq!(continuous, vec!["score".to_string()]);
//! ```

use crate::dataframe::DataFrame;

/// Default distinct-value cutoff separating categorical from continuous.
pub const DEFAULT_CUTOFF: usize = 10;

/// Partitions the frame's columns into (categorical, continuous) name
/// lists by distinct-value count.
///
/// A column is categorical iff its distinct count is at most `cutoff`.
/// Both lists preserve the frame's column order; their union is exactly
/// the frame's column set. Pure: the frame is not modified, and an
/// empty frame yields two empty lists.
pub fn classify(df: &DataFrame, cutoff: usize) -> (Vec<String>, Vec<String>) {
    let mut categorical = Vec::new();
    let mut continuous = Vec::new();
    for (name, col) in df.iter() {
        if col.distinct_count() <= cutoff {
            categorical.push(name.to_string());
        } else {
            continuous.push(name.to_string());
        }
    }
    (categorical, continuous)
}
