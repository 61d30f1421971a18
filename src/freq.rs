//! Frequency tables over single columns.
//!
//! [`value_counts`] is the one grouping primitive in the crate: column
//! classification, categorical summaries, and subgroup enumeration all
//! go through it.
//!
//! # Example
//!
//! ```
//! use tabsum::dataframe::{Column, Value};
//! use tabsum::freq::value_counts;
//!
//! let col = Column::Text(vec!["M".into(), "F".into(), "M".into(), "M".into()]);
//! let counts = value_counts(&col);
//! assert_eq!(counts[0], (Value::Str("M".into()), 3));
//! assert_eq!(counts[1], (Value::Str("F".into()), 1));
//! ```

use crate::dataframe::{Column, Value, ValueKey};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Computes the value-to-count distribution of a column.
///
/// Entries are ordered by descending count; ties keep first-appearance
/// order (the sort is stable over insertion order). The counts always
/// sum to the column's row count. A constant column degenerates to a
/// single entry, which is how an unstratified summary collapses to one
/// implicit group.
pub fn value_counts(column: &Column) -> Vec<(Value, usize)> {
    let mut entries: Vec<(Value, usize)> = Vec::new();
    let mut slot: HashMap<ValueKey, usize> = HashMap::new();
    for idx in 0..column.len() {
        let value = column.value(idx);
        match slot.entry(value.key()) {
            Entry::Occupied(e) => entries[*e.get()].1 += 1,
            Entry::Vacant(e) => {
                e.insert(entries.len());
                entries.push((value, 1));
            }
        }
    }
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}
