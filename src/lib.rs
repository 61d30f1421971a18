//! # tabsum
//!
//! Descriptive summary tables for tabular data.
//!
//! tabsum turns an in-memory [`DataFrame`](dataframe::DataFrame) into
//! the summary tables a cohort description needs: mean/std, median/IQR,
//! and min-max for continuous variables; frequency and
//! percentage-of-group for categorical variables; both optionally
//! stratified by a grouping column. The output is a plain
//! [`ResultTable`](table::ResultTable) with two-level column headers; a
//! separate rendering collaborator styles it as HTML.
//!
//! ## Modules
//!
//! - [`dataframe`] — Column-major tabular data model (DataFrame, Column, Value)
//! - [`classify`] — Categorical vs. continuous classification by cardinality cutoff
//! - [`freq`] — Value frequency tables (descending count, stable ties)
//! - [`group`] — Stratification (`GroupSpec`: one implicit group or by column)
//! - [`stats`] — Mean, sample std, R-7 quantiles, min/max kernels
//! - [`continuous`] — Continuous summaries with selectable statistics
//! - [`categorical`] — Categorical summaries with a dense two-pass pivot
//! - [`table`] — Plain result table: keys, cells, assembly
//! - [`render`] — HTML styling with a closed theme set
//! - [`error`] — Error types
//!
//! ## Quick Start
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

pub mod categorical;
pub mod classify;
pub mod continuous;
pub mod dataframe;
pub mod error;
pub mod freq;
pub mod group;
pub mod render;
pub mod stats;
pub mod table;
