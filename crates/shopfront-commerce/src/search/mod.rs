//! Search module.
//!
//! Turns the full catalog plus the current criteria into the displayed
//! subsequence.

mod collate;
mod pipeline;
mod query;

pub use collate::collate;
pub use pipeline::{apply_query, result_summary, sort_products};
pub use query::{CategoryFilter, QueryCriteria, SortOrder};
