//! Pay history data source.
//!
//! Parses tabular (CSV) pay history exports into typed [`PayRecord`]s and
//! provides the per-employee views the revision needs.
//!
//! [`PayRecord`]: crate::models::PayRecord

mod columns;
mod history;

pub use columns::{ColumnMap, REQUIRED_COLUMNS};
pub use history::PayHistory;
