//! Report payload for revision documents.
//!
//! The engine does not lay out documents. [`RevisionReport`] carries what an
//! external document generator needs to render a per-employee revision
//! statement: heading, policy parameters, arrear totals, year-wise summaries
//! and one row per revised month.

mod revision_report;

pub use revision_report::{DISCLAIMER, ReportRow, RevisionReport};
