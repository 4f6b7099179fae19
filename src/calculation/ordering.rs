//! Chronological ordering and effective-start filtering.
//!
//! Records are sorted by `(year, month order)` with a stable sort, then
//! everything before the effective start month is dropped. Months that do
//! not match the fixed name lookup carry order 0 and so sort ahead of
//! January of the same year.

use tracing::warn;

use crate::models::{AuditWarning, Month, PayRecord, RevisionPolicy};

/// The first month included in a revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveStart {
    /// Calendar year of the first revised month.
    pub year: i32,
    /// First revised month within `year`.
    pub month: Month,
}

impl EffectiveStart {
    /// Returns true if the record falls on or after the effective start.
    pub fn includes(&self, record: &PayRecord) -> bool {
        record.year > self.year
            || (record.year == self.year && record.month.order() >= self.month.number())
    }
}

/// Resolves the effective start from a policy.
///
/// An unrecognised start month name falls back to January of the start year
/// and produces an `UNMAPPED_START_MONTH` warning.
pub fn resolve_effective_start(policy: &RevisionPolicy) -> (EffectiveStart, Option<AuditWarning>) {
    match Month::from_name(&policy.start_month) {
        Some(month) => (
            EffectiveStart {
                year: policy.start_year,
                month,
            },
            None,
        ),
        None => {
            warn!(
                start_month = %policy.start_month,
                start_year = policy.start_year,
                "Unrecognised start month, defaulting to January"
            );
            let warning = AuditWarning {
                code: "UNMAPPED_START_MONTH".to_string(),
                message: format!(
                    "Start month '{}' is not a recognised month name; revision starts from Jan {}",
                    policy.start_month.trim(),
                    policy.start_year
                ),
                severity: "medium".to_string(),
            };
            (
                EffectiveStart {
                    year: policy.start_year,
                    month: Month::Jan,
                },
                Some(warning),
            )
        }
    }
}

/// Returns the records sorted chronologically.
///
/// The sort is stable, so records sharing a key keep their input order.
pub fn order_records(records: &[PayRecord]) -> Vec<&PayRecord> {
    let mut ordered: Vec<&PayRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.period_key());
    ordered
}

/// Returns the chronologically ordered records at or after `start`.
pub fn records_in_window<'a>(records: &'a [PayRecord], start: &EffectiveStart) -> Vec<&'a PayRecord> {
    order_records(records)
        .into_iter()
        .filter(|record| start.includes(record))
        .collect()
}

/// Builds one `UNMAPPED_MONTH` warning per record whose month name was not recognised.
pub fn unmapped_month_warnings(records: &[PayRecord]) -> Vec<AuditWarning> {
    records
        .iter()
        .filter(|record| record.month.month().is_none())
        .map(|record| {
            warn!(
                employee_no = %record.employee_no,
                month = %record.month,
                year = record.year,
                "Unrecognised month name in pay history"
            );
            AuditWarning {
                code: "UNMAPPED_MONTH".to_string(),
                message: format!(
                    "Month '{}' in {} is not a recognised month name; ordered before January with no DA",
                    record.month, record.year
                ),
                severity: "medium".to_string(),
            }
        })
        .collect()
}
