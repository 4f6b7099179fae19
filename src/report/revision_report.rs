//! Revision statement payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeIdentity, RevisedRecord, RevisionPolicy, RevisionResult, YearSummary};

/// Fixed disclaimer printed on every revision statement.
pub const DISCLAIMER: &str = "This report is a notional calculation based on available data and is not legally binding. For information purposes only.";

const UNKNOWN: &str = "N/A";

/// One month of a revision statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Month label, e.g. `"Jan 2020"`.
    pub period: String,
    /// Financial year label, e.g. `"2019-2020"`.
    pub financial_year: String,
    /// Pay scale group as recorded.
    pub pay_scale_group: String,
    /// Original basic pay.
    pub original_basic: Decimal,
    /// Revised basic pay.
    pub revised_basic: Decimal,
    /// DA percentage applied.
    pub da_pct: Decimal,
    /// Revised dearness allowance.
    pub revised_da: Decimal,
    /// Original HRA percentage.
    pub hra_pct: Decimal,
    /// Revised HRA percentage.
    pub revised_hra_pct: Decimal,
    /// Revised house rent allowance.
    pub revised_hra: Decimal,
    /// Revised other allowance.
    pub revised_oa: Decimal,
    /// Original monthly total.
    pub original_total: Decimal,
    /// Revised monthly total.
    pub revised_total: Decimal,
    /// Arrear including HRA.
    pub delta_with_hra: Decimal,
    /// Arrear excluding HRA.
    pub delta_without_hra: Decimal,
}

impl From<&RevisedRecord> for ReportRow {
    fn from(record: &RevisedRecord) -> Self {
        Self {
            period: record.original.period_label(),
            financial_year: record.financial_year.to_string(),
            pay_scale_group: record.original.group().to_string(),
            original_basic: record.original.basic,
            revised_basic: record.revised_basic,
            da_pct: record.da_pct,
            revised_da: record.revised_da,
            hra_pct: record.original.hra_pct,
            revised_hra_pct: record.revised_hra_pct,
            revised_hra: record.revised_hra,
            revised_oa: record.revised_oa,
            original_total: record.original_total,
            revised_total: record.revised_total,
            delta_with_hra: record.delta_with_hra,
            delta_without_hra: record.delta_without_hra,
        }
    }
}

/// Everything a document generator needs for one employee's revision statement.
///
/// # Example
///
/// ```
/// use pay_revision_engine::models::{RevisionPolicy, RevisionResult};
/// use pay_revision_engine::report::RevisionReport;
/// use rust_decimal::Decimal;
///
/// let policy = RevisionPolicy {
///     fitment_pct: Decimal::from(10),
///     oa_pct: Decimal::from(35),
///     start_month: "Jan".to_string(),
///     start_year: 2020,
/// };
/// let report = RevisionReport::build(&RevisionResult::default(), &policy);
/// assert_eq!(report.title, "Draft 3rd PRC revision in respect of N/A, SAP No. N/A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionReport {
    /// Document heading.
    pub title: String,
    /// Employee the statement is for.
    pub employee: EmployeeIdentity,
    /// Fitment percentage applied.
    pub fitment_pct: Decimal,
    /// Other allowance percentage applied.
    pub oa_pct: Decimal,
    /// Total arrear including HRA.
    pub total_delta_with_hra: Decimal,
    /// Total arrear excluding HRA.
    pub total_delta_without_hra: Decimal,
    /// Arrears per financial year, ascending.
    pub summaries: Vec<YearSummary>,
    /// One row per revised month, chronological.
    pub rows: Vec<ReportRow>,
    /// Suggested output file name for the rendered document.
    pub file_name: String,
    /// Fixed disclaimer text.
    pub disclaimer: String,
}

impl RevisionReport {
    /// Assembles the report for a revision result.
    ///
    /// Identity comes from the first revised month; an empty result reports
    /// `"N/A"` for name, employee number and status.
    pub fn build(result: &RevisionResult, policy: &RevisionPolicy) -> Self {
        let employee = result
            .records
            .first()
            .map(|record| record.original.identity())
            .unwrap_or_else(|| EmployeeIdentity {
                employee_no: UNKNOWN.to_string(),
                name: UNKNOWN.to_string(),
                status: UNKNOWN.to_string(),
            });

        Self {
            title: format!(
                "Draft 3rd PRC revision in respect of {}, SAP No. {}",
                employee.name, employee.employee_no
            ),
            file_name: format!("draft_3rd_prc_revision_{}.pdf", employee.employee_no),
            employee,
            fitment_pct: policy.fitment_pct,
            oa_pct: policy.oa_pct,
            total_delta_with_hra: result.totals.delta_with_hra,
            total_delta_without_hra: result.totals.delta_without_hra,
            summaries: result.summaries.clone(),
            rows: result.records.iter().map(ReportRow::from).collect(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}
