//! The revision calculation.
//!
//! [`compute_revision`] orders and filters one employee's pay history, folds
//! the basic pay trajectory over it, recalculates allowances for each month,
//! and aggregates arrears by financial year.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RevisionTables;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, BasicPayRule, FinancialYear, PayRecord, RevisedRecord,
    RevisionPolicy, RevisionResult, RevisionTotals, YearSummary, round_money,
};

use super::basic_pay::{BasicPayState, BasicPayStep, advance_basic_pay};
use super::dearness_allowance::{calculate_dearness_allowance, da_pct_for};
use super::financial_year::financial_year_for;
use super::hra_tier::{calculate_hra, remap_hra_pct};
use super::ordering::{records_in_window, resolve_effective_start, unmapped_month_warnings};

/// Computes the revised pay and arrears for one employee's pay history.
///
/// `records` must belong to a single employee; they may be in any order.
/// Records before the policy's effective start are ignored. An empty window
/// yields an empty result rather than an error.
///
/// Arithmetic is unchecked. Amounts are expected within
/// [`MAX_AMOUNT`](crate::models::MAX_AMOUNT) and the policy to pass
/// [`RevisionPolicy::validate`].
///
/// # Examples
///
/// ```
/// use pay_revision_engine::calculation::compute_revision;
/// use pay_revision_engine::config::RevisionTables;
/// use pay_revision_engine::models::{Month, MonthKey, PayRecord, RevisionPolicy};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = PayRecord {
///     employee_no: "1001".to_string(),
///     name: "A. Kumar".to_string(),
///     status: "Regular".to_string(),
///     year: 2020,
///     month: MonthKey::Known(Month::Jan),
///     pay_scale_group: "E3".to_string(),
///     basic: Decimal::from(50000),
///     vda: Decimal::from(5000),
///     hra_pct: Decimal::from(20),
///     hra: Decimal::from(10000),
///     other_allowance: Decimal::from(5000),
/// };
/// let policy = RevisionPolicy {
///     fitment_pct: Decimal::from(10),
///     oa_pct: Decimal::from(35),
///     start_month: "Jan".to_string(),
///     start_year: 2020,
/// };
///
/// let result = compute_revision(&[record], &policy, &RevisionTables::default());
/// assert_eq!(result.records[0].revised_total, Decimal::from_str("202596.90").unwrap());
/// assert_eq!(result.summaries[0].financial_year.to_string(), "2019-2020");
/// ```
pub fn compute_revision(
    records: &[PayRecord],
    policy: &RevisionPolicy,
    tables: &RevisionTables,
) -> RevisionResult {
    let (start, start_warning) = resolve_effective_start(policy);
    let mut warnings: Vec<AuditWarning> = start_warning.into_iter().collect();
    warnings.extend(unmapped_month_warnings(records));

    let window = records_in_window(records, &start);
    debug!(
        records_in = records.len(),
        records_in_window = window.len(),
        start_year = start.year,
        start_month = %start.month,
        fitment_pct = %policy.fitment_pct,
        oa_pct = %policy.oa_pct,
        "Computing pay revision"
    );

    let result = window
        .into_iter()
        .fold(RevisionAccumulator::default(), |acc, record| {
            acc.push(record, policy, tables)
        })
        .finish(warnings);

    debug!(
        months = result.records.len(),
        financial_years = result.summaries.len(),
        delta_with_hra = %result.totals.delta_with_hra,
        "Pay revision complete"
    );
    result
}

/// Computes a revision with the built-in policy tables.
pub fn compute_revision_with_defaults(
    records: &[PayRecord],
    policy: &RevisionPolicy,
) -> RevisionResult {
    compute_revision(records, policy, &RevisionTables::default())
}

/// Recalculates one month's pay from its basic pay step.
pub fn revise_month(
    record: &PayRecord,
    step: &BasicPayStep,
    oa_pct: Decimal,
    tables: &RevisionTables,
) -> RevisedRecord {
    let current_basic = step.state.current_basic;
    let da_pct = da_pct_for(&record.month, record.year, &tables.da_schedule);
    let revised_hra_pct = remap_hra_pct(record.hra_pct, da_pct);

    let revised_basic = round_money(current_basic);
    let revised_da = round_money(calculate_dearness_allowance(current_basic, da_pct));
    let revised_hra = round_money(calculate_hra(current_basic, revised_hra_pct));
    let revised_oa = round_money(current_basic * oa_pct / Decimal::ONE_HUNDRED);
    let revised_total = revised_basic + revised_da + revised_hra + revised_oa;

    let original_total = record.original_total();
    let delta_with_hra = revised_total - original_total;
    let delta_without_hra =
        (revised_basic + revised_da + revised_oa) - record.original_total_without_hra();

    RevisedRecord {
        original: record.clone(),
        basic_rule: step.rule,
        revised_basic,
        da_pct,
        revised_da,
        revised_hra_pct,
        revised_hra,
        revised_oa,
        revised_total,
        original_total,
        delta_with_hra,
        delta_without_hra,
        financial_year: financial_year_for(&record.month, record.year),
    }
}

#[derive(Debug, Default)]
struct YearBucket {
    delta_with_hra: Decimal,
    delta_without_hra: Decimal,
}

#[derive(Debug, Default)]
struct RevisionAccumulator {
    state: Option<BasicPayState>,
    records: Vec<RevisedRecord>,
    steps: Vec<AuditStep>,
    years: BTreeMap<FinancialYear, YearBucket>,
}

impl RevisionAccumulator {
    fn push(mut self, record: &PayRecord, policy: &RevisionPolicy, tables: &RevisionTables) -> Self {
        let step = advance_basic_pay(self.state.as_ref(), record, policy.fitment_pct, tables);
        let revised = revise_month(record, &step, policy.oa_pct, tables);

        let bucket = self.years.entry(revised.financial_year).or_default();
        bucket.delta_with_hra += revised.delta_with_hra;
        bucket.delta_without_hra += revised.delta_without_hra;

        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(audit_step(step_number, &step, &revised));
        self.records.push(revised);
        self.state = Some(step.state);
        self
    }

    fn finish(self, warnings: Vec<AuditWarning>) -> RevisionResult {
        let summaries: Vec<YearSummary> = self
            .years
            .into_iter()
            .map(|(financial_year, bucket)| YearSummary {
                financial_year,
                delta_with_hra: round_money(bucket.delta_with_hra),
                delta_without_hra: round_money(bucket.delta_without_hra),
            })
            .collect();

        let totals = RevisionTotals {
            delta_with_hra: round_money(self.records.iter().map(|r| r.delta_with_hra).sum()),
            delta_without_hra: round_money(
                self.records.iter().map(|r| r.delta_without_hra).sum(),
            ),
        };

        RevisionResult {
            records: self.records,
            summaries,
            totals,
            audit: AuditTrace {
                steps: self.steps,
                warnings,
            },
        }
    }
}

fn audit_step(step_number: u32, step: &BasicPayStep, revised: &RevisedRecord) -> AuditStep {
    let record = &revised.original;
    let previous = step.previous_basic.map(round_money);
    let current = revised.revised_basic;

    let reasoning = match step.rule {
        BasicPayRule::InitialFitment => format!(
            "Old basic {} x 2.19 x (1 + fitment) = {}",
            record.basic.normalize(),
            current
        ),
        BasicPayRule::GradeMinimumFloor => format!(
            "Revised basic raised to the {} grade minimum of {}",
            record.group(),
            current
        ),
        BasicPayRule::PromotionIncrement => format!(
            "Pay scale group changed to {}; 3% increment {} -> {}",
            record.group(),
            previous.unwrap_or_default(),
            current
        ),
        BasicPayRule::AnnualIncrement => format!(
            "April annual increment of 3%: {} -> {}",
            previous.unwrap_or_default(),
            current
        ),
        BasicPayRule::CarryForward => format!("Basic carried forward at {}", current),
    };

    AuditStep {
        step_number,
        rule_id: step.rule.rule_id().to_string(),
        rule_name: step.rule.rule_name().to_string(),
        period: record.period_label(),
        input: serde_json::json!({
            "pay_scale_group": record.group(),
            "old_basic": record.basic.to_string(),
            "previous_revised_basic": previous.map(|b| b.to_string()),
            "grade_minimum": step.grade_minimum.map(|m| m.to_string()),
            "hra_pct": record.hra_pct.to_string()
        }),
        output: serde_json::json!({
            "revised_basic": current.to_string(),
            "da_pct": revised.da_pct.to_string(),
            "revised_hra_pct": revised.revised_hra_pct.to_string(),
            "delta_with_hra": revised.delta_with_hra.to_string()
        }),
        reasoning,
    }
}
