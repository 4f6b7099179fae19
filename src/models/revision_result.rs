//! Revision result models for the Pay Revision Engine.
//!
//! This module contains the [`RevisionResult`] type and its associated structures
//! that capture all outputs of a revision run: one revised record per month,
//! year-wise arrear summaries, overall totals and an audit trace.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayRecord;

/// The rule that determined a month's revised basic pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicPayRule {
    /// First month: old basic x 2.19 x (1 + fitment), above any grade minimum.
    InitialFitment,
    /// Basic raised to the grade minimum.
    GradeMinimumFloor,
    /// Pay scale group changed while already at or above the new minimum: 3% increment.
    PromotionIncrement,
    /// April in an unchanged group: 3% annual increment.
    AnnualIncrement,
    /// No rule fired; basic carried forward unchanged.
    CarryForward,
}

impl BasicPayRule {
    /// Returns a stable identifier for audit output.
    pub fn rule_id(self) -> &'static str {
        match self {
            BasicPayRule::InitialFitment => "initial_fitment",
            BasicPayRule::GradeMinimumFloor => "grade_minimum_floor",
            BasicPayRule::PromotionIncrement => "promotion_increment",
            BasicPayRule::AnnualIncrement => "annual_increment",
            BasicPayRule::CarryForward => "carry_forward",
        }
    }

    /// Returns a human-readable rule name.
    pub fn rule_name(self) -> &'static str {
        match self {
            BasicPayRule::InitialFitment => "Initial Fitment",
            BasicPayRule::GradeMinimumFloor => "Grade Minimum Floor",
            BasicPayRule::PromotionIncrement => "Promotion Increment",
            BasicPayRule::AnnualIncrement => "Annual Increment",
            BasicPayRule::CarryForward => "Carry Forward",
        }
    }
}

/// An April–March financial year, identified by the calendar year it starts in.
///
/// Serialises as its label, e.g. `"2020-2021"`.
///
/// # Example
///
/// ```
/// use pay_revision_engine::models::FinancialYear;
///
/// let fy = FinancialYear::starting(2020);
/// assert_eq!(fy.to_string(), "2020-2021");
/// assert_eq!("2020-2021".parse::<FinancialYear>().unwrap(), fy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct FinancialYear {
    start_year: i32,
}

impl FinancialYear {
    /// Creates the financial year starting in April of `start_year`.
    pub fn starting(start_year: i32) -> Self {
        Self { start_year }
    }

    /// Returns the calendar year the financial year starts in.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_year, self.start_year + 1)
    }
}

impl std::str::FromStr for FinancialYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("invalid financial year '{}'", s))?;
        let start: i32 = start
            .parse()
            .map_err(|_| format!("invalid financial year '{}'", s))?;
        let end: i32 = end
            .parse()
            .map_err(|_| format!("invalid financial year '{}'", s))?;
        if end != start + 1 {
            return Err(format!(
                "financial year '{}' must span consecutive years",
                s
            ));
        }
        Ok(Self::starting(start))
    }
}

impl From<FinancialYear> for String {
    fn from(fy: FinancialYear) -> Self {
        fy.to_string()
    }
}

impl TryFrom<String> for FinancialYear {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One month of revised pay alongside the original record.
///
/// All revised amounts are rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisedRecord {
    /// The original pay record.
    pub original: PayRecord,
    /// The rule that produced this month's revised basic.
    pub basic_rule: BasicPayRule,
    /// Revised basic pay.
    pub revised_basic: Decimal,
    /// Dearness allowance percentage applicable to this month.
    pub da_pct: Decimal,
    /// Revised dearness allowance.
    pub revised_da: Decimal,
    /// House rent allowance percentage after tier remapping.
    pub revised_hra_pct: Decimal,
    /// Revised house rent allowance.
    pub revised_hra: Decimal,
    /// Revised other allowance.
    pub revised_oa: Decimal,
    /// Sum of the four revised components.
    pub revised_total: Decimal,
    /// Sum of the four original components.
    pub original_total: Decimal,
    /// Revised total minus original total.
    pub delta_with_hra: Decimal,
    /// The same delta excluding house rent allowance on both sides.
    pub delta_without_hra: Decimal,
    /// The financial year this month is accounted in.
    pub financial_year: FinancialYear,
}

/// Arrear totals for one financial year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    /// The financial year.
    pub financial_year: FinancialYear,
    /// Summed delta including house rent allowance.
    pub delta_with_hra: Decimal,
    /// Summed delta excluding house rent allowance.
    pub delta_without_hra: Decimal,
}

/// Arrear totals across the whole revision window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionTotals {
    /// Total arrear including house rent allowance.
    pub delta_with_hra: Decimal,
    /// Total arrear excluding house rent allowance.
    pub delta_without_hra: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The pay month this step applies to (e.g. "Apr 2021").
    pub period: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The audit trace for a revision run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps, one per revised month.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete, deterministic output of a revision run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionResult {
    /// Revised records in chronological order.
    pub records: Vec<RevisedRecord>,
    /// Year-wise arrear summaries in chronological order.
    pub summaries: Vec<YearSummary>,
    /// Arrear totals across all revised months.
    pub totals: RevisionTotals,
    /// Audit trace of calculation decisions.
    pub audit: AuditTrace,
}

impl RevisionResult {
    /// Returns true when no record fell inside the revision window.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_year_label() {
        assert_eq!(FinancialYear::starting(2017).to_string(), "2017-2018");
    }

    #[test]
    fn test_financial_year_parse_rejects_non_consecutive() {
        assert!("2020-2022".parse::<FinancialYear>().is_err());
        assert!("2020".parse::<FinancialYear>().is_err());
        assert!("abcd-efgh".parse::<FinancialYear>().is_err());
    }

    #[test]
    fn test_financial_year_ordering_is_chronological() {
        let mut years = vec![
            FinancialYear::starting(2021),
            FinancialYear::starting(2019),
            FinancialYear::starting(2020),
        ];
        years.sort();
        let labels: Vec<String> = years.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["2019-2020", "2020-2021", "2021-2022"]);
    }

    #[test]
    fn test_financial_year_serialization() {
        let json = serde_json::to_string(&FinancialYear::starting(2020)).unwrap();
        assert_eq!(json, "\"2020-2021\"");

        let fy: FinancialYear = serde_json::from_str("\"2018-2019\"").unwrap();
        assert_eq!(fy.start_year(), 2018);
    }

    #[test]
    fn test_basic_pay_rule_serialization() {
        let json = serde_json::to_string(&BasicPayRule::GradeMinimumFloor).unwrap();
        assert_eq!(json, "\"grade_minimum_floor\"");

        let rule: BasicPayRule = serde_json::from_str("\"annual_increment\"").unwrap();
        assert_eq!(rule, BasicPayRule::AnnualIncrement);
    }

    #[test]
    fn test_rule_ids_match_serialized_names() {
        for rule in [
            BasicPayRule::InitialFitment,
            BasicPayRule::GradeMinimumFloor,
            BasicPayRule::PromotionIncrement,
            BasicPayRule::AnnualIncrement,
            BasicPayRule::CarryForward,
        ] {
            let json = serde_json::to_string(&rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule.rule_id()));
        }
    }

    #[test]
    fn test_empty_result() {
        let result = RevisionResult::default();
        assert!(result.is_empty());
        assert_eq!(result.totals.delta_with_hra, Decimal::ZERO);
    }
}
