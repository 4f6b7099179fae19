//! Core data models for the Pay Revision Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod amount;
mod grade;
mod month;
mod pay_record;
mod policy;
mod revision_result;

pub use amount::{
    MAX_AMOUNT, deserialize_amount, deserialize_text, deserialize_year, parse_amount, parse_year,
    round_money,
};
pub use grade::Grade;
pub use month::{Month, MonthKey, normalize_month_name};
pub use pay_record::{EmployeeIdentity, PayRecord};
pub use policy::{MAX_POLICY_PCT, RevisionPolicy};
pub use revision_result::{
    AuditStep, AuditTrace, AuditWarning, BasicPayRule, FinancialYear, RevisedRecord,
    RevisionResult, RevisionTotals, YearSummary,
};
