//! Calculation logic for the Pay Revision Engine.
//!
//! This module contains the revision calculation and the rules it is built
//! from: chronological ordering and effective-start filtering, the revised
//! basic pay trajectory, dearness allowance lookup, HRA tier remapping and
//! financial year bucketing.

mod basic_pay;
mod dearness_allowance;
mod financial_year;
mod hra_tier;
mod ordering;
mod revision;

pub use basic_pay::{
    BasicPayState, BasicPayStep, INCREMENT_MULTIPLIER, PRC_MULTIPLIER, advance_basic_pay,
    initial_basic_pay,
};
pub use dearness_allowance::{calculate_dearness_allowance, da_pct_for};
pub use financial_year::financial_year_for;
pub use hra_tier::{HRA_DA_THRESHOLD, calculate_hra, remap_hra_pct};
pub use ordering::{
    EffectiveStart, order_records, records_in_window, resolve_effective_start,
    unmapped_month_warnings,
};
pub use revision::{compute_revision, compute_revision_with_defaults, revise_month};
