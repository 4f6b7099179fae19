//! Revision policy inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::amount::{deserialize_amount, deserialize_year};

/// The caller-supplied policy for one revision run.
///
/// # Example
///
/// ```
/// use pay_revision_engine::models::RevisionPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = RevisionPolicy {
///     fitment_pct: Decimal::from(10),
///     oa_pct: Decimal::from(35),
///     start_month: "Jan".to_string(),
///     start_year: 2020,
/// };
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionPolicy {
    /// Fitment percentage applied to the first revised basic.
    #[serde(deserialize_with = "deserialize_amount")]
    pub fitment_pct: Decimal,
    /// Other allowance as a percentage of revised basic.
    #[serde(deserialize_with = "deserialize_amount")]
    pub oa_pct: Decimal,
    /// Month name of the effective start ("Jan".."Dec").
    pub start_month: String,
    /// Calendar year of the effective start.
    #[serde(deserialize_with = "deserialize_year")]
    pub start_year: i32,
}

/// Largest fitment or OA percentage a policy may carry.
pub const MAX_POLICY_PCT: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

impl RevisionPolicy {
    /// Rejects percentages outside `0..=MAX_POLICY_PCT`.
    ///
    /// The engine does not check its inputs, so callers that take policy
    /// input from users must validate before computing. Together with the
    /// amount cap applied at parse time this keeps every product well inside
    /// `Decimal` range.
    pub fn validate(&self) -> EngineResult<()> {
        check_pct("fitment_pct", self.fitment_pct)?;
        check_pct("oa_pct", self.oa_pct)
    }
}

fn check_pct(field: &str, value: Decimal) -> EngineResult<()> {
    let message = if value < Decimal::ZERO {
        format!("must not be negative, got {}", value)
    } else if value > MAX_POLICY_PCT {
        format!("must not exceed {}, got {}", MAX_POLICY_PCT, value)
    } else {
        return Ok(());
    };
    Err(EngineError::InvalidPolicy {
        field: field.to_string(),
        message,
    })
}
