//! Request types for the Pay Revision Engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    PayRecord, RevisionPolicy, deserialize_amount, deserialize_text, deserialize_year,
};

/// Request body for the `/revision` endpoint.
///
/// Carries the records of a single employee together with the policy to
/// apply to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevisionRequest {
    /// The revision policy.
    pub policy: RevisionPolicy,
    /// The employee's monthly pay records, in any order.
    pub records: Vec<PayRecord>,
}

/// Request body for the `/datasets/:id/revision` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSetRevisionRequest {
    /// The employee whose records are revised.
    #[serde(deserialize_with = "deserialize_text")]
    pub employee_no: String,
    /// Fitment percentage.
    #[serde(deserialize_with = "deserialize_amount")]
    pub fitment_pct: Decimal,
    /// Other allowance percentage.
    #[serde(deserialize_with = "deserialize_amount")]
    pub oa_pct: Decimal,
    /// Month name of the effective start.
    pub start_month: String,
    /// Calendar year of the effective start.
    #[serde(deserialize_with = "deserialize_year")]
    pub start_year: i32,
}

impl DataSetRevisionRequest {
    /// Returns the revision policy described by this request.
    pub fn policy(&self) -> RevisionPolicy {
        RevisionPolicy {
            fitment_pct: self.fitment_pct,
            oa_pct: self.oa_pct,
            start_month: self.start_month.clone(),
            start_year: self.start_year,
        }
    }
}
