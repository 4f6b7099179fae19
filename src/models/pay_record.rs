//! Pay record model and related types.
//!
//! This module defines the [`PayRecord`] struct representing one employee's
//! pay for one month, as supplied by the pay history data source.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::{deserialize_amount, deserialize_text, deserialize_year};
use super::{Grade, MonthKey};

/// Identifying details of the employee a record set belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeIdentity {
    /// The employee (SAP) number.
    pub employee_no: String,
    /// The employee's name.
    pub name: String,
    /// The employee's service status.
    pub status: String,
}

/// One employee's original pay for one month.
///
/// Field aliases accept the column headings used by the pay history sheets,
/// so a row exported as JSON with `"Employee No"`, `"Basic"` etc. deserialises
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRecord {
    /// The employee (SAP) number.
    #[serde(alias = "Employee No", deserialize_with = "deserialize_text")]
    pub employee_no: String,
    /// The employee's name.
    #[serde(alias = "Name")]
    pub name: String,
    /// The employee's service status.
    #[serde(alias = "Status")]
    pub status: String,
    /// The calendar year of this month.
    #[serde(alias = "Year", deserialize_with = "deserialize_year")]
    pub year: i32,
    /// The calendar month.
    #[serde(alias = "Month")]
    pub month: MonthKey,
    /// The pay scale group code (e.g. "E3").
    #[serde(alias = "Pay Scale Group", deserialize_with = "deserialize_text")]
    pub pay_scale_group: String,
    /// The original basic pay.
    #[serde(alias = "Basic", deserialize_with = "deserialize_amount")]
    pub basic: Decimal,
    /// The original dearness allowance amount.
    #[serde(alias = "VDA", deserialize_with = "deserialize_amount")]
    pub vda: Decimal,
    /// The original house rent allowance percentage tier (10, 20 or 30).
    #[serde(alias = "HRA percentage", deserialize_with = "deserialize_amount")]
    pub hra_pct: Decimal,
    /// The original house rent allowance amount.
    #[serde(alias = "HRA", deserialize_with = "deserialize_amount")]
    pub hra: Decimal,
    /// The original other allowance amount.
    #[serde(alias = "Other Allowance", deserialize_with = "deserialize_amount")]
    pub other_allowance: Decimal,
}

impl PayRecord {
    /// Returns the pay scale group with surrounding whitespace removed.
    pub fn group(&self) -> &str {
        self.pay_scale_group.trim()
    }

    /// Returns the grade prefix of this record's pay scale group, if recognised.
    pub fn grade(&self) -> Option<Grade> {
        Grade::from_group(&self.pay_scale_group)
    }

    /// Returns the chronological sort key `(year, month order)`.
    pub fn period_key(&self) -> (i32, u32) {
        (self.year, self.month.order())
    }

    /// Returns a short label such as `"Jan 2020"`.
    pub fn period_label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }

    /// Returns the original monthly total: basic + DA + HRA + other allowance.
    pub fn original_total(&self) -> Decimal {
        self.basic + self.vda + self.hra + self.other_allowance
    }

    /// Returns the original monthly total excluding house rent allowance.
    pub fn original_total_without_hra(&self) -> Decimal {
        self.basic + self.vda + self.other_allowance
    }

    /// Returns the identity of the employee this record belongs to.
    pub fn identity(&self) -> EmployeeIdentity {
        EmployeeIdentity {
            employee_no: self.employee_no.clone(),
            name: self.name.clone(),
            status: self.status.clone(),
        }
    }
}
