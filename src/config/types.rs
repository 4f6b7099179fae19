//! Policy table types for pay revision.
//!
//! This module contains the strongly-typed lookup tables the revision
//! calculation reads: grade minimum basic pay and the dearness allowance
//! schedule. [`RevisionTables::default`] carries the published tables;
//! alternative tables can be deserialised from YAML.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Grade, Month};

/// Grade minimum basic pay, in whole rupees, for E1..E9.
const BUILTIN_GRADE_MINIMUMS: [(Grade, i64); 9] = [
    (Grade::E1, 40_000),
    (Grade::E2, 50_000),
    (Grade::E3, 60_000),
    (Grade::E4, 70_000),
    (Grade::E5, 80_000),
    (Grade::E6, 90_000),
    (Grade::E7, 100_000),
    (Grade::E8, 110_000),
    (Grade::E9, 120_000),
];

/// Dearness allowance rates in tenths of a percent, monthly from January 2017.
///
/// Rates are revised quarterly, so each value repeats for three months.
const BUILTIN_DA_RATES_TENTHS: [i64; 102] = [
    0, 0, 0, -11, -11, -11, -2, -2, -2, 22, 22, 22, // 2017
    34, 34, 34, 35, 35, 35, 38, 38, 38, 73, 73, 73, // 2018
    88, 88, 88, 100, 100, 100, 124, 124, 124, 148, 148, 148, // 2019
    172, 172, 172, 187, 187, 187, 184, 184, 184, 209, 209, 209, // 2020
    237, 237, 237, 232, 232, 232, 247, 247, 247, 272, 272, 272, // 2021
    294, 294, 294, 300, 300, 300, 325, 325, 325, 348, 348, 348, // 2022
    372, 372, 372, 377, 377, 377, 392, 392, 392, 438, 438, 438, // 2023
    437, 437, 437, 443, 443, 443, 448, 448, 448, 477, 477, 477, // 2024
    496, 496, 496, 487, 487, 487, // 2025
];

/// A monthly dearness allowance schedule.
///
/// Entry 0 applies to the epoch month; each following entry applies to the
/// next calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaSchedule {
    /// Calendar year of the first tabulated month.
    pub epoch_year: i32,
    /// Calendar month of the first tabulated month.
    pub epoch_month: Month,
    /// DA percentages, one per month.
    pub rates: Vec<Decimal>,
}

impl DaSchedule {
    /// Returns the DA percentage for a month, or zero outside the table.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_revision_engine::config::DaSchedule;
    /// use pay_revision_engine::models::Month;
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = DaSchedule::default();
    /// assert_eq!(schedule.rate_for(Month::Jan, 2020), Decimal::new(172, 1));
    /// assert_eq!(schedule.rate_for(Month::Dec, 2016), Decimal::ZERO);
    /// ```
    pub fn rate_for(&self, month: Month, year: i32) -> Decimal {
        self.index_of(month, year)
            .and_then(|index| self.rates.get(index))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the table index for a month, if it is not before the epoch.
    pub fn index_of(&self, month: Month, year: i32) -> Option<usize> {
        let offset = (i64::from(year) - i64::from(self.epoch_year)) * 12
            + i64::from(month.number())
            - i64::from(self.epoch_month.number());
        usize::try_from(offset).ok()
    }
}

impl Default for DaSchedule {
    fn default() -> Self {
        Self {
            epoch_year: 2017,
            epoch_month: Month::Jan,
            rates: BUILTIN_DA_RATES_TENTHS
                .iter()
                .map(|tenths| Decimal::new(*tenths, 1))
                .collect(),
        }
    }
}

/// The complete set of lookup tables used by a revision run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionTables {
    /// Minimum basic pay per grade.
    pub grade_minimums: BTreeMap<Grade, Decimal>,
    /// Dearness allowance schedule.
    pub da_schedule: DaSchedule,
}

impl RevisionTables {
    /// Returns the minimum basic pay for a grade, if one is tabulated.
    pub fn grade_minimum(&self, grade: Grade) -> Option<Decimal> {
        self.grade_minimums.get(&grade).copied()
    }
}

impl Default for RevisionTables {
    fn default() -> Self {
        Self {
            grade_minimums: BUILTIN_GRADE_MINIMUMS
                .iter()
                .map(|(grade, amount)| (*grade, Decimal::from(*amount)))
                .collect(),
            da_schedule: DaSchedule::default(),
        }
    }
}
