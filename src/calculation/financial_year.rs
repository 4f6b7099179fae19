//! Financial year bucketing (April to March).

use crate::models::{FinancialYear, Month, MonthKey};

/// Returns the financial year a pay month is accounted in.
///
/// April onwards belongs to the financial year starting that calendar year;
/// January to March, and unrecognised month names, belong to the one that
/// started the previous year.
///
/// # Examples
///
/// ```
/// use pay_revision_engine::calculation::financial_year_for;
/// use pay_revision_engine::models::{Month, MonthKey};
///
/// assert_eq!(financial_year_for(&MonthKey::Known(Month::Mar), 2021).to_string(), "2020-2021");
/// assert_eq!(financial_year_for(&MonthKey::Known(Month::Apr), 2021).to_string(), "2021-2022");
/// ```
pub fn financial_year_for(month: &MonthKey, year: i32) -> FinancialYear {
    if month.order() >= Month::Apr.number() {
        FinancialYear::starting(year)
    } else {
        FinancialYear::starting(year - 1)
    }
}
