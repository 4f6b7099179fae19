//! Dearness allowance calculation.

use rust_decimal::Decimal;

use crate::config::DaSchedule;
use crate::models::MonthKey;

/// Returns the DA percentage for a pay month.
///
/// Unrecognised month names have no position in the schedule and get 0%.
pub fn da_pct_for(month: &MonthKey, year: i32, schedule: &DaSchedule) -> Decimal {
    month
        .month()
        .map(|month| schedule.rate_for(month, year))
        .unwrap_or(Decimal::ZERO)
}

/// Calculates the revised dearness allowance on a basic pay, before rounding.
///
/// # Examples
///
/// ```
/// use pay_revision_engine::calculation::calculate_dearness_allowance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let da = calculate_dearness_allowance(Decimal::from(120450), Decimal::from_str("17.2").unwrap());
/// assert_eq!(da, Decimal::from_str("20717.4").unwrap());
/// ```
pub fn calculate_dearness_allowance(basic: Decimal, da_pct: Decimal) -> Decimal {
    basic * da_pct / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_known_month_uses_schedule() {
        let schedule = DaSchedule::default();
        assert_eq!(
            da_pct_for(&MonthKey::Known(Month::Jan), 2020, &schedule),
            dec("17.2")
        );
        assert_eq!(
            da_pct_for(&MonthKey::Known(Month::Oct), 2021, &schedule),
            dec("27.2")
        );
    }

    #[test]
    fn test_unmapped_month_has_no_da() {
        let schedule = DaSchedule::default();
        let month = MonthKey::Unmapped("Foo".to_string());
        assert_eq!(da_pct_for(&month, 2020, &schedule), Decimal::ZERO);
    }

    #[test]
    fn test_negative_da_reduces_pay() {
        let da = calculate_dearness_allowance(dec("100000"), dec("-1.1"));
        assert_eq!(da, dec("-1100"));
    }

    #[test]
    fn test_zero_da() {
        assert_eq!(
            calculate_dearness_allowance(dec("100000"), Decimal::ZERO),
            Decimal::ZERO
        );
    }
}
