//! House rent allowance tier remapping.
//!
//! Revised HRA tiers depend on whether dearness allowance has reached 25%:
//!
//! | Original | DA >= 25% | DA < 25% |
//! |----------|-----------|----------|
//! | 30%      | 27%       | 24%      |
//! | 20%      | 18%       | 16%      |
//! | 10%      | 9%        | 8%       |
//!
//! Any other original percentage is kept as is.

use rust_decimal::Decimal;

/// DA percentage at and above which the higher HRA tiers apply.
pub const HRA_DA_THRESHOLD: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// (original, DA at/above threshold, DA below threshold)
const HRA_TIERS: [(i64, i64, i64); 3] = [(30, 27, 24), (20, 18, 16), (10, 9, 8)];

/// Remaps an original HRA percentage for the given DA percentage.
///
/// # Examples
///
/// ```
/// use pay_revision_engine::calculation::remap_hra_pct;
/// use rust_decimal::Decimal;
///
/// assert_eq!(remap_hra_pct(Decimal::from(20), Decimal::from(25)), Decimal::from(18));
/// assert_eq!(remap_hra_pct(Decimal::from(20), Decimal::from(17)), Decimal::from(16));
/// assert_eq!(remap_hra_pct(Decimal::from(15), Decimal::from(30)), Decimal::from(15));
/// ```
pub fn remap_hra_pct(original_pct: Decimal, da_pct: Decimal) -> Decimal {
    let high_da = da_pct >= HRA_DA_THRESHOLD;
    HRA_TIERS
        .iter()
        .find(|(original, _, _)| Decimal::from(*original) == original_pct)
        .map(|(_, high, low)| Decimal::from(if high_da { *high } else { *low }))
        .unwrap_or(original_pct)
}

/// Calculates the revised HRA amount on a basic pay, before rounding.
pub fn calculate_hra(basic: Decimal, hra_pct: Decimal) -> Decimal {
    basic * hra_pct / Decimal::ONE_HUNDRED
}
