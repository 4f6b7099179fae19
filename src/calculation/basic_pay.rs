//! Revised basic pay trajectory.
//!
//! Revised basic pay is path dependent: each month's value starts from the
//! previous month's. [`advance_basic_pay`] is the pure step function that the
//! revision fold threads through the ordered records, carrying a
//! [`BasicPayState`] from one month to the next.

use rust_decimal::Decimal;

use crate::config::RevisionTables;
use crate::models::{BasicPayRule, Month, PayRecord};

/// Multiplier applied to the old basic in the first revised month.
///
/// Encodes the 119% compounding of the previous revision plus unity.
pub const PRC_MULTIPLIER: Decimal = Decimal::from_parts(219, 0, 0, false, 2);

/// Multiplier for a 3% increment (promotion or April annual increment).
pub const INCREMENT_MULTIPLIER: Decimal = Decimal::from_parts(103, 0, 0, false, 2);

/// State carried from one revised month to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicPayState {
    /// The unrounded revised basic pay of the latest month.
    pub current_basic: Decimal,
    /// The (trimmed) pay scale group of the latest month.
    pub previous_group: String,
}

/// The outcome of one step of the basic pay trajectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicPayStep {
    /// The state after this month.
    pub state: BasicPayState,
    /// The rule that determined this month's basic.
    pub rule: BasicPayRule,
    /// The revised basic before this month, if any.
    pub previous_basic: Option<Decimal>,
    /// The grade minimum that applied to this month's group, if any.
    pub grade_minimum: Option<Decimal>,
}

/// Calculates the first revised basic before any grade minimum:
/// `old_basic x 2.19 x (1 + fitment_pct / 100)`.
///
/// # Examples
///
/// ```
/// use pay_revision_engine::calculation::initial_basic_pay;
/// use rust_decimal::Decimal;
///
/// let basic = initial_basic_pay(Decimal::from(50000), Decimal::from(10));
/// assert_eq!(basic, Decimal::from(120450));
/// ```
pub fn initial_basic_pay(old_basic: Decimal, fitment_pct: Decimal) -> Decimal {
    old_basic * PRC_MULTIPLIER * (Decimal::ONE + fitment_pct / Decimal::ONE_HUNDRED)
}

/// Advances the basic pay trajectory by one month.
///
/// * First month (`previous` is `None`): initial fitment, raised to the grade
///   minimum if the minimum is higher.
/// * Group changed: raised to the new grade minimum if below it, otherwise a
///   3% increment. Groups without a tabulated minimum always get the increment.
/// * Same group in April: 3% annual increment.
/// * Otherwise the basic carries forward.
pub fn advance_basic_pay(
    previous: Option<&BasicPayState>,
    record: &PayRecord,
    fitment_pct: Decimal,
    tables: &RevisionTables,
) -> BasicPayStep {
    let group = record.group();
    let grade_minimum = record.grade().and_then(|grade| tables.grade_minimum(grade));

    let (current_basic, rule) = match previous {
        None => {
            let base = initial_basic_pay(record.basic, fitment_pct);
            match grade_minimum {
                Some(minimum) if minimum > base => (minimum, BasicPayRule::GradeMinimumFloor),
                _ => (base, BasicPayRule::InitialFitment),
            }
        }
        Some(state) if state.previous_group != group => match grade_minimum {
            Some(minimum) if state.current_basic < minimum => {
                (minimum, BasicPayRule::GradeMinimumFloor)
            }
            _ => (
                state.current_basic * INCREMENT_MULTIPLIER,
                BasicPayRule::PromotionIncrement,
            ),
        },
        Some(state) if record.month.month() == Some(Month::Apr) => (
            state.current_basic * INCREMENT_MULTIPLIER,
            BasicPayRule::AnnualIncrement,
        ),
        Some(state) => (state.current_basic, BasicPayRule::CarryForward),
    };

    BasicPayStep {
        state: BasicPayState {
            current_basic,
            previous_group: group.to_string(),
        },
        rule,
        previous_basic: previous.map(|state| state.current_basic),
        grade_minimum,
    }
}
