//! Calendar month model.
//!
//! Pay history identifies months by their three-letter English name
//! ("Jan".."Dec"). Names are normalised (trimmed and title-cased) before
//! lookup; anything that still does not match is kept as an
//! [`MonthKey::Unmapped`] value so a stray cell never aborts a revision.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the twelve calendar months, ordered January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    /// January.
    Jan,
    /// February.
    Feb,
    /// March.
    Mar,
    /// April.
    Apr,
    /// May.
    May,
    /// June.
    Jun,
    /// July.
    Jul,
    /// August.
    Aug,
    /// September.
    Sep,
    /// October.
    Oct,
    /// November.
    Nov,
    /// December.
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Returns the month number, 1 for January through 12 for December.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Returns the month for a 1-based month number.
    pub fn from_number(number: u32) -> Option<Month> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize))
            .copied()
    }

    /// Returns the three-letter name used in pay history ("Jan", "Feb", ...).
    pub fn abbreviation(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Looks a month up by name after normalisation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_revision_engine::models::Month;
    ///
    /// assert_eq!(Month::from_name(" jan "), Some(Month::Jan));
    /// assert_eq!(Month::from_name("APR"), Some(Month::Apr));
    /// assert_eq!(Month::from_name("April"), None);
    /// ```
    pub fn from_name(raw: &str) -> Option<Month> {
        let normalized = normalize_month_name(raw);
        Self::ALL
            .iter()
            .copied()
            .find(|month| month.abbreviation() == normalized)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Trims a month name and title-cases every alphabetic run.
pub fn normalize_month_name(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut previous_alphabetic = false;
    for ch in raw.trim().chars() {
        if ch.is_alphabetic() {
            if previous_alphabetic {
                normalized.extend(ch.to_lowercase());
            } else {
                normalized.extend(ch.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            normalized.push(ch);
            previous_alphabetic = false;
        }
    }
    normalized
}

/// The month column of a pay record.
///
/// Serialises as the (normalised) month name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MonthKey {
    /// A name that matched the fixed twelve-month lookup.
    Known(Month),
    /// A name that did not match; kept verbatim after normalisation.
    Unmapped(String),
}

impl MonthKey {
    /// Parses a raw month cell.
    pub fn parse(raw: &str) -> Self {
        match Month::from_name(raw) {
            Some(month) => MonthKey::Known(month),
            None => MonthKey::Unmapped(normalize_month_name(raw)),
        }
    }

    /// Returns the sort position: 1–12 for known months, 0 for unmapped names.
    pub fn order(&self) -> u32 {
        match self {
            MonthKey::Known(month) => month.number(),
            MonthKey::Unmapped(_) => 0,
        }
    }

    /// Returns the month when the name was recognised.
    pub fn month(&self) -> Option<Month> {
        match self {
            MonthKey::Known(month) => Some(*month),
            MonthKey::Unmapped(_) => None,
        }
    }

    /// Returns the display label for this month.
    pub fn label(&self) -> &str {
        match self {
            MonthKey::Known(month) => month.abbreviation(),
            MonthKey::Unmapped(name) => name,
        }
    }
}

impl From<Month> for MonthKey {
    fn from(month: Month) -> Self {
        MonthKey::Known(month)
    }
}

impl From<String> for MonthKey {
    fn from(raw: String) -> Self {
        MonthKey::parse(&raw)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.label().to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_numbers_are_one_based() {
        assert_eq!(Month::Jan.number(), 1);
        assert_eq!(Month::Apr.number(), 4);
        assert_eq!(Month::Dec.number(), 12);
    }

    #[test]
    fn test_from_number_round_trips_all_months() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()), Some(month));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_from_name_normalizes_case_and_whitespace() {
        assert_eq!(Month::from_name("mar"), Some(Month::Mar));
        assert_eq!(Month::from_name("  SEP\t"), Some(Month::Sep));
        assert_eq!(Month::from_name("oCT"), Some(Month::Oct));
    }

    #[test]
    fn test_full_month_names_are_not_mapped() {
        assert_eq!(Month::from_name("January"), None);
        assert_eq!(Month::from_name("Sept"), None);
        assert_eq!(Month::from_name(""), None);
    }

    #[test]
    fn test_normalize_month_name_title_cases_each_word() {
        assert_eq!(normalize_month_name(" aPRIL "), "April");
        assert_eq!(normalize_month_name("mid-jan"), "Mid-Jan");
    }

    #[test]
    fn test_unmapped_month_orders_first() {
        let unmapped = MonthKey::parse("Janvier");
        assert_eq!(unmapped.order(), 0);
        assert_eq!(unmapped.month(), None);
        assert_eq!(unmapped.label(), "Janvier");
        assert!(unmapped.order() < MonthKey::Known(Month::Jan).order());
    }

    #[test]
    fn test_month_key_serializes_as_name() {
        let json = serde_json::to_string(&MonthKey::Known(Month::Apr)).unwrap();
        assert_eq!(json, "\"Apr\"");

        let key: MonthKey = serde_json::from_str("\" feb\"").unwrap();
        assert_eq!(key, MonthKey::Known(Month::Feb));

        let key: MonthKey = serde_json::from_str("\"Thermidor\"").unwrap();
        assert_eq!(key, MonthKey::Unmapped("Thermidor".to_string()));
    }
}
