//! Pay-scale grade model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A pay-scale grade prefix ("E1".."E9").
///
/// The grade is the first two characters of a pay scale group code, so
/// `"E3A"` and `"E3-B"` both belong to grade [`Grade::E3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Grade E1.
    E1,
    /// Grade E2.
    E2,
    /// Grade E3.
    E3,
    /// Grade E4.
    E4,
    /// Grade E5.
    E5,
    /// Grade E6.
    E6,
    /// Grade E7.
    E7,
    /// Grade E8.
    E8,
    /// Grade E9.
    E9,
}

impl Grade {
    /// All grades in ascending order.
    pub const ALL: [Grade; 9] = [
        Grade::E1,
        Grade::E2,
        Grade::E3,
        Grade::E4,
        Grade::E5,
        Grade::E6,
        Grade::E7,
        Grade::E8,
        Grade::E9,
    ];

    /// Returns the prefix code for this grade.
    pub fn code(self) -> &'static str {
        match self {
            Grade::E1 => "E1",
            Grade::E2 => "E2",
            Grade::E3 => "E3",
            Grade::E4 => "E4",
            Grade::E5 => "E5",
            Grade::E6 => "E6",
            Grade::E7 => "E7",
            Grade::E8 => "E8",
            Grade::E9 => "E9",
        }
    }

    /// Derives the grade from a pay scale group code.
    ///
    /// Matching is exact on the first two characters; unknown prefixes
    /// (including lower-case ones) yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_revision_engine::models::Grade;
    ///
    /// assert_eq!(Grade::from_group("E3"), Some(Grade::E3));
    /// assert_eq!(Grade::from_group(" E7A "), Some(Grade::E7));
    /// assert_eq!(Grade::from_group("S1"), None);
    /// ```
    pub fn from_group(group: &str) -> Option<Grade> {
        let prefix: String = group.trim().chars().take(2).collect();
        Self::ALL.iter().copied().find(|grade| grade.code() == prefix)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_from_exact_group() {
        for grade in Grade::ALL {
            assert_eq!(Grade::from_group(grade.code()), Some(grade));
        }
    }

    #[test]
    fn test_grade_uses_first_two_characters() {
        assert_eq!(Grade::from_group("E1-Trainee"), Some(Grade::E1));
        assert_eq!(Grade::from_group("E9X"), Some(Grade::E9));
    }

    #[test]
    fn test_unknown_prefixes_have_no_grade() {
        assert_eq!(Grade::from_group("W2"), None);
        assert_eq!(Grade::from_group("e3"), None);
        assert_eq!(Grade::from_group("E"), None);
        assert_eq!(Grade::from_group(""), None);
    }

    #[test]
    fn test_grade_deserializes_from_code() {
        let grade: Grade = serde_yaml::from_str("E4").unwrap();
        assert_eq!(grade, Grade::E4);
    }
}
