//! Header resolution for pay history sheets.

use csv::StringRecord;

use crate::error::{EngineError, EngineResult};

/// Column headings a pay history sheet must carry.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Employee No",
    "Name",
    "Status",
    "Year",
    "Month",
    "Pay Scale Group",
    "Basic",
    "HRA percentage",
    "HRA",
    "VDA",
    "Other Allowance",
];

/// Positions of the required columns within a sheet's header row.
///
/// Headers are matched after trimming whitespace; any other columns are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub(crate) employee_no: usize,
    pub(crate) name: usize,
    pub(crate) status: usize,
    pub(crate) year: usize,
    pub(crate) month: usize,
    pub(crate) pay_scale_group: usize,
    pub(crate) basic: usize,
    pub(crate) hra_pct: usize,
    pub(crate) hra: usize,
    pub(crate) vda: usize,
    pub(crate) other_allowance: usize,
}

impl ColumnMap {
    /// Resolves the required columns from a header row.
    ///
    /// Fails with [`EngineError::MissingColumn`] naming the first absent heading.
    pub fn from_headers(headers: &StringRecord) -> EngineResult<Self> {
        let find = |column: &str| -> EngineResult<usize> {
            headers
                .iter()
                .position(|header| header.trim() == column)
                .ok_or_else(|| EngineError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            employee_no: find("Employee No")?,
            name: find("Name")?,
            status: find("Status")?,
            year: find("Year")?,
            month: find("Month")?,
            pay_scale_group: find("Pay Scale Group")?,
            basic: find("Basic")?,
            hra_pct: find("HRA percentage")?,
            hra: find("HRA")?,
            vda: find("VDA")?,
            other_allowance: find("Other Allowance")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_columns_in_any_order() {
        let headers = StringRecord::from(vec![
            "Name",
            " Employee No ",
            "Remarks",
            "Status",
            "Year",
            "Month",
            "Pay Scale Group",
            "Basic",
            "HRA",
            "HRA percentage",
            "VDA",
            "Other Allowance",
        ]);
        let map = ColumnMap::from_headers(&headers).unwrap();

        assert_eq!(map.employee_no, 1);
        assert_eq!(map.name, 0);
        assert_eq!(map.hra, 8);
        assert_eq!(map.hra_pct, 9);
    }

    #[test]
    fn test_missing_column_is_named() {
        let headers = StringRecord::from(vec!["Employee No", "Name", "Status", "Year"]);
        let err = ColumnMap::from_headers(&headers).unwrap_err();

        match err {
            EngineError::MissingColumn { column } => assert_eq!(column, "Month"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_required_columns_all_resolve() {
        let headers = StringRecord::from(REQUIRED_COLUMNS.to_vec());
        assert!(ColumnMap::from_headers(&headers).is_ok());
    }
}
