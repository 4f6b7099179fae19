//! Pay history loaded from a tabular export.

use std::collections::HashSet;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeIdentity, MonthKey, PayRecord, parse_amount, parse_year};

use super::columns::ColumnMap;

/// A set of monthly pay records, possibly covering several employees.
///
/// # Example
///
/// ```
/// use pay_revision_engine::source::PayHistory;
///
/// let csv = "Employee No,Name,Status,Year,Month,Pay Scale Group,Basic,HRA percentage,HRA,VDA,Other Allowance\n\
///            1001,A. Kumar,Regular,2020,Jan,E3,\"50,000\",20,10000,5000,5000\n";
/// let history = PayHistory::from_csv_str(csv).unwrap();
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.employees()[0].name, "A. Kumar");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayHistory {
    records: Vec<PayRecord>,
}

impl PayHistory {
    /// Wraps already-typed records.
    pub fn from_records(records: Vec<PayRecord>) -> Self {
        Self { records }
    }

    /// Parses a CSV pay history from any reader.
    ///
    /// The first row must be the header. Either every row converts or the
    /// whole load fails.
    pub fn from_csv_reader<R: Read>(reader: R) -> EngineResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| EngineError::SourceRead {
                message: e.to_string(),
            })?
            .clone();
        let columns = ColumnMap::from_headers(&headers)?;

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let row = result.map_err(|e| EngineError::SourceRead {
                message: e.to_string(),
            })?;
            if row.iter().all(|cell| cell.is_empty()) {
                continue;
            }
            records.push(parse_row(&row, &columns, index + 1)?);
        }

        debug!(records = records.len(), "Loaded pay history");
        Ok(Self { records })
    }

    /// Parses a CSV pay history held in memory.
    pub fn from_csv_str(text: &str) -> EngineResult<Self> {
        Self::from_csv_reader(text.as_bytes())
    }

    /// Returns all records in source order.
    pub fn records(&self) -> &[PayRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the history holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lists each distinct employee once, in order of first appearance.
    pub fn employees(&self) -> Vec<EmployeeIdentity> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|record| seen.insert(record.employee_no.trim()))
            .map(PayRecord::identity)
            .collect()
    }

    /// Returns copies of one employee's records, in source order.
    pub fn records_for_employee(&self, employee_no: &str) -> Vec<PayRecord> {
        let wanted = employee_no.trim();
        self.records
            .iter()
            .filter(|record| record.employee_no.trim() == wanted)
            .cloned()
            .collect()
    }
}

fn cell<'r>(row: &'r StringRecord, index: usize) -> &'r str {
    row.get(index).unwrap_or("")
}

fn malformed(row: usize, field: &str, message: impl Into<String>) -> EngineError {
    EngineError::MalformedRecord {
        row,
        field: field.to_string(),
        message: message.into(),
    }
}

fn amount(row: &StringRecord, index: usize, row_number: usize, field: &str) -> EngineResult<Decimal> {
    parse_amount(cell(row, index)).map_err(|message| malformed(row_number, field, message))
}

fn parse_row(row: &StringRecord, columns: &ColumnMap, row_number: usize) -> EngineResult<PayRecord> {
    let employee_no = cell(row, columns.employee_no);
    if employee_no.is_empty() {
        return Err(malformed(row_number, "Employee No", "value is empty"));
    }

    let month = cell(row, columns.month);
    if month.is_empty() {
        return Err(malformed(row_number, "Month", "value is empty"));
    }

    let year = parse_year(cell(row, columns.year))
        .map_err(|message| malformed(row_number, "Year", message))?;

    Ok(PayRecord {
        employee_no: employee_no.to_string(),
        name: cell(row, columns.name).to_string(),
        status: cell(row, columns.status).to_string(),
        year,
        month: MonthKey::parse(month),
        pay_scale_group: cell(row, columns.pay_scale_group).to_string(),
        basic: amount(row, columns.basic, row_number, "Basic")?,
        vda: amount(row, columns.vda, row_number, "VDA")?,
        hra_pct: amount(row, columns.hra_pct, row_number, "HRA percentage")?,
        hra: amount(row, columns.hra, row_number, "HRA")?,
        other_allowance: amount(row, columns.other_allowance, row_number, "Other Allowance")?,
    })
}
