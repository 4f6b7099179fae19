//! Error types for the Pay Revision Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading pay history,
//! loading policy tables, or serving revision requests.

use thiserror::Error;

/// The main error type for the Pay Revision Engine.
///
/// The revision calculation itself is infallible once records are typed;
/// every variant here originates at a boundary (data source, configuration,
/// session store or request validation).
///
/// # Example
///
/// ```
/// use pay_revision_engine::error::EngineError;
///
/// let error = EngineError::MissingColumn {
///     column: "Basic".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required column missing from pay history: Basic");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A pay record field was missing or could not be converted.
    #[error("Malformed pay record at row {row}, field '{field}': {message}")]
    MalformedRecord {
        /// The 1-based data row the field was read from.
        row: usize,
        /// The name of the offending field.
        field: String,
        /// A description of the conversion failure.
        message: String,
    },

    /// A required column was not present in the tabular pay history.
    #[error("Required column missing from pay history: {column}")]
    MissingColumn {
        /// The column header that was not found.
        column: String,
    },

    /// The pay history source could not be read.
    #[error("Failed to read pay history: {message}")]
    SourceRead {
        /// A description of the read failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No uploaded data set exists for the given identifier.
    #[error("Data set not found: {id}")]
    DataSetNotFound {
        /// The data set identifier that was not found.
        id: String,
    },

    /// The data set holds no records for the requested employee.
    #[error("Employee not found: {employee_no}")]
    EmployeeNotFound {
        /// The employee number that was requested.
        employee_no: String,
    },

    /// A revision policy value was rejected.
    #[error("Invalid revision policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_displays_row_and_field() {
        let error = EngineError::MalformedRecord {
            row: 3,
            field: "Basic".to_string(),
            message: "invalid amount 'abc'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed pay record at row 3, field 'Basic': invalid amount 'abc'"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_data_set_not_found_displays_id() {
        let error = EngineError::DataSetNotFound {
            id: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Data set not found: abc");
    }

    #[test]
    fn test_invalid_policy_displays_field_and_message() {
        let error = EngineError::InvalidPolicy {
            field: "fitment_pct".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid revision policy field 'fitment_pct': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_column() -> EngineResult<()> {
            Err(EngineError::MissingColumn {
                column: "Year".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_column()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
