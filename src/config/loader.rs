//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading revision
//! policy tables from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Grade;

use super::types::{DaSchedule, RevisionTables};

/// The file name read from a configuration directory.
pub const TABLES_FILE: &str = "revision.yaml";

/// Loads and provides access to revision policy tables.
///
/// # Directory Structure
///
/// ```text
/// config/prc3/
/// └── revision.yaml   # grade_minimums + da_schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_revision_engine::config::ConfigLoader;
/// use pay_revision_engine::models::Grade;
///
/// let loader = ConfigLoader::load("./config/prc3").unwrap();
/// let minimum = loader.grade_minimum(Grade::E3);
/// println!("E3 minimum: {:?}", minimum);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    tables: RevisionTables,
}

impl ConfigLoader {
    /// Loads policy tables from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `revision.yaml` is missing (`ConfigNotFound`)
    /// - the file is not valid YAML, names an unknown grade, or has an
    ///   empty DA schedule (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file = path.as_ref().join(TABLES_FILE);
        let tables = Self::load_yaml(&file)?;
        debug!(
            path = %file.display(),
            grades = tables.grade_minimums.len(),
            da_months = tables.da_schedule.rates.len(),
            "Loaded revision tables"
        );
        Ok(Self { tables })
    }

    /// Returns a loader holding the built-in tables.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Wraps already-constructed tables, e.g. test fixtures.
    pub fn from_tables(tables: RevisionTables) -> Self {
        Self { tables }
    }

    fn load_yaml(path: &Path) -> EngineResult<RevisionTables> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content).map_err(|message| EngineError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Parses policy tables from YAML text.
    pub fn parse(content: &str) -> Result<RevisionTables, String> {
        let tables: RevisionTables = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        if tables.da_schedule.rates.is_empty() {
            return Err("da_schedule.rates must not be empty".to_string());
        }
        if let Some((grade, minimum)) = tables
            .grade_minimums
            .iter()
            .find(|(_, minimum)| **minimum < Decimal::ZERO)
        {
            return Err(format!("grade minimum for {} is negative: {}", grade, minimum));
        }
        Ok(tables)
    }

    /// Returns the loaded tables.
    pub fn tables(&self) -> &RevisionTables {
        &self.tables
    }

    /// Returns the DA schedule.
    pub fn da_schedule(&self) -> &DaSchedule {
        &self.tables.da_schedule
    }

    /// Gets the minimum basic pay for a grade.
    pub fn grade_minimum(&self, grade: Grade) -> Option<Decimal> {
        self.tables.grade_minimum(grade)
    }

    /// Consumes the loader, returning its tables.
    pub fn into_tables(self) -> RevisionTables {
        self.tables
    }
}
