//! Application state for the Pay Revision Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, RevisionTables};

use super::store::DataSetStore;

/// Shared application state.
///
/// Holds the policy tables loaded at startup and the uploaded data sets.
#[derive(Clone)]
pub struct AppState {
    /// The loaded policy tables.
    tables: Arc<RevisionTables>,
    /// Uploaded pay histories.
    data_sets: DataSetStore,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            tables: Arc::new(config.into_tables()),
            data_sets: DataSetStore::new(),
        }
    }

    /// Returns the policy tables.
    pub fn tables(&self) -> &RevisionTables {
        &self.tables
    }

    /// Returns the data set store.
    pub fn data_sets(&self) -> &DataSetStore {
        &self.data_sets
    }
}
