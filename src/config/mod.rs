//! Policy table loading for the Pay Revision Engine.
//!
//! This module provides the grade minimum and dearness allowance tables,
//! either built in or loaded from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use pay_revision_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/prc3").unwrap();
//! println!("DA months tabulated: {}", config.da_schedule().rates.len());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, TABLES_FILE};
pub use types::{DaSchedule, RevisionTables};
