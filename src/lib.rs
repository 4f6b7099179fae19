//! Pay Revision Engine for PRC fitment modelling
//!
//! This crate recalculates an employee's monthly pay under a revised pay
//! structure (fitment, dearness allowance schedule, HRA tiers and other
//! allowance) and reports the arrears against what was originally paid,
//! month by month and per April–March financial year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod source;
