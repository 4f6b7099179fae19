//! HTTP API module for the Pay Revision Engine.
//!
//! This module provides the REST endpoints for running revisions on
//! caller-supplied records and on uploaded pay history data sets.

mod handlers;
mod request;
mod response;
mod state;
mod store;

pub use handlers::create_router;
pub use request::{DataSetRevisionRequest, RevisionRequest};
pub use response::{ApiError, ApiErrorResponse, DataSetSummary, RevisionResponse};
pub use state::AppState;
pub use store::DataSetStore;
