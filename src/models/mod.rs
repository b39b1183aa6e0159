//! Response models for the cache server API
//!
//! Requests and successful cache responses are `Entry` values; this module
//! holds the remaining HTTP bodies.

pub mod responses;

pub use responses::{ErrorResponse, HealthResponse};
