//! API Module
//!
//! HTTP handlers and routing for the cache remote-call surface.
//!
//! # Endpoints
//! - `POST /cache/get` - Fetch the entry for a key
//! - `POST /cache/put` - Store an entry
//! - `POST /cache/del` - Delete the entry for a key
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
