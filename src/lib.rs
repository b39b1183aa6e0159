//! mcache - A TLS-secured in-memory content cache server
//!
//! Clients store, fetch and delete named byte-content entries through three
//! remote calls. All calls on a store are serialized through one lock.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod server;

pub use api::AppState;
pub use cache::{CacheStore, Entry, Status};
pub use client::{CacheClient, ClientError};
pub use config::Config;
pub use error::CacheError;
