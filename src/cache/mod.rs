//! Cache Module
//!
//! Provides the entry type and the concurrency-safe in-memory store.

mod entry;
mod store;


#[cfg(test)]
mod concurrency_tests;

// Re-export public types
pub use entry::{Entry, Status};
pub use store::CacheStore;
