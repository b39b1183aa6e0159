//! API Handlers
//!
//! Remote-call handlers mapping each request onto a cache store operation.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use crate::cache::{CacheStore, Entry};
use crate::error::Result;
use crate::models::HealthResponse;

/// Application state shared across all handlers.
///
/// The store synchronizes internally, so handlers only need shared access.
#[derive(Clone, Default)]
pub struct AppState {
    /// Shared cache store
    pub cache: Arc<CacheStore>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }
}

/// Handler for POST /cache/get
///
/// Only the request's key is read; the rest of the entry is ignored.
pub async fn get_handler(
    State(state): State<AppState>,
    Json(req): Json<Entry>,
) -> Result<Json<Entry>> {
    let entry = state.cache.get(&req.key)?;
    Ok(Json(entry))
}

/// Handler for POST /cache/put
///
/// Stores the entry and returns it with status OK.
pub async fn put_handler(State(state): State<AppState>, Json(req): Json<Entry>) -> Json<Entry> {
    debug!(key = %req.key, size = req.size, "put");
    Json(state.cache.put(req))
}

/// Handler for POST /cache/del
///
/// Removes the key if present and echoes the request back.
pub async fn delete_handler(State(state): State<AppState>, Json(req): Json<Entry>) -> Json<Entry> {
    debug!(key = %req.key, "del");
    state.cache.delete(&req.key);
    Json(req)
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.cache.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Status;
    use crate::error::CacheError;

    fn hello_entry() -> Entry {
        Entry::new("foo.txt", "text/plain; charset=utf-8", "Hello World!")
    }

    #[tokio::test]
    async fn test_put_and_get_handler() {
        let state = AppState::default();
        let entry = hello_entry();

        let Json(stored) = put_handler(State(state.clone()), Json(entry.clone())).await;
        assert_eq!(stored.status, Status::Ok);

        let result = get_handler(State(state.clone()), Json(Entry::keyed("foo.txt"))).await;
        let Json(fetched) = result.unwrap();
        assert!(fetched.same_content(&entry));
        assert_eq!(fetched.status, Status::Ok);
    }

    #[tokio::test]
    async fn test_state_wraps_prefilled_store() {
        let store = CacheStore::new();
        store.put(hello_entry());
        let state = AppState::new(store);

        let result = get_handler(State(state.clone()), Json(Entry::keyed("foo.txt"))).await;
        assert_eq!(result.unwrap().content, b"Hello World!");
        assert_eq!(state.cache.len(), 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = AppState::default();

        let result = get_handler(State(state), Json(Entry::keyed("nonexistent"))).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_handler_echoes_request() {
        let state = AppState::default();
        put_handler(State(state.clone()), Json(hello_entry())).await;

        let request = Entry::keyed("foo.txt");
        let Json(echo) = delete_handler(State(state.clone()), Json(request.clone())).await;
        assert_eq!(echo, request);

        let result = get_handler(State(state), Json(Entry::keyed("foo.txt"))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_handler_missing_key() {
        let state = AppState::default();

        let Json(echo) = delete_handler(State(state.clone()), Json(Entry::keyed("ghost"))).await;
        assert_eq!(echo.key, "ghost");
        assert!(state.cache.is_empty());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let state = AppState::default();
        put_handler(State(state.clone()), Json(hello_entry())).await;

        let response = health_handler(State(state)).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.entries, 1);
    }
}
