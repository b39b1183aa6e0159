//! API Routes
//!
//! Configures the Axum router with the cache remote-call endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{delete_handler, get_handler, health_handler, put_handler, AppState};

/// Largest accepted request body.
///
/// Covers a 4 MiB entry content after base64 inflation plus JSON framing.
pub const MAX_REQUEST_BODY: usize = 8 * 1024 * 1024;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /cache/get` - Fetch the entry for a key
/// - `POST /cache/put` - Store an entry
/// - `POST /cache/del` - Delete the entry for a key
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
/// - Body limit: [`MAX_REQUEST_BODY`] bytes per request
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache/get", post(get_handler))
        .route("/cache/put", post(put_handler))
        .route("/cache/del", post(delete_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
