use crate::health;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router() -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        // The browser UI is served from another origin in development
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
