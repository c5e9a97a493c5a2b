//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    products::{product_details, ranked_products},
    system::health,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/ranked-products",               get(ranked_products))
        .route("/product-details/{product_name}", get(product_details))
        .route("/health",                        get(health))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
