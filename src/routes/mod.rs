use axum::{Router, http::Uri, routing::get};

use crate::{error::AppError, state::AppState};

pub mod doc;
pub mod health;
pub mod orders;
pub mod pages;
pub mod params;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new().nest("/products", products::router())
}

/// All application routes, without middleware layers.
pub fn create_app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::landing_page))
        .route("/health", get(health::health_check))
        .route("/version", get(health::version))
        .merge(orders::router())
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = uri.path(), "no route");
    AppError::NotFound
}
