//! HTTP API Module
//!
//! The transport layer: routing, request handlers, error translation and
//! documentation endpoints.
//!
//! ## Submodules
//! - **`handlers`**: Axum request handlers for the CRUD routes plus the
//!   root/health endpoints and the request-logging middleware.
//! - **`error`**: The standardized `{erro, mensagem, detalhes?}` envelope
//!   and the domain-error / panic translation into HTTP responses.
//! - **`docs`**: OpenAPI 3.0 document and the Swagger UI page.

pub mod docs;
pub mod error;
pub mod handlers;


use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Extension,
    middleware,
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::pets::service::PetService;
use handlers::AppInfo;

/// Assembles the application router with every route and middleware layer.
///
/// The service is injected so tests can build isolated applications around
/// their own stores.
pub fn router(service: Arc<PetService>) -> Router {
    let info = Arc::new(AppInfo {
        started_at: Instant::now(),
    });

    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health))
        .route("/api-docs", get(docs::swagger_ui))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .route(
            "/pets",
            get(handlers::list_pets).post(handlers::create_pet),
        )
        .route(
            "/pets/:id",
            get(handlers::get_pet)
                .put(handlers::update_pet)
                .delete(handlers::delete_pet),
        )
        .layer(Extension(service))
        .layer(Extension(info))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(middleware::from_fn(handlers::log_requests))
        .layer(CorsLayer::permissive())
}
