//! Application route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health_routes, roster_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::AppError;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(roster_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback for unknown routes
async fn not_found() -> AppError {
    AppError::NotFound
}
