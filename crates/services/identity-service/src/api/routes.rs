//! Application route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::user_routes;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1/users", user_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
