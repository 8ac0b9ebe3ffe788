//! HTTP layer - routes, handlers, request/response shapes.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
