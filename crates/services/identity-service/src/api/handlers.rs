//! Users API handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use common::AppResult;

use super::dto::{LoginRequest, LoginResponse, RegisterRequest, RegistrationResponse};
use super::extractors::ValidatedJson;
use super::AppState;

/// Create users routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegistrationResponse>)> {
    let command = payload.into_command()?;
    let user = state.registration_service.register(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::new(user.email())),
    ))
}

/// Login and get JWT token
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let command = payload.into_command()?;
    let token = state.login_service.login(command).await?;

    Ok(Json(LoginResponse::from(token)))
}
