use axum::{Form, Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{LoginRequest, LoginResponse};
use super::service::AuthService;

/// Error body shape shared by all endpoints.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Login with email and password, receive a bearer token
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 404, description = "Unknown email or wrong password", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    Form(dto): Form<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}
