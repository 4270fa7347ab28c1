use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateUserDto, User, UserWithRelations};
use super::service::UserService;
use crate::modules::auth::controller::ErrorResponse;

/// Create a new user
#[utoipa::path(
    post,
    path = "/user/",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created successfully", body = User),
        (status = 400, description = "Bad request - email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::create_user(&state.db, dto).await?;
    Ok(Json(user))
}

/// Get a user by email, with created courses and memberships
#[utoipa::path(
    get,
    path = "/user/byemail/{email}",
    params(
        ("email" = String, Path, description = "Email of the user to look up")
    ),
    responses(
        (status = 200, description = "User found", body = UserWithRelations),
        (status = 404, description = "No user with that email", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserWithRelations>, AppError> {
    let user = UserService::get_user_with_relations(&state.db, &email).await?;
    Ok(Json(user))
}
