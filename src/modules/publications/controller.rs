use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::middleware::auth::AuthSubject;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreatePublicationDto, Publication};
use super::service::PublicationService;

/// Create a publication in a course (creator or delegate only)
#[utoipa::path(
    post,
    path = "/course/{course_id}/publication/",
    params(
        ("course_id" = i32, Path, description = "Course id")
    ),
    request_body = CreatePublicationDto,
    responses(
        (status = 200, description = "Publication created", body = Publication),
        (status = 401, description = "Subject is neither creator nor delegate", body = ErrorResponse),
        (status = 404, description = "Course missing", body = ErrorResponse),
        (status = 422, description = "Invalid evaluation fields", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Publications"
)]
#[instrument(skip(state, subject, dto))]
pub async fn create_publication(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    subject: AuthSubject,
    ValidatedJson(dto): ValidatedJson<CreatePublicationDto>,
) -> Result<Json<Publication>, AppError> {
    let user = UserService::find_by_email_opt(&state.db, subject.email())
        .await?
        .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

    let publication =
        PublicationService::create_publication(&state.db, course_id, user.id, dto).await?;
    Ok(Json(publication))
}

/// List a course's publications
#[utoipa::path(
    get,
    path = "/course/{course_id}/publication/",
    params(
        ("course_id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Publications of the course", body = Vec<Publication>),
        (status = 404, description = "Course missing", body = ErrorResponse)
    ),
    tag = "Publications"
)]
#[instrument(skip(state))]
pub async fn list_publications(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<Vec<Publication>>, AppError> {
    let publications = PublicationService::list_publications(&state.db, course_id).await?;
    Ok(Json(publications))
}

/// Get a single publication
#[utoipa::path(
    get,
    path = "/course/{course_id}/publication/{publication_id}",
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("publication_id" = i32, Path, description = "Publication id")
    ),
    responses(
        (status = 200, description = "Publication found", body = Publication),
        (status = 404, description = "No such publication in the course", body = ErrorResponse)
    ),
    tag = "Publications"
)]
#[instrument(skip(state))]
pub async fn get_publication(
    State(state): State<AppState>,
    Path((course_id, publication_id)): Path<(i32, i32)>,
) -> Result<Json<Publication>, AppError> {
    let publication =
        PublicationService::get_publication(&state.db, course_id, publication_id).await?;
    Ok(Json(publication))
}
