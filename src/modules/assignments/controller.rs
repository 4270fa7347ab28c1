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

use super::model::{Assignment, CreateAssignmentDto};
use super::service::AssignmentService;

/// Create an assignment in a course (creator or delegate only)
#[utoipa::path(
    post,
    path = "/course/{course_id}/assignment/",
    params(
        ("course_id" = i32, Path, description = "Course id")
    ),
    request_body = CreateAssignmentDto,
    responses(
        (status = 200, description = "Assignment created", body = Assignment),
        (status = 401, description = "Subject is neither creator nor delegate", body = ErrorResponse),
        (status = 404, description = "Course missing", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, subject, dto))]
pub async fn create_assignment(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    subject: AuthSubject,
    ValidatedJson(dto): ValidatedJson<CreateAssignmentDto>,
) -> Result<Json<Assignment>, AppError> {
    let user = UserService::find_by_email_opt(&state.db, subject.email())
        .await?
        .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

    let assignment =
        AssignmentService::create_assignment(&state.db, course_id, user.id, dto).await?;
    Ok(Json(assignment))
}

/// List a course's assignments
#[utoipa::path(
    get,
    path = "/course/{course_id}/assignment/",
    params(
        ("course_id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Assignments of the course", body = Vec<Assignment>),
        (status = 404, description = "Course missing", body = ErrorResponse)
    ),
    tag = "Assignments"
)]
#[instrument(skip(state))]
pub async fn list_assignments(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let assignments = AssignmentService::list_assignments(&state.db, course_id).await?;
    Ok(Json(assignments))
}

/// Get a single assignment
#[utoipa::path(
    get,
    path = "/course/{course_id}/assignment/{assignment_id}",
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("assignment_id" = i32, Path, description = "Assignment id")
    ),
    responses(
        (status = 200, description = "Assignment found", body = Assignment),
        (status = 404, description = "No such assignment in the course", body = ErrorResponse)
    ),
    tag = "Assignments"
)]
#[instrument(skip(state))]
pub async fn get_assignment(
    State(state): State<AppState>,
    Path((course_id, assignment_id)): Path<(i32, i32)>,
) -> Result<Json<Assignment>, AppError> {
    let assignment = AssignmentService::get_assignment(&state.db, course_id, assignment_id).await?;
    Ok(Json(assignment))
}
