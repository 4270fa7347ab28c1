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

use super::model::{Course, CourseWithCreator, CreateCourseDto};
use super::service::CourseService;

/// Create a course; the authenticated subject becomes its creator
#[utoipa::path(
    post,
    path = "/course/",
    request_body = CreateCourseDto,
    responses(
        (status = 200, description = "Course created successfully", body = Course),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, subject, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    subject: AuthSubject,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<Json<Course>, AppError> {
    // A valid token whose subject no longer exists is not an authenticated user.
    let creator = UserService::find_by_email_opt(&state.db, subject.email())
        .await?
        .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

    let course = CourseService::create_course(&state.db, dto, creator.id).await?;
    Ok(Json(course))
}

/// List all courses
#[utoipa::path(
    get,
    path = "/course/",
    responses(
        (status = 200, description = "All courses", body = Vec<Course>)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Get a course with its creator
#[utoipa::path(
    get,
    path = "/course/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseWithCreator),
        (status = 404, description = "No course with that id", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<CourseWithCreator>, AppError> {
    let course = CourseService::get_course_with_creator(&state.db, course_id).await?;
    Ok(Json(course))
}

/// Enroll a user into a course by user id
#[utoipa::path(
    post,
    path = "/course/{course_id}/enroll/by_id/{user_id}",
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User enrolled", body = String),
        (status = 404, description = "Course or user missing", body = ErrorResponse)
    ),
    tag = "Enrollment"
)]
#[instrument(skip(state))]
pub async fn enroll_by_id(
    State(state): State<AppState>,
    Path((course_id, user_id)): Path<(i32, i32)>,
) -> Result<Json<&'static str>, AppError> {
    CourseService::enroll_by_id(&state.db, course_id, user_id).await?;
    Ok(Json("done"))
}

/// Enroll a user into a course by email
#[utoipa::path(
    post,
    path = "/course/{course_id}/enroll/by_email/{email}",
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "User enrolled", body = String),
        (status = 404, description = "Course or user missing", body = ErrorResponse)
    ),
    tag = "Enrollment"
)]
#[instrument(skip(state))]
pub async fn enroll_by_email(
    State(state): State<AppState>,
    Path((course_id, email)): Path<(i32, String)>,
) -> Result<Json<&'static str>, AppError> {
    CourseService::enroll_by_email(&state.db, course_id, &email).await?;
    Ok(Json("done"))
}

/// Promote an enrolled user to delegate
#[utoipa::path(
    post,
    path = "/course/{course_id}/delegate/{user_id}",
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User promoted to delegate", body = String),
        (status = 400, description = "User is not enrolled", body = ErrorResponse),
        (status = 404, description = "Course or user missing", body = ErrorResponse)
    ),
    tag = "Enrollment"
)]
#[instrument(skip(state))]
pub async fn delegate(
    State(state): State<AppState>,
    Path((course_id, user_id)): Path<(i32, i32)>,
) -> Result<Json<&'static str>, AppError> {
    CourseService::delegate(&state.db, course_id, user_id).await?;
    Ok(Json("done"))
}
