//! Authorization guard for course-management actions.
//!
//! An action on a course is permitted iff the subject is the course creator
//! or holds the delegate role for it. Plain enrollment grants participation
//! only, never management. Consulted synchronously before every gated write.

use sqlx::PgPool;

use crate::utils::errors::AppError;

use super::model::Role;
use super::service::CourseService;

/// Decide whether `user_id` may manage `course_id`.
///
/// NotFound if the course is absent; Unauthorized with a stable detail on
/// denial. The creator is implicitly authorized regardless of membership.
pub async fn authorize_manager(
    db: &PgPool,
    course_id: i32,
    user_id: i32,
) -> Result<(), AppError> {
    let creator_id = sqlx::query_scalar::<_, i32>("SELECT creator_id FROM courses WHERE id = $1")
        .bind(course_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!(
                "Course with the id {} is not available",
                course_id
            ))
        })?;

    if creator_id == user_id {
        return Ok(());
    }

    match CourseService::membership_role(db, course_id, user_id).await? {
        Some(Role::Delegate) => Ok(()),
        _ => Err(AppError::unauthorized(
            "the user must be the course creator or a delegate!",
        )),
    }
}
