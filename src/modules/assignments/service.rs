use sqlx::PgPool;
use tracing::instrument;

use crate::modules::courses::guard::authorize_manager;
use crate::modules::courses::service::CourseService;
use crate::utils::errors::AppError;

use super::model::{Assignment, CreateAssignmentDto};

pub struct AssignmentService;

impl AssignmentService {
    /// Create an assignment; gated on the subject being creator or delegate.
    #[instrument(skip(db, dto))]
    pub async fn create_assignment(
        db: &PgPool,
        course_id: i32,
        subject_user_id: i32,
        dto: CreateAssignmentDto,
    ) -> Result<Assignment, AppError> {
        authorize_manager(db, course_id, subject_user_id).await?;

        let assignment = sqlx::query_as::<_, Assignment>(
            "INSERT INTO assignments (title, description, date, time, type, course_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, title, description, date, time, type, course_id",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.date)
        .bind(dto.time)
        .bind(dto.kind)
        .bind(course_id)
        .fetch_one(db)
        .await?;

        Ok(assignment)
    }

    /// Open read, scoped by course.
    pub async fn list_assignments(
        db: &PgPool,
        course_id: i32,
    ) -> Result<Vec<Assignment>, AppError> {
        CourseService::find_course(db, course_id).await?;

        let assignments = sqlx::query_as::<_, Assignment>(
            "SELECT id, title, description, date, time, type, course_id
             FROM assignments WHERE course_id = $1 ORDER BY id",
        )
        .bind(course_id)
        .fetch_all(db)
        .await?;

        Ok(assignments)
    }

    pub async fn get_assignment(
        db: &PgPool,
        course_id: i32,
        assignment_id: i32,
    ) -> Result<Assignment, AppError> {
        sqlx::query_as::<_, Assignment>(
            "SELECT id, title, description, date, time, type, course_id
             FROM assignments WHERE id = $1 AND course_id = $2",
        )
        .bind(assignment_id)
        .bind(course_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!(
                "Assignment with the id {} is not available",
                assignment_id
            ))
        })
    }
}
