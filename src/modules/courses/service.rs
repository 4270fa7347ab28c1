use sqlx::PgPool;
use tracing::instrument;

use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;

use super::model::{Course, CourseWithCreator, CreateCourseDto, Inscription, Role};

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(
        db: &PgPool,
        dto: CreateCourseDto,
        creator_id: i32,
    ) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (name, description, creator_id)
             VALUES ($1, $2, $3)
             RETURNING id, name, description",
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(creator_id)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    pub async fn list_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses =
            sqlx::query_as::<_, Course>("SELECT id, name, description FROM courses ORDER BY id")
                .fetch_all(db)
                .await?;

        Ok(courses)
    }

    pub async fn find_course(db: &PgPool, course_id: i32) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>("SELECT id, name, description FROM courses WHERE id = $1")
            .bind(course_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Course with the id {} is not available",
                    course_id
                ))
            })
    }

    #[instrument(skip(db))]
    pub async fn get_course_with_creator(
        db: &PgPool,
        course_id: i32,
    ) -> Result<CourseWithCreator, AppError> {
        #[derive(sqlx::FromRow)]
        struct CourseCreatorRow {
            id: i32,
            name: String,
            description: String,
            creator_id: i32,
            creator_name: String,
            creator_email: String,
        }

        let row = sqlx::query_as::<_, CourseCreatorRow>(
            "SELECT c.id, c.name, c.description,
                    u.id AS creator_id, u.name AS creator_name, u.email AS creator_email
             FROM courses c
             JOIN users u ON u.id = c.creator_id
             WHERE c.id = $1",
        )
        .bind(course_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!(
                "Course with the id {} is not available",
                course_id
            ))
        })?;

        Ok(CourseWithCreator {
            id: row.id,
            name: row.name,
            description: row.description,
            creator: User {
                id: row.creator_id,
                name: row.creator_name,
                email: row.creator_email,
            },
        })
    }

    /// Enroll a user into a course with the baseline role.
    ///
    /// Re-enrolling an existing member preserves the current role, so a
    /// delegate is never demoted by a repeated enrollment. The conflict arm
    /// keeps the whole operation a single statement and returns the existing
    /// row; the composite primary key guarantees one row per (course, user).
    #[instrument(skip(db))]
    pub async fn enroll_by_id(
        db: &PgPool,
        course_id: i32,
        user_id: i32,
    ) -> Result<Inscription, AppError> {
        Self::find_course(db, course_id).await?;
        UserService::find_by_id(db, user_id).await?;

        let inscription = sqlx::query_as::<_, Inscription>(
            "INSERT INTO inscriptions (course_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (course_id, user_id) DO UPDATE SET role = inscriptions.role
             RETURNING course_id, user_id, role",
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_one(db)
        .await?;

        Ok(inscription)
    }

    #[instrument(skip(db))]
    pub async fn enroll_by_email(
        db: &PgPool,
        course_id: i32,
        email: &str,
    ) -> Result<Inscription, AppError> {
        // Email resolution comes first; its NotFound detail names the email.
        let user = UserService::find_by_email(db, email).await?;

        Self::enroll_by_id(db, course_id, user.id).await
    }

    /// Promote an enrolled user to delegate.
    ///
    /// The precondition check and the role mutation are a single conditional
    /// UPDATE so the check-then-write cannot race a concurrent enrollment
    /// change on the same (course, user) pair. No matching row means the
    /// user was not enrolled; no row is ever created here.
    #[instrument(skip(db))]
    pub async fn delegate(
        db: &PgPool,
        course_id: i32,
        user_id: i32,
    ) -> Result<Inscription, AppError> {
        Self::find_course(db, course_id).await?;
        UserService::find_by_id(db, user_id).await?;

        sqlx::query_as::<_, Inscription>(
            "UPDATE inscriptions SET role = 'delegate'
             WHERE course_id = $1 AND user_id = $2
             RETURNING course_id, user_id, role",
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::bad_request("the user must be enrolled!"))
    }

    /// Pure membership lookup; `None` means no row for the pair.
    pub async fn membership_role(
        db: &PgPool,
        course_id: i32,
        user_id: i32,
    ) -> Result<Option<Role>, AppError> {
        let role = sqlx::query_scalar::<_, Role>(
            "SELECT role FROM inscriptions WHERE course_id = $1 AND user_id = $2",
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;

        Ok(role)
    }
}
