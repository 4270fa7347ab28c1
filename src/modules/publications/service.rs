use sqlx::PgPool;
use tracing::instrument;

use crate::modules::courses::guard::authorize_manager;
use crate::modules::courses::service::CourseService;
use crate::utils::errors::AppError;

use super::model::{CreatePublicationDto, Publication, PublicationRow};

const PUBLICATION_COLUMNS: &str = "id, title, description, date, time, type, course_id, \
     evaluation_date_max, evaluation_time_max, evaluation_score_max, evaluation_group";

pub struct PublicationService;

impl PublicationService {
    /// Create a publication, with its evaluation stored embedded if supplied.
    /// Gated on the subject being creator or delegate of the course.
    #[instrument(skip(db, dto))]
    pub async fn create_publication(
        db: &PgPool,
        course_id: i32,
        subject_user_id: i32,
        dto: CreatePublicationDto,
    ) -> Result<Publication, AppError> {
        authorize_manager(db, course_id, subject_user_id).await?;

        let evaluation = dto.evaluation;

        let row = sqlx::query_as::<_, PublicationRow>(&format!(
            "INSERT INTO publications
                 (title, description, date, time, type, course_id,
                  evaluation_date_max, evaluation_time_max, evaluation_score_max, evaluation_group)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {PUBLICATION_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.date)
        .bind(dto.time)
        .bind(dto.kind)
        .bind(course_id)
        .bind(evaluation.as_ref().map(|e| e.date_max))
        .bind(evaluation.as_ref().map(|e| e.time_max))
        .bind(evaluation.as_ref().map(|e| e.score_max))
        .bind(evaluation.as_ref().map(|e| e.group))
        .fetch_one(db)
        .await?;

        Ok(row.into())
    }

    /// Open read, scoped by course.
    pub async fn list_publications(
        db: &PgPool,
        course_id: i32,
    ) -> Result<Vec<Publication>, AppError> {
        CourseService::find_course(db, course_id).await?;

        let rows = sqlx::query_as::<_, PublicationRow>(&format!(
            "SELECT {PUBLICATION_COLUMNS} FROM publications WHERE course_id = $1 ORDER BY id"
        ))
        .bind(course_id)
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(Publication::from).collect())
    }

    pub async fn get_publication(
        db: &PgPool,
        course_id: i32,
        publication_id: i32,
    ) -> Result<Publication, AppError> {
        let row = sqlx::query_as::<_, PublicationRow>(&format!(
            "SELECT {PUBLICATION_COLUMNS} FROM publications WHERE id = $1 AND course_id = $2"
        ))
        .bind(publication_id)
        .bind(course_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!(
                "Publication with the id {} is not available",
                publication_id
            ))
        })?;

        Ok(row.into())
    }
}
