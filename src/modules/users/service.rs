use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

use super::model::{CreateUserDto, InscriptionInfo, User, UserWithRelations};
use crate::modules::courses::model::{Course, Role};

pub struct UserService;

impl UserService {
    /// Create a user. Email uniqueness rides on the `users.email` constraint
    /// rather than a separate lookup, so two concurrent registrations cannot
    /// both pass a pre-check; the loser's unique violation maps to the same
    /// client error.
    #[instrument(skip(db, dto))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let result = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password)
             VALUES ($1, $2, $3)
             RETURNING id, name, email",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AppError::bad_request("Email already exists"))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_email_opt(db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(db)
            .await?;

        Ok(user)
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<User, AppError> {
        Self::find_by_email_opt(db, email).await?.ok_or_else(|| {
            AppError::not_found(format!(
                "User with the email {} is not available",
                email
            ))
        })
    }

    pub async fn find_by_id(db: &PgPool, user_id: i32) -> Result<User, AppError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("User with the id {} is not available", user_id))
            })
    }

    /// User view with created courses and memberships, each relation loaded
    /// by its own query.
    #[instrument(skip(db))]
    pub async fn get_user_with_relations(
        db: &PgPool,
        email: &str,
    ) -> Result<UserWithRelations, AppError> {
        let user = Self::find_by_email(db, email).await?;

        let courses_created = sqlx::query_as::<_, Course>(
            "SELECT id, name, description FROM courses WHERE creator_id = $1 ORDER BY id",
        )
        .bind(user.id)
        .fetch_all(db)
        .await?;

        #[derive(sqlx::FromRow)]
        struct InscriptionRow {
            id: i32,
            name: String,
            description: String,
            role: Role,
        }

        let inscriptions = sqlx::query_as::<_, InscriptionRow>(
            "SELECT c.id, c.name, c.description, i.role
             FROM inscriptions i
             JOIN courses c ON c.id = i.course_id
             WHERE i.user_id = $1
             ORDER BY c.id",
        )
        .bind(user.id)
        .fetch_all(db)
        .await?
        .into_iter()
        .map(|row| InscriptionInfo {
            course: Course {
                id: row.id,
                name: row.name,
                description: row.description,
            },
            role: row.role,
        })
        .collect();

        Ok(UserWithRelations {
            id: user.id,
            name: user.name,
            email: user.email,
            courses_created,
            inscriptions,
        })
    }
}
