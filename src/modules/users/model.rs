//! User data models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::courses::model::{Course, Role};

/// A user in the system. The stored credential is never serialized outward.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// DTO for creating a new user.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// One membership of a user, with the course materialized.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct InscriptionInfo {
    pub course: Course,
    pub role: Role,
}

/// User with created courses and memberships, each loaded by its own query.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct UserWithRelations {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub courses_created: Vec<Course>,
    pub inscriptions: Vec<InscriptionInfo>,
}
