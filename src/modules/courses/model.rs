//! Course and membership data models.
//!
//! A membership ("inscription") is keyed by `(course_id, user_id)`; the key
//! uniqueness is what guarantees a user holds at most one role per course.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::User;

/// Membership role within a course.
///
/// `Delegate` is only ever reached by promoting an existing `Enrolled` row;
/// there is no direct grant path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "inscription_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Enrolled,
    Delegate,
}

/// A course as stored and serialized outward.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Course view with its creator materialized by an explicit query.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct CourseWithCreator {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub creator: User,
}

/// A membership row.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Inscription {
    pub course_id: i32,
    pub user_id: i32,
    pub role: Role,
}

/// DTO for creating a new course. The creator comes from the bearer token,
/// never from the body.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
}
