use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A scheduled assignment within a course.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Assignment {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: i32,
    pub course_id: i32,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateAssignmentDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(rename = "type")]
    pub kind: i32,
}
