use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// An evaluation embedded in a publication. It is a value, not an entity:
/// it has no id and is never addressed independently of its publication.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Validate, ToSchema)]
pub struct Evaluation {
    pub date_max: NaiveDate,
    pub time_max: NaiveTime,
    #[validate(range(min = 1, message = "score_max must be positive"))]
    pub score_max: i32,
    pub group: bool,
}

/// A publication within a course, optionally carrying an evaluation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Publication {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(rename = "type")]
    pub kind: i32,
    pub course_id: i32,
    pub evaluation: Option<Evaluation>,
}

/// Flat storage row; the nullable evaluation columns are all set or all null
/// (enforced by a table CHECK).
#[derive(FromRow, Debug, Clone)]
pub struct PublicationRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[sqlx(rename = "type")]
    pub kind: i32,
    pub course_id: i32,
    pub evaluation_date_max: Option<NaiveDate>,
    pub evaluation_time_max: Option<NaiveTime>,
    pub evaluation_score_max: Option<i32>,
    pub evaluation_group: Option<bool>,
}

impl From<PublicationRow> for Publication {
    fn from(row: PublicationRow) -> Self {
        let evaluation = match (
            row.evaluation_date_max,
            row.evaluation_time_max,
            row.evaluation_score_max,
            row.evaluation_group,
        ) {
            (Some(date_max), Some(time_max), Some(score_max), Some(group)) => Some(Evaluation {
                date_max,
                time_max,
                score_max,
                group,
            }),
            _ => None,
        };

        Publication {
            id: row.id,
            title: row.title,
            description: row.description,
            date: row.date,
            time: row.time,
            kind: row.kind,
            course_id: row.course_id,
            evaluation,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreatePublicationDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(rename = "type")]
    pub kind: i32,
    #[validate(nested)]
    pub evaluation: Option<Evaluation>,
}
