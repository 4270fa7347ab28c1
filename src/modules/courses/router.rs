use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{
    create_course, delegate, enroll_by_email, enroll_by_id, get_course, list_courses,
};
use crate::state::AppState;

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course).get(list_courses))
        .route("/{course_id}", get(get_course))
        .route("/{course_id}/enroll/by_id/{user_id}", post(enroll_by_id))
        .route(
            "/{course_id}/enroll/by_email/{email}",
            post(enroll_by_email),
        )
        .route("/{course_id}/delegate/{user_id}", post(delegate))
}
