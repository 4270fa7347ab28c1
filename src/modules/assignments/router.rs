use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_assignment, get_assignment, list_assignments};
use crate::state::AppState;

/// Nested under `/course/{course_id}/assignment`.
pub fn init_assignments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment).get(list_assignments))
        .route("/{assignment_id}", get(get_assignment))
}
