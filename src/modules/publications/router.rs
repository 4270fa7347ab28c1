use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_publication, get_publication, list_publications};
use crate::state::AppState;

/// Nested under `/course/{course_id}/publication`.
pub fn init_publications_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_publication).get(list_publications))
        .route("/{publication_id}", get(get_publication))
}
