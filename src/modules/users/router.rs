use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_user, get_user_by_email};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/byemail/{email}", get(get_user_by_email))
}
