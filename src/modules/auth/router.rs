use axum::{Router, routing::post};

use super::controller::login_user;
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login_user))
}
