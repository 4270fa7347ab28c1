use axum::body::Body;
use axum::response::Response;
use http_body_util::BodyExt;
use sqlx::PgPool;

use learnhub::config::cors::CorsConfig;
use learnhub::config::jwt::JwtConfig;
use learnhub::router::init_router;
use learnhub::state::AppState;
use learnhub::utils::jwt::create_access_token;
use learnhub::utils::password::hash_password;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

/// Insert a user directly, bypassing the API.
#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, name: &str, email: &str, password: &str) -> i32 {
    let hashed = hash_password(password).unwrap();

    sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(hashed)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a course directly, bypassing the API.
#[allow(dead_code)]
pub async fn create_test_course(pool: &PgPool, name: &str, creator_id: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO courses (name, description, creator_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(format!("description of {}", name))
    .bind(creator_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// `Authorization` header value for a subject email, signed with the test secret.
#[allow(dead_code)]
pub fn bearer(email: &str) -> String {
    let token = create_access_token(email, &test_jwt_config()).unwrap();
    format!("Bearer {}", token)
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
