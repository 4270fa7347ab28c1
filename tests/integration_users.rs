mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, create_test_course, create_test_user, setup_test_app};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_user(pool: PgPool) {
    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("POST")
        .uri("/user/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "user_test",
                "email": "ut@test.com",
                "password": "pwd"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "user_test");
    assert_eq!(body["email"], "ut@test.com");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body.get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_user_duplicate_email(pool: PgPool) {
    create_test_user(&pool, "u1", "dup@test.com", "pwd").await;

    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("POST")
        .uri("/user/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "u2",
                "email": "dup@test.com",
                "password": "pwd"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["detail"], "Email already exists");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_create_user_same_email(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let make_request = || {
        Request::builder()
            .method("POST")
            .uri("/user/")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({
                    "name": "racer",
                    "email": "racer@test.com",
                    "password": "pwd"
                }))
                .unwrap(),
            ))
            .unwrap()
    };

    let (left, right) = tokio::join!(
        app.clone().oneshot(make_request()),
        app.clone().oneshot(make_request()),
    );

    // Exactly one registration wins; the loser gets the client error, not a 500.
    let mut statuses = [left.unwrap().status(), right.unwrap().status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::OK, StatusCode::BAD_REQUEST]);

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind("racer@test.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_user_by_email_fresh_user_has_empty_relations(pool: PgPool) {
    create_test_user(&pool, "user_test", "ut@test.com", "pwd").await;

    let app = setup_test_app(pool);

    let request = Request::builder()
        .uri("/user/byemail/ut@test.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "user_test");
    assert_eq!(body["email"], "ut@test.com");
    assert_eq!(body["courses_created"].as_array().unwrap().len(), 0);
    assert_eq!(body["inscriptions"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_user_by_email_not_found(pool: PgPool) {
    let app = setup_test_app(pool);

    let request = Request::builder()
        .uri("/user/byemail/nobodie@test.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["detail"],
        "User with the email nobodie@test.com is not available"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_user_by_email_with_relations(pool: PgPool) {
    let creator_id = create_test_user(&pool, "creator", "creator@test.com", "pwd").await;
    let member_id = create_test_user(&pool, "member", "member@test.com", "pwd").await;
    let course_id = create_test_course(&pool, "rust 101", creator_id).await;

    sqlx::query("INSERT INTO inscriptions (course_id, user_id) VALUES ($1, $2)")
        .bind(course_id)
        .bind(member_id)
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool);

    // Creator sees the course under courses_created, nothing under inscriptions.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/user/byemail/creator@test.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["courses_created"].as_array().unwrap().len(), 1);
    assert_eq!(body["courses_created"][0]["name"], "rust 101");
    assert_eq!(body["inscriptions"].as_array().unwrap().len(), 0);

    // Member sees the membership with its role and the course materialized.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/user/byemail/member@test.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["courses_created"].as_array().unwrap().len(), 0);
    assert_eq!(body["inscriptions"].as_array().unwrap().len(), 1);
    assert_eq!(body["inscriptions"][0]["course"]["name"], "rust 101");
    assert_eq!(body["inscriptions"][0]["role"], "enrolled");
}
