//! HTTP-level integration tests for admin login and session handling.

mod common;

use axum::body::Body;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{Request, StatusCode};
use common::{
    admin_token, body_json, get, get_auth, post_json, TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD,
};
use portfolio_api::auth::jwt::generate_session_token;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success_sets_cookie(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": TEST_ADMIN_EMAIL, "password": TEST_ADMIN_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("portfolio_session="));
    assert!(cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert!(json["expiresAt"].is_number());
    assert_eq!(json["user"]["email"], TEST_ADMIN_EMAIL);
    assert_eq!(json["user"]["role"], "admin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": TEST_ADMIN_EMAIL, "password": "nope" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(SET_COOKIE).is_none());
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": "someone@example.com", "password": TEST_ADMIN_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_missing_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": TEST_ADMIN_EMAIL }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Email and password are required");
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_with_bearer_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/session", &admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], TEST_ADMIN_EMAIL);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_with_cookie(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .uri("/api/auth/session")
        .header(COOKIE, format!("theme=dark; portfolio_session={}", admin_token()))
        .body(Body::empty())
        .unwrap();
    let response = common::send(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_without_credentials(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/auth/session").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Authentication required");
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_with_garbage_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/session", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_for_other_subject_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) =
        generate_session_token("intruder@example.com", &common::test_config().session).unwrap();

    let response = get_auth(app.clone(), "/api/auth/session", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Authentication required");

    let response = common::post_json_auth(
        app.clone(),
        "/api/skills",
        serde_json::json!({ "name": "Rust" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let skills = body_json(get(app, "/api/skills").await).await;
    assert!(skills.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_clears_cookie(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/auth/logout", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));
}
