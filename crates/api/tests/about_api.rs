//! HTTP-level integration tests for the singleton `/about` document.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete, delete_auth, get, put_json, put_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_creates_default_document_once(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let first = body_json(get(app.clone(), "/api/about").await).await;
    let second = body_json(get(app, "/api/about").await).await;

    assert_eq!(first["id"], second["id"]);
    assert_eq!(first["title"], "About Me");
    assert!(first["profileImage"].is_string());
    assert!(!first["bio"].as_array().unwrap().is_empty());
    assert!(!first["skills"].as_array().unwrap().is_empty());
    assert!(first["contactInfo"]["email"].is_string());

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM about")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_only_given_sections(pool: PgPool) {
    let app = common::build_test_app(pool);
    let before = body_json(get(app.clone(), "/api/about").await).await;

    let response = put_json_auth(
        app.clone(),
        "/api/about",
        serde_json::json!({
            "title": "Hello",
            "experiences": [{
                "title": "Engineer",
                "company": "Acme",
                "period": "2020 - 2024",
                "description": "Built things"
            }]
        }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], before["id"]);
    assert_eq!(json["title"], "Hello");
    assert_eq!(json["experiences"].as_array().unwrap().len(), 1);
    assert_eq!(json["experiences"][0]["company"], "Acme");
    assert_eq!(json["subtitle"], before["subtitle"]);
    assert_eq!(json["education"], before["education"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reset_restores_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    put_json_auth(
        app.clone(),
        "/api/about",
        serde_json::json!({ "title": "Custom" }),
        &admin_token(),
    )
    .await;

    let response = delete_auth(app.clone(), "/api/about", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "About Me");

    let json = body_json(get(app, "/api/about").await).await;
    assert_eq!(json["title"], "About Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_about_mutations_require_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = put_json(app.clone(), "/api/about", serde_json::json!({ "title": "x" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = delete(app.clone(), "/api/about").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(get(app, "/api/about").await).await;
    assert_eq!(json["title"], "About Me");
}
