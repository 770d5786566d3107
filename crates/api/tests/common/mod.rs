//! Shared helpers for the HTTP integration tests.
//!
//! The app is driven in-process with `tower::ServiceExt::oneshot`. Object
//! storage and email are replaced by in-memory fakes that record calls.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use portfolio_api::auth::jwt::{generate_session_token, SessionConfig};
use portfolio_api::auth::password::hash_password;
use portfolio_api::config::{AdminCredentials, ServerConfig};
use portfolio_api::router::build_app_router;
use portfolio_api::state::AppState;
use portfolio_core::upload::public_url;
use portfolio_mail::{MailError, Mailer, OutgoingEmail};
use portfolio_storage::{ObjectStore, StorageError};
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";
pub const TEST_ADMIN_PASSWORD: &str = "correct-horse-battery-staple";
pub const TEST_CONTACT_EMAIL: &str = "owner@example.com";
pub const TEST_PUBLIC_URL: &str = "https://cdn.test";

static ADMIN_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password(TEST_ADMIN_PASSWORD).expect("hashing should succeed"));

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// In-memory object store keyed by object key.
#[derive(Default)]
pub struct FakeObjectStore {
    pub objects: Mutex<HashMap<String, (Vec<u8>, String)>>,
    pub deleted: Mutex<Vec<String>>,
}

impl FakeObjectStore {
    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait::async_trait]
impl ObjectStore for FakeObjectStore {
    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (body, content_type.to_string()));
        Ok(public_url(TEST_PUBLIC_URL, key))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.objects.lock().unwrap().remove(key);
        self.deleted.lock().unwrap().push(key.to_string());
        Ok(())
    }

    async fn presigned_get(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        Ok(format!(
            "{TEST_PUBLIC_URL}/{key}?X-Amz-Expires={}",
            expires_in.as_secs()
        ))
    }
}

/// Records every sent email; fails every send when `fail` is set.
#[derive(Default)]
pub struct FakeMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    pub fail: bool,
}

impl FakeMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Mailer for FakeMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Option<String>, MailError> {
        if self.fail {
            return Err(MailError::Provider {
                status: 500,
                body: "fake outage".into(),
            });
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        Ok(Some(format!("fake-{}", sent.len())))
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        contact_email: TEST_CONTACT_EMAIL.to_string(),
        public_base_url: None,
        app_env: "test".to_string(),
        session: SessionConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_days: 30,
            cookie_secure: false,
        },
        admin: AdminCredentials {
            email: TEST_ADMIN_EMAIL.to_string(),
            password_hash: ADMIN_HASH.clone(),
        },
    }
}

/// The router plus handles on the fakes behind it.
pub struct TestContext {
    pub app: Router,
    pub store: Arc<FakeObjectStore>,
    pub mailer: Arc<FakeMailer>,
}

/// Build the full application router with fakes wired in.
pub fn build_test_context_with(pool: PgPool, mailer: FakeMailer) -> TestContext {
    let config = test_config();
    let store = Arc::new(FakeObjectStore::default());
    let mailer = Arc::new(mailer);

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Some(store.clone() as Arc<dyn ObjectStore>),
        mailer: Some(mailer.clone() as Arc<dyn Mailer>),
    };
    let app = build_app_router(state, &config).expect("test router should build");

    TestContext { app, store, mailer }
}

pub fn build_test_context(pool: PgPool) -> TestContext {
    build_test_context_with(pool, FakeMailer::default())
}

/// Build the full application router (same middleware stack as production).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_context(pool).app
}

/// Build the router with no object store or mailer configured.
pub fn build_unconfigured_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: None,
        mailer: None,
    };
    build_app_router(state, &config).expect("test router should build")
}

/// A valid session token for the test admin.
pub fn admin_token() -> String {
    generate_session_token(TEST_ADMIN_EMAIL, &test_config().session)
        .expect("token generation should succeed")
        .0
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body, None)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body, Some(token))).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body, None)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body, Some(token))).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, None)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, Some(token))).await
}

pub async fn delete_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::DELETE, uri, body, Some(token))).await
}

/// Build a `multipart/form-data` body holding a single file field.
pub fn multipart_body(
    field: &str,
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> (String, Vec<u8>) {
    let boundary = "portfolio-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    (content_type, body): (String, Vec<u8>),
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}
