#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use kbase_api::analyzer::{
    AnalyzerError, ContentAnalysis, ContentAnalyzer, SolutionMatches, SolutionSuggestion,
};
use kbase_api::auth::password::hash_password;
use kbase_api::config::{AnalyzerConfig, ServerConfig};
use kbase_api::router::build_app_router;
use kbase_api::state::AppState;
use kbase_store::models::CreateUser;
use kbase_store::{seed, MemStore, SessionStore};

/// Password for every user created through the test helpers.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Key facts the stub analyzer attaches to every created issue.
pub const STUB_KEY_FACTS: [&str; 2] = ["stub fact one", "stub fact two"];

/// Deterministic stand-in for the summarization collaborator.
pub struct StubAnalyzer;

#[async_trait]
impl ContentAnalyzer for StubAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<ContentAnalysis, AnalyzerError> {
        Ok(ContentAnalysis {
            summary: "stub summary".into(),
            key_facts: STUB_KEY_FACTS.iter().map(ToString::to_string).collect(),
            sentiment: 3.0,
        })
    }

    async fn match_solutions(&self, _description: &str) -> Result<SolutionMatches, AnalyzerError> {
        Ok(SolutionMatches {
            suggestions: vec![SolutionSuggestion {
                title: "stub suggestion".into(),
                description: "try turning it off and on again".into(),
                confidence: 0.9,
            }],
        })
    }
}

/// Analyzer that always fails, for exercising the fallback policy.
pub struct FailingAnalyzer;

#[async_trait]
impl ContentAnalyzer for FailingAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<ContentAnalysis, AnalyzerError> {
        Err(AnalyzerError::Malformed("stub failure".into()))
    }

    async fn match_solutions(&self, _description: &str) -> Result<SolutionMatches, AnalyzerError> {
        Err(AnalyzerError::Malformed("stub failure".into()))
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_password: TEST_PASSWORD.to_string(),
        seed_samples: false,
        analyzer: AnalyzerConfig {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
        },
    }
}

/// A fresh store seeded with the admin user and default topics.
pub fn seeded_store() -> Arc<MemStore> {
    let store = Arc::new(MemStore::new());
    let hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    seed::seed_defaults(&store, hash).expect("seeding should succeed");
    store
}

/// Build the full application router over the given store, with the stub
/// analyzer. This mirrors the router construction in `main.rs` so
/// integration tests exercise the same middleware stack production uses.
pub fn build_test_app(store: Arc<MemStore>) -> Router {
    build_test_app_with_analyzer(store, Arc::new(StubAnalyzer))
}

/// Same as [`build_test_app`] but with a caller-chosen analyzer.
pub fn build_test_app_with_analyzer(
    store: Arc<MemStore>,
    analyzer: Arc<dyn ContentAnalyzer>,
) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        sessions: Arc::new(SessionStore::new()),
        config: Arc::new(config.clone()),
        analyzer,
    };
    build_app_router(state, &config)
}

/// Create a non-admin user directly in the store, with [`TEST_PASSWORD`].
pub fn create_user(store: &MemStore, username: &str) {
    let hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    store
        .create_user(CreateUser {
            username: username.to_string(),
            password_hash: hash,
            is_admin: false,
        })
        .expect("user creation should succeed");
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should not fail")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Body-less POST (approve / reject endpoints).
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_empty_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect and deserialize a JSON response body.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Log in via the API; returns the session cookie pair (`kb_session=...`)
/// and the returned user object.
pub async fn login(app: Router, username: &str, password: &str) -> (String, serde_json::Value) {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login must succeed");

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set a session cookie")
        .to_str()
        .unwrap();
    let cookie = set_cookie
        .split(';')
        .next()
        .expect("cookie must have a name=value pair")
        .to_string();
    assert!(cookie.starts_with("kb_session="));

    let user = body_json(response).await;
    (cookie, user)
}

/// Log in as the seeded admin.
pub async fn login_admin(app: Router) -> String {
    let (cookie, user) = login(app, seed::ADMIN_USERNAME, TEST_PASSWORD).await;
    assert_eq!(user["isAdmin"], true);
    cookie
}
