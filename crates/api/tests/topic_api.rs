//! Integration tests for topic listing and admin topic management.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, login, login_admin, post_json, post_json_auth, TEST_PASSWORD};

#[tokio::test]
async fn list_topics_returns_seeded_topics() {
    let app = common::build_test_app(common::seeded_store());

    let response = get(app, "/api/topics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let topics = json.as_array().expect("response must be an array");
    assert_eq!(topics.len(), 5);
    assert_eq!(topics[0]["name"], "Politics & Governance");
    assert!(topics[0]["description"].is_string());
}

#[tokio::test]
async fn admin_can_create_topic() {
    let app = common::build_test_app(common::seeded_store());
    let cookie = login_admin(app.clone()).await;

    let body = serde_json::json!({ "name": "Testing", "description": "Test infrastructure" });
    let response = post_json_auth(app.clone(), "/api/topics", body, &cookie).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let topic = body_json(response).await;
    assert_eq!(topic["name"], "Testing");
    assert!(topic["id"].is_number());

    // The new topic shows up in the public listing.
    let json = body_json(get(app, "/api/topics").await).await;
    assert_eq!(json.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn topic_description_is_optional() {
    let app = common::build_test_app(common::seeded_store());
    let cookie = login_admin(app.clone()).await;

    let body = serde_json::json!({ "name": "Bare" });
    let response = post_json_auth(app, "/api/topics", body, &cookie).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let topic = body_json(response).await;
    assert_eq!(topic["description"], serde_json::Value::Null);
}

#[tokio::test]
async fn create_topic_requires_session() {
    let app = common::build_test_app(common::seeded_store());

    let body = serde_json::json!({ "name": "Nope" });
    let response = post_json(app, "/api/topics", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_topic_requires_admin() {
    let store = common::seeded_store();
    common::create_user(&store, "visitor");
    let app = common::build_test_app(store);
    let (cookie, _) = login(app.clone(), "visitor", TEST_PASSWORD).await;

    let body = serde_json::json!({ "name": "Nope" });
    let response = post_json_auth(app, "/api/topics", body, &cookie).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn blank_topic_name_returns_field_errors() {
    let app = common::build_test_app(common::seeded_store());
    let cookie = login_admin(app.clone()).await;

    let body = serde_json::json!({ "name": "   " });
    let response = post_json_auth(app, "/api/topics", body, &cookie).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"][0]["field"], "name");
}
