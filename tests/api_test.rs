// tests/api_test.rs — HTTP boundary behavior

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use hodlbot::api::{build_router, ApiState};
use hodlbot::core::orchestrator::Orchestrator;
use hodlbot::infra::config::Config;

fn test_app() -> axum::Router {
    let bot = Arc::new(Orchestrator::from_config(&Config::default()));
    build_router(ApiState { bot })
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn chat_turn_roundtrips() {
    let app = test_app();
    let req = post_json(
        "/api/v1/chat",
        r#"{"message": "should I buy ethereum", "session_id": "t1"}"#,
    );

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["type"], "crypto_analysis");
    assert_eq!(json["coin"], "ethereum");
    assert_eq!(json["format"], "html");
    assert!(json["response"].as_str().unwrap().contains("ETHEREUM"));
}

#[tokio::test]
async fn blank_chat_message_is_rejected() {
    let app = test_app();
    let req = post_json("/api/v1/chat", r#"{"message": "  ", "session_id": "t1"}"#);

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_session_id_is_rejected() {
    let app = test_app();
    let req = post_json("/api/v1/chat", r#"{"message": "hello", "session_id": ""}"#);

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn coin_advice_projects_the_record() {
    let app = test_app();
    let req = Request::builder()
        .uri("/api/v1/coins/bitcoin")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["coin"], "BITCOIN");
    assert_eq!(json["trend"], "bullish");
    assert_eq!(json["risk_level"], "low");
    assert_eq!(json["sustainability_score"], 3.0);
    assert!(json["tags"].as_array().unwrap().len() == 3);
}

#[tokio::test]
async fn unknown_coin_advice_is_not_found() {
    let app = test_app();
    let req = Request::builder()
        .uri("/api/v1/coins/vaporcoin")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn added_coin_is_immediately_usable() {
    let app = test_app();

    // Prime the catalog-listing cache with a market overview turn.
    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/v1/chat",
            r#"{"message": "what's the overall market mood?", "session_id": "t1"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Upsert a new coin; its cache entries are invalidated on the way in.
    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/v1/coins",
            r#"{"name": "Pepecoin", "trend": "pump", "verdict": "Much frog.", "advice": "Meme budget only.", "tags": ["meme"]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["crypto"], "pepecoin");

    // Advice endpoint sees it.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/coins/pepecoin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // And the chat pipeline resolves it despite the previously cached listing.
    let resp = app
        .oneshot(post_json(
            "/api/v1/chat",
            r#"{"message": "tell me about pepecoin", "session_id": "t1"}"#,
        ))
        .await
        .unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["coin"], "pepecoin");
}

#[tokio::test]
async fn upsert_with_blank_required_field_is_rejected() {
    let app = test_app();
    let req = post_json(
        "/api/v1/coins",
        r#"{"name": "pepecoin", "trend": " ", "verdict": "v", "advice": "a"}"#,
    );

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upsert_with_missing_required_field_is_a_client_error() {
    let app = test_app();
    let req = post_json("/api/v1/coins", r#"{"name": "pepecoin", "trend": "pump"}"#);

    let resp = app.oneshot(req).await.unwrap();
    assert!(resp.status().is_client_error(), "{}", resp.status());
}
