// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/encode through the full router

use super::support::{body_json, body_string, fake_app, send, unconfigured_app, FailingService};
use axum::http::{Method, StatusCode};
use std::sync::Arc;
use taskecho_api::api::{create_app, AppState, EmbeddingResponse};

#[tokio::test]
async fn test_encode_success() {
    let response = send(fake_app("x"), Method::POST, "/api/encode", r#"{"text":"hello"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    let parsed: EmbeddingResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed.dimensions(), 5);
}

#[tokio::test]
async fn test_encode_response_is_float_array() {
    let response = send(fake_app("x"), Method::POST, "/api/encode", r#"{"text":"ab"}"#).await;

    let body = body_json(response).await;
    let embedding = body["embedding"].as_array().unwrap();
    assert_eq!(embedding.len(), 2);
    assert!(embedding.iter().all(|v| v.is_f64()));
}

#[tokio::test]
async fn test_encode_malformed_json() {
    let response = send(fake_app("x"), Method::POST, "/api/encode", "{").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_encode_without_api_key() {
    let response = send(
        unconfigured_app(),
        Method::POST,
        "/api/encode",
        r#"{"text":"hello"}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn test_encode_empty_result() {
    let app = create_app(AppState::new(Arc::new(FailingService {
        status: 500,
        message: String::new(),
    })));

    let response = send(app, Method::POST, "/api/encode", r#"{"text":"hello"}"#).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error_type"], "empty_result");
}

#[tokio::test]
async fn test_encode_is_repeatable() {
    let app = fake_app("x");
    let body = r#"{"text":"same input"}"#;

    let first = body_string(send(app.clone(), Method::POST, "/api/encode", body).await).await;
    let second = body_string(send(app, Method::POST, "/api/encode", body).await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_encode_accepts_large_body() {
    let body = serde_json::json!({"text": "b".repeat(3 * 1024 * 1024)}).to_string();

    let response = send(fake_app("x"), Method::POST, "/api/encode", &body).await;

    assert_eq!(response.status(), StatusCode::OK);
}
