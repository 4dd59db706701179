// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Shared helpers for the HTTP-level tests

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use std::sync::Arc;
use taskecho_api::{
    api::{create_app, AppState},
    config::GeminiConfig,
    gemini::{GeminiClient, GeminiError, LanguageService},
};
use tower::util::ServiceExt;

/// Deterministic stand-in for Gemini
pub struct FakeService {
    pub summary: String,
}

#[async_trait]
impl LanguageService for FakeService {
    async fn summarize(&self, _text: &str, _keyword: &str) -> Result<String, GeminiError> {
        Ok(self.summary.clone())
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, GeminiError> {
        Ok(text.chars().take(8).map(|c| (c as u32 % 100) as f32 / 100.0).collect())
    }
}

/// Service whose every call fails with the given Gemini status
pub struct FailingService {
    pub status: u16,
    pub message: String,
}

#[async_trait]
impl LanguageService for FailingService {
    async fn summarize(&self, _text: &str, _keyword: &str) -> Result<String, GeminiError> {
        Err(GeminiError::Api {
            status: self.status,
            message: self.message.clone(),
        })
    }

    async fn embed(&self, _text: &str) -> Result<Vec<f32>, GeminiError> {
        Err(GeminiError::EmptyResult("embedding".to_string()))
    }
}

pub fn fake_app(summary: &str) -> Router {
    create_app(AppState::new(Arc::new(FakeService {
        summary: summary.to_string(),
    })))
}

/// Real Gemini client without an API key; never touches the network
pub fn unconfigured_app() -> Router {
    let client = GeminiClient::new(GeminiConfig::new("")).unwrap();
    create_app(AppState::new(Arc::new(client)))
}

pub async fn send(app: Router, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
