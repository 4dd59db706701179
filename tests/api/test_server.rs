// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Listener startup over a real socket

use super::support::FakeService;
use std::sync::Arc;
use taskecho_api::{
    api::{serve, start_server, AppState},
    config::AppConfig,
};
use tokio::net::TcpListener;

#[tokio::test]
async fn test_serve_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::new(Arc::new(FakeService {
        summary: "要約".to_string(),
    }));
    tokio::spawn(serve(listener, state));

    let response = reqwest::Client::new()
        .post(format!("http://{}/summarize", addr))
        .body(r#"{"text":"abc","keyword":""}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["summarized_text"], "要約");
}

#[tokio::test]
async fn test_bind_failure_is_an_error() {
    let occupied = TcpListener::bind("0.0.0.0:0").await.unwrap();
    let port = occupied.local_addr().unwrap().port().to_string();

    let config = AppConfig::from_lookup(|key| match key {
        "SERVER_PORT" => Some(port.clone()),
        _ => None,
    });
    let service = Arc::new(FakeService {
        summary: String::new(),
    });

    let result = start_server(&config, service).await;
    assert!(result.is_err());
}
