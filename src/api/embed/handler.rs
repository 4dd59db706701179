// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/encode HTTP handler

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{error, info};

use crate::api::embed::{EmbeddingRequest, EmbeddingResponse};
use crate::api::extract::JsonBody;
use crate::api::server::AppState;
use crate::api::ApiError;

/// POST /api/encode handler
///
/// Generates a single embedding for the request text.
///
/// # Request Body
/// ```json
/// { "text": "Hello world" }
/// ```
///
/// # Response Body
/// ```json
/// { "embedding": [0.1, 0.2, ...] }
/// ```
///
/// Adds its own permissive CORS headers; the global CORS middleware runs
/// afterwards and overrides them where they differ.
pub async fn embed_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<EmbeddingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Embed request - text length: {}", request.text.len());

    let embedding = state.service.embed(&request.text).await.map_err(|e| {
        error!("Embedding failed: {}", e);
        ApiError::from(e)
    })?;

    info!("Embed complete - dimensions: {}", embedding.len());
    Ok((
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
        Json(EmbeddingResponse::from(embedding)),
    ))
}

/// OPTIONS /api/encode: 200 with an empty body
pub async fn encode_preflight() -> StatusCode {
    StatusCode::OK
}
