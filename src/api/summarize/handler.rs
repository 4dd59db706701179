// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /summarize HTTP handler

use axum::{extract::State, Json};
use tracing::{error, info};

use crate::api::extract::JsonBody;
use crate::api::server::AppState;
use crate::api::summarize::{SummarizeRequest, SummarizeResponse};
use crate::api::ApiError;

/// POST /summarize handler
///
/// # Request Body
/// ```json
/// { "text": "...", "keyword": "..." }
/// ```
///
/// # Responses
/// - 200 `{"summarized_text": "..."}`
/// - 400 when the body is not valid JSON
/// - 500 `Failed to summarize: ...` when Gemini is unconfigured, fails, or
///   returns no candidates
pub async fn summarize_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    info!(
        "Summarize request - text length: {}, keyword: {}",
        request.text.len(),
        request.keyword
    );

    let summary = state
        .service
        .summarize(&request.text, &request.keyword)
        .await
        .map_err(|e| {
            error!("Summarize failed: {}", e);
            ApiError::from_gemini(e, Some("Failed to summarize"))
        })?;

    info!("Summarize complete - result length: {}", summary.len());
    Ok(Json(SummarizeResponse::from(summary)))
}
