// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::gemini::GeminiError;

/// JSON body of every error answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Body was not valid JSON for the endpoint
    #[error("{0}")]
    InvalidRequest(String),
    /// No upstream credential configured
    #[error("{0}")]
    MissingCredential(String),
    /// Transport error or non-2xx from Gemini
    #[error("{0}")]
    UpstreamFailure(String),
    /// Gemini answered without usable content
    #[error("{0}")]
    EmptyResult(String),
}

impl ApiError {
    /// Maps an adapter failure, prefixing the message with `context` if given.
    pub fn from_gemini(err: GeminiError, context: Option<&str>) -> Self {
        let message = match context {
            Some(context) => format!("{}: {}", context, err),
            None => err.to_string(),
        };

        match err {
            GeminiError::MissingApiKey => ApiError::MissingCredential(message),
            GeminiError::EmptyResult(_) => ApiError::EmptyResult(message),
            GeminiError::Transport(_)
            | GeminiError::Api { .. }
            | GeminiError::InvalidResponse(_) => ApiError::UpstreamFailure(message),
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::MissingCredential(_) => "missing_credential",
            ApiError::UpstreamFailure(_) => "upstream_failure",
            ApiError::EmptyResult(_) => "empty_result",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingCredential(_)
            | ApiError::UpstreamFailure(_)
            | ApiError::EmptyResult(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error_type: self.error_type().to_string(),
            message: self.to_string(),
        }
    }
}

impl From<GeminiError> for ApiError {
    fn from(err: GeminiError) -> Self {
        ApiError::from_gemini(err, None)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{} ({})", self, self.error_type());
        }
        (status, Json(self.to_response())).into_response()
    }
}
