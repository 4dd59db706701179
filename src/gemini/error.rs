// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Errors returned by the Gemini adapter

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    /// No API key configured; no request is sent
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    /// The request never produced an HTTP response
    #[error("failed to send request: {0}")]
    Transport(String),

    /// Gemini answered with a non-success status
    #[error("API request failed with status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body as returned by Gemini
        message: String,
    },

    /// A success response whose body could not be decoded
    #[error("failed to decode response: {0}")]
    InvalidResponse(String),

    /// A decodable response with nothing usable in it
    #[error("no {0} returned")]
    EmptyResult(String),
}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GeminiError::InvalidResponse(err.to_string())
        } else {
            GeminiError::Transport(err.to_string())
        }
    }
}
