// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lenient JSON body extractor
//!
//! Unlike `axum::Json` this ignores `Content-Type`, decodes only the first
//! JSON value of the body, and reports every decode failure as 400 through
//! [`ApiError::InvalidRequest`].

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::ApiError;

#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid request: {}", e.body_text())))?;

        decode_first(&bytes).map(JsonBody)
    }
}

/// Decodes the first JSON value in `bytes`; anything after it is ignored.
pub fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    match serde_json::Deserializer::from_slice(bytes)
        .into_iter::<T>()
        .next()
    {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => {
            warn!("JSON decode error: {}", e);
            Err(ApiError::InvalidRequest(format!("Invalid request body: {}", e)))
        }
        None => Err(ApiError::InvalidRequest(
            "Invalid request body: empty body".to_string(),
        )),
    }
}
