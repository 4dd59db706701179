// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gemini REST client

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use super::error::GeminiError;
use super::service::LanguageService;
use super::types::{
    Content, EmbedContentRequest, EmbedContentResponse, GenerateContentRequest,
    GenerateContentResponse,
};
use crate::config::GeminiConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

const SUMMARY_INSTRUCTION: &str = "以下のテキストを簡潔に要約してください：";

/// Builds the summarization prompt sent to `generateContent`.
pub fn summary_prompt(text: &str, keyword: &str) -> String {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        format!("{}\n{}", SUMMARY_INSTRUCTION, text)
    } else {
        format!(
            "{}\nキーワード「{}」を中心に要約してください。\n{}",
            SUMMARY_INSTRUCTION, keyword, text
        )
    }
}

/// Client for the Gemini `generateContent` and `embedContent` endpoints
///
/// No retries and no timeout beyond reqwest's defaults: a hanging upstream
/// hangs the request that triggered it.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .user_agent(crate::version::user_agent())
            .build()?;

        info!(
            "Gemini client configured: base_url={}, summary_model={}, embedding_model={}",
            config.base_url, config.summary_model, config.embedding_model
        );

        Ok(Self { client, config })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.config.base_url, model, method)
    }

    async fn post<B, R>(&self, url: String, body: &B) -> Result<R, GeminiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        if !self.config.has_api_key() {
            return Err(GeminiError::MissingApiKey);
        }

        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.config.api_key.expose_secret())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| GeminiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl LanguageService for GeminiClient {
    async fn summarize(&self, text: &str, keyword: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(summary_prompt(text, keyword))],
        };
        let url = self.endpoint(&self.config.summary_model, "generateContent");

        let response: GenerateContentResponse = self.post(url, &request).await?;
        response
            .first_text()
            .ok_or_else(|| GeminiError::EmptyResult("summary".to_string()))
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, GeminiError> {
        let model = &self.config.embedding_model;
        let request = EmbedContentRequest {
            model: format!("models/{}", model),
            content: Content::text(text),
        };
        let url = self.endpoint(model, "embedContent");

        let response: EmbedContentResponse = self.post(url, &request).await?;
        match response.embedding {
            Some(embedding) if !embedding.values.is_empty() => Ok(embedding.values),
            _ => Err(GeminiError::EmptyResult("embedding".to_string())),
        }
    }
}
