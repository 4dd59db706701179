// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Capability trait the HTTP handlers depend on

use async_trait::async_trait;

use super::error::GeminiError;

/// Summarization and embedding backed by a generative-language API
///
/// Handlers only see this trait, so tests can swap in a fake without any
/// network access. Implementations hold no per-request state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageService: Send + Sync {
    /// Summarize `text`, focusing on `keyword` when it is non-empty
    async fn summarize(&self, text: &str, keyword: &str) -> Result<String, GeminiError>;

    /// Embed `text` as a dense vector
    async fn embed(&self, text: &str) -> Result<Vec<f32>, GeminiError>;
}
