// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! SummarizeResponse type for POST /summarize

use serde::{Deserialize, Serialize};

/// Response body for POST /summarize
///
/// # Example
/// ```json
/// { "summarized_text": "短い要約" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizeResponse {
    pub summarized_text: String,
}

impl From<String> for SummarizeResponse {
    fn from(summarized_text: String) -> Self {
        Self { summarized_text }
    }
}
