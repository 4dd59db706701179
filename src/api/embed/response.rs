// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbeddingResponse type for POST /api/encode

use serde::{Deserialize, Serialize};

/// Response body for POST /api/encode
///
/// `embedding` keeps the order returned by Gemini.
///
/// # Example
/// ```json
/// { "embedding": [0.1, 0.2, 0.3] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingResponse {
    pub embedding: Vec<f32>,
}

impl EmbeddingResponse {
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }
}

impl From<Vec<f32>> for EmbeddingResponse {
    fn from(embedding: Vec<f32>) -> Self {
        Self { embedding }
    }
}
