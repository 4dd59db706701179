// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbeddingRequest type for POST /api/encode

use serde::{Deserialize, Serialize};

/// Request body for POST /api/encode
///
/// # Example
/// ```json
/// { "text": "Hello world" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingRequest {
    /// Text to embed; missing decodes as empty
    #[serde(default)]
    pub text: String,
}
