// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! SummarizeRequest type for POST /summarize

use serde::{Deserialize, Serialize};

/// Request body for POST /summarize
///
/// Missing fields decode as empty strings; no length or encoding checks are
/// made before the text is forwarded.
///
/// # Example
/// ```json
/// {
///   "text": "長い文章...",
///   "keyword": "要約"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SummarizeRequest {
    /// Text to summarize
    #[serde(default)]
    pub text: String,

    /// Focus keyword for the summary (may be empty)
    #[serde(default)]
    pub keyword: String,
}
