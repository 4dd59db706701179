// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod embed;
pub mod errors;
pub mod extract;
pub mod middleware;
pub mod server;
pub mod summarize;

pub use embed::{embed_handler, encode_preflight, EmbeddingRequest, EmbeddingResponse};
pub use errors::{ApiError, ErrorResponse};
pub use extract::JsonBody;
pub use server::{create_app, serve, start_server, AppState};
pub use summarize::{summarize_handler, SummarizeRequest, SummarizeResponse};
