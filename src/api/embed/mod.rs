// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding API Module
//!
//! This module provides the POST /api/encode endpoint (and its OPTIONS
//! preflight) for turning a text into a Gemini embedding vector.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{embed_handler, encode_preflight};
pub use request::EmbeddingRequest;
pub use response::EmbeddingResponse;
