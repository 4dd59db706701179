// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Gemini adapter
//!
//! Translates summarize/embed calls into Gemini REST requests and maps the
//! responses and failures back into [`GeminiError`].

pub mod client;
pub mod error;
pub mod service;
pub mod types;

pub use client::{summary_prompt, GeminiClient};
pub use error::GeminiError;
pub use service::LanguageService;
#[cfg(test)]
pub use service::MockLanguageService;
