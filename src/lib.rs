// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod gemini;
pub mod version;

pub use api::{create_app, start_server, AppState};
pub use config::{AppConfig, GeminiConfig};
pub use gemini::{GeminiClient, GeminiError, LanguageService};
