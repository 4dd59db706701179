// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Process configuration
//!
//! Everything is read once at startup from the environment (optionally seeded
//! from a `.env` file) and handed to the router and the Gemini client by value.

use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const DEFAULT_SERVER_PORT: &str = "8080";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SUMMARY_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";

/// Settings for the Gemini adapter
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`; empty means "not configured"
    pub api_key: SecretString,
    /// Base URL up to and including the API version segment
    pub base_url: String,
    /// Model used for `generateContent`
    pub summary_model: String,
    /// Model used for `embedContent`
    pub embedding_model: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: String,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset, so `SERVER_PORT=` still yields the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let gemini = GeminiConfig {
            api_key: SecretString::new(get("GEMINI_API_KEY", "")),
            base_url: get("GEMINI_API_BASE_URL", DEFAULT_GEMINI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            summary_model: get("GEMINI_SUMMARY_MODEL", DEFAULT_SUMMARY_MODEL),
            embedding_model: get("GEMINI_EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
        };

        Self {
            server_port: get("SERVER_PORT", DEFAULT_SERVER_PORT),
            gemini,
        }
    }

    /// Listen address on all interfaces.
    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("0.0.0.0:{}", self.server_port).parse()?;
        Ok(addr)
    }

    /// Logs the loaded settings without revealing the key itself.
    pub fn log_summary(&self) {
        info!("Server port: {}", self.server_port);
        info!(
            "Gemini models: summary={}, embedding={}",
            self.gemini.summary_model, self.gemini.embedding_model
        );
        if self.gemini.has_api_key() {
            info!(
                "GEMINI_API_KEY loaded (length: {})",
                self.gemini.api_key.expose_secret().len()
            );
        } else {
            warn!("GEMINI_API_KEY is not set; /summarize and /api/encode will fail until it is");
        }
    }
}

/// Loads `.env` from the working directory if there is one.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => info!("No .env file loaded: {}", e),
    }
}
