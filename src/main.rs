// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use std::{env, sync::Arc};
use taskecho_api::{
    api::start_server,
    config::{self, AppConfig},
    gemini::GeminiClient,
    version,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("Starting {} {}", version::NAME, version::VERSION);

    // .env is optional; missing is only logged
    config::load_dotenv();

    let config = AppConfig::from_env();
    config.log_summary();

    let client = GeminiClient::new(config.gemini.clone())?;
    for endpoint in version::ENDPOINTS {
        info!("Route: {}", endpoint);
    }

    start_server(&config, Arc::new(client)).await
}
