// Version information for the TaskEcho API server

/// Semantic version number
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name as published
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Endpoints served by this build
pub const ENDPOINTS: &[&str] = &["POST /summarize", "POST /api/encode", "OPTIONS /api/encode"];

/// `name/version`, also used as the upstream User-Agent
pub fn user_agent() -> String {
    format!("{}/{}", NAME, VERSION)
}
