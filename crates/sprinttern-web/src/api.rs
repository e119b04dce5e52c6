//! API Client

use sprinttern_core::{ApiConfig, HttpWaitlistClient, Result};

/// Waitlist backend client, pointed at the `API_URL` baked in at build time
pub fn waitlist_client() -> Result<HttpWaitlistClient> {
    HttpWaitlistClient::new(&ApiConfig::from_build_env()).inspect_err(|e| {
        tracing::error!("Waitlist backend misconfigured: {}", e);
    })
}
