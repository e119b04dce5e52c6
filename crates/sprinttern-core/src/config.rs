//! Backend Configuration

use std::time::Duration;

use url::Url;

use crate::error::Result;

/// Base URL used when no override is supplied
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Fixed resource path for form submissions
pub const SUBMIT_PATH: &str = "/api/submit";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the waitlist backend lives
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend base URL, without the resource path
    pub base_url: String,

    /// Upper bound on one request (native targets only)
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use the `API_URL` baked in at compile time.
    ///
    /// A WASM bundle has no process environment, so the override has to be
    /// set when the bundle is built.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "API_URL" => option_env!("API_URL").map(str::to_string),
            "API_TIMEOUT_SECS" => option_env!("API_TIMEOUT_SECS").map(str::to_string),
            _ => None,
        })
    }

    /// Build from an arbitrary key lookup. Unset or blank values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        let timeout = lookup("API_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse().ok())
            .map_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS), Duration::from_secs);

        Self { base_url, timeout }
    }

    /// `{base}/api/submit`
    pub fn submit_url(&self) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{SUBMIT_PATH}"))?)
    }
}
