//! HTTP Waitlist Client
//!
//! `reqwest`-backed implementation of `WaitlistApi`. The same code runs
//! natively and in the browser, where `reqwest` goes through `fetch`.

#[cfg(any(target_arch = "wasm32", test))]
use std::future::Future;
#[cfg(target_arch = "wasm32")]
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::api::{SubmitReceipt, SubmitResponse, WaitlistApi};
use crate::config::ApiConfig;
use crate::draft::SubmissionDraft;
use crate::error::{Result, WaitlistError};

/// Client for the external waitlist backend
#[derive(Clone, Debug)]
pub struct HttpWaitlistClient {
    client: reqwest::Client,
    submit_url: Url,
    #[cfg(target_arch = "wasm32")]
    timeout: Duration,
}

impl HttpWaitlistClient {
    /// Create from configuration. Fails only if the base URL is unusable.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            submit_url: config.submit_url()?,
            #[cfg(target_arch = "wasm32")]
            timeout: config.timeout,
        })
    }

    async fn send(&self, draft: &SubmissionDraft) -> Result<SubmitReceipt> {
        tracing::debug!("POST {}", self.submit_url);

        let response = self
            .client
            .post(self.submit_url.as_str())
            .json(draft)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<SubmitResponse>(&body)
                .ok()
                .and_then(|parsed| parsed.message);
            return Err(WaitlistError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let parsed: SubmitResponse = serde_json::from_str(&body)?;
        if parsed.success {
            Ok(SubmitReceipt {
                message: parsed.message,
            })
        } else {
            Err(WaitlistError::Rejected(parsed.message))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &ApiConfig) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(config.timeout).build()?)
}

// fetch has no client-level timeout; `submit` races a timer instead.
#[cfg(target_arch = "wasm32")]
fn build_client(_config: &ApiConfig) -> Result<reqwest::Client> {
    Ok(reqwest::Client::new())
}

#[cfg(target_arch = "wasm32")]
fn browser_deadline(timeout: Duration) -> gloo_timers::future::TimeoutFuture {
    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis)
}

/// Resolve to `request`'s outcome, or `Timeout` if `deadline` fires first.
/// The losing request future is dropped, which aborts the fetch.
#[cfg(any(target_arch = "wasm32", test))]
async fn race_deadline<T>(
    request: impl Future<Output = Result<T>>,
    deadline: impl Future<Output = ()>,
) -> Result<T> {
    use futures::future::{Either, select};

    let request = std::pin::pin!(request);
    let deadline = std::pin::pin!(deadline);
    match select(request, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(WaitlistError::Timeout),
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WaitlistApi for HttpWaitlistClient {
    #[cfg(target_arch = "wasm32")]
    async fn submit(&self, draft: &SubmissionDraft) -> Result<SubmitReceipt> {
        race_deadline(self.send(draft), browser_deadline(self.timeout)).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn submit(&self, draft: &SubmissionDraft) -> Result<SubmitReceipt> {
        self.send(draft).await
    }

    fn name(&self) -> &str {
        "http"
    }
}
