//! Waitlist Backend Abstraction

use async_trait::async_trait;
use serde::Deserialize;

use crate::draft::SubmissionDraft;
use crate::error::Result;

/// Body returned by `POST /api/submit`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    /// Absent counts as `false`
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,
}

/// What an accepted submission yields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub message: Option<String>,
}

/// Waitlist backend trait (Strategy pattern)
///
/// Browser futures are not `Send`, so on `wasm32` the trait drops that bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait WaitlistApi {
    /// Send one draft. Exactly one attempt, no retries.
    async fn submit(&self, draft: &SubmissionDraft) -> Result<SubmitReceipt>;

    /// Backend name, for logs
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_success_reads_as_false() {
        let response: SubmitResponse = serde_json::from_str(r#"{"message":"ok?"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("ok?"));
    }

    #[test]
    fn test_message_is_optional() {
        let response: SubmitResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(response.success);
        assert!(response.message.is_none());
    }
}
