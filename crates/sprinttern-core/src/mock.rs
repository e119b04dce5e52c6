//! Mock Waitlist Backend
//!
//! For tests and offline demos. Answers with a scripted outcome and keeps
//! every draft it was sent.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{SubmitReceipt, WaitlistApi};
use crate::draft::SubmissionDraft;
use crate::error::{Result, WaitlistError};

/// How the mock answers a submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockBehavior {
    /// `{"success": true}`
    Accept,
    /// `{"success": false, "message": ...}`
    Reject(String),
    /// Connection refused
    Unreachable,
    /// Non-2xx response
    HttpStatus(u16),
    /// Body that is not the expected JSON
    MalformedResponse,
}

/// In-process waitlist backend
pub struct MockWaitlistApi {
    behavior: Mutex<MockBehavior>,
    received: Mutex<Vec<SubmissionDraft>>,
}

impl Default for MockWaitlistApi {
    fn default() -> Self {
        Self::new(MockBehavior::Accept)
    }
}

impl MockWaitlistApi {
    pub const fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Change the scripted outcome for subsequent submissions
    pub fn set_behavior(&self, behavior: MockBehavior) {
        if let Ok(mut current) = self.behavior.lock() {
            *current = behavior;
        }
    }

    /// Drafts received so far, oldest first
    pub fn received(&self) -> Vec<SubmissionDraft> {
        self.received
            .lock()
            .map(|drafts| drafts.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().map(|drafts| drafts.len()).unwrap_or(0)
    }

    fn behavior(&self) -> MockBehavior {
        self.behavior
            .lock()
            .map(|b| b.clone())
            .unwrap_or(MockBehavior::Unreachable)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WaitlistApi for MockWaitlistApi {
    async fn submit(&self, draft: &SubmissionDraft) -> Result<SubmitReceipt> {
        if let Ok(mut drafts) = self.received.lock() {
            drafts.push(draft.clone());
        }

        match self.behavior() {
            MockBehavior::Accept => Ok(SubmitReceipt {
                message: Some("Form submitted successfully".into()),
            }),
            MockBehavior::Reject(message) => Err(WaitlistError::Rejected(Some(message))),
            MockBehavior::Unreachable => {
                Err(WaitlistError::Transport("connection refused".into()))
            }
            MockBehavior::HttpStatus(code) => Err(WaitlistError::Status { code, message: None }),
            MockBehavior::MalformedResponse => Err(WaitlistError::MalformedResponse(
                "expected value at line 1 column 1".into(),
            )),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Field;

    #[tokio::test]
    async fn test_records_each_submission() {
        let api = MockWaitlistApi::default();
        let mut draft = SubmissionDraft::new();
        draft.set(Field::CompanyName, "Acme");

        api.submit(&draft).await.unwrap();
        api.submit(&SubmissionDraft::new()).await.unwrap();

        assert_eq!(api.call_count(), 2);
        assert_eq!(api.received()[0].company_name, "Acme");
        assert!(api.received()[1].is_empty());
    }

    #[tokio::test]
    async fn test_scripted_failures() {
        let api = MockWaitlistApi::new(MockBehavior::Unreachable);
        assert!(matches!(
            api.submit(&SubmissionDraft::new()).await,
            Err(WaitlistError::Transport(_))
        ));

        api.set_behavior(MockBehavior::HttpStatus(500));
        assert!(matches!(
            api.submit(&SubmissionDraft::new()).await,
            Err(WaitlistError::Status { code: 500, .. })
        ));
    }
}
