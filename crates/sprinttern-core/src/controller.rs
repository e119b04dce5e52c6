//! Form Controller
//!
//! Owns the waitlist draft and its submission status, and mediates the one
//! outbound call.
//!
//! Submission is split in two so the UI can keep accepting edits while the
//! request is pending:
//!
//! ```rust,ignore
//! let pending = controller.begin_submit();          // in flight, snapshot taken
//! let outcome = api.submit(pending.draft()).await;  // edits still allowed here
//! controller.finish_submit(outcome);                // Success | Error
//! ```
//!
//! [`FormController::submit`] runs all three steps when the caller holds the
//! controller for the whole request.

use crate::api::{SubmitReceipt, WaitlistApi};
use crate::draft::{Field, SubmissionDraft};
use crate::error::Result;

/// Result of the most recent submit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// A submit that has started but not finished.
///
/// Holds the draft exactly as it was when the submit began; later edits do
/// not reach the request.
#[derive(Clone, Debug)]
#[must_use = "a pending submission must be sent and then finished"]
pub struct PendingSubmission {
    draft: SubmissionDraft,
}

impl PendingSubmission {
    pub const fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }
}

/// Waitlist form state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormController {
    draft: SubmissionDraft,
    status: SubmissionStatus,
    error_message: Option<&'static str>,
    in_flight: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Text to show under the form after a failed submit
    pub const fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }

    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Replace one field. No validation; accepted while in flight.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Mark the form in flight and snapshot the draft for sending.
    ///
    /// Never refuses: a draft with empty required fields is still sent.
    pub fn begin_submit(&mut self) -> PendingSubmission {
        self.in_flight = true;
        self.status = SubmissionStatus::Idle;
        self.error_message = None;

        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            tracing::debug!("Submitting with empty required fields: {:?}", missing);
        }

        PendingSubmission {
            draft: self.draft.clone(),
        }
    }

    /// Apply the outcome of a submit started with [`Self::begin_submit`].
    ///
    /// Success clears the draft. Any error keeps it so the user can retry.
    /// `in_flight` is always false afterwards.
    pub fn finish_submit(&mut self, outcome: Result<SubmitReceipt>) -> SubmissionStatus {
        match outcome {
            Ok(receipt) => {
                tracing::info!(
                    "Waitlist submission accepted: {}",
                    receipt.message.as_deref().unwrap_or("no message")
                );
                self.status = SubmissionStatus::Success;
                self.draft = SubmissionDraft::new();
                self.error_message = None;
            }
            Err(e) => {
                tracing::warn!("Waitlist submission failed: {}", e);
                self.status = SubmissionStatus::Error;
                self.error_message = Some(e.user_message());
            }
        }

        self.in_flight = false;
        self.status
    }

    /// Send the current draft through `api` and record the outcome.
    ///
    /// Exactly one call to `api.submit`. Never fails; every failure becomes
    /// [`SubmissionStatus::Error`].
    pub async fn submit<A>(&mut self, api: &A) -> SubmissionStatus
    where
        A: WaitlistApi + ?Sized,
    {
        let pending = self.begin_submit();
        tracing::debug!("Sending waitlist draft via {}", api.name());
        let outcome = api.submit(pending.draft()).await;
        self.finish_submit(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GENERIC_SUBMIT_ERROR, WaitlistError};
    use crate::mock::{MockBehavior, MockWaitlistApi};

    fn acme_controller() -> FormController {
        let mut controller = FormController::new();
        controller.update_field(Field::CompanyName, "Acme");
        controller.update_field(Field::Role, "Owner");
        controller.update_field(Field::Email, "a@acme.com");
        controller.update_field(Field::Website, "");
        controller.update_field(Field::TaskDescription, "Build a page");
        controller.update_field(Field::Timeline, "this-week");
        controller.update_field(Field::Budget, "50-75");
        controller
    }

    #[test]
    fn test_initial_state() {
        let controller = FormController::new();
        assert!(controller.draft().is_empty());
        assert_eq!(controller.status(), SubmissionStatus::Idle);
        assert!(!controller.is_in_flight());
        assert!(controller.error_message().is_none());
    }

    #[test]
    fn test_update_field_last_write_wins() {
        let mut controller = FormController::new();
        controller.update_field(Field::Role, "Intern");
        controller.update_field(Field::Budget, "75-150");
        controller.update_field(Field::Role, "Owner");

        assert_eq!(controller.draft().get(Field::Role), "Owner");
        assert_eq!(controller.draft().get(Field::Budget), "75-150");
        assert_eq!(controller.draft().get(Field::Email), "");
    }

    #[tokio::test]
    async fn test_success_clears_draft() {
        let api = MockWaitlistApi::new(MockBehavior::Accept);
        let mut controller = acme_controller();

        let status = controller.submit(&api).await;

        assert_eq!(status, SubmissionStatus::Success);
        assert_eq!(controller.status(), SubmissionStatus::Success);
        assert_eq!(controller.draft(), &SubmissionDraft::new());
        assert!(!controller.is_in_flight());
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_every_failure_keeps_draft() {
        let failures = [
            MockBehavior::Reject("Invalid email format".into()),
            MockBehavior::Unreachable,
            MockBehavior::HttpStatus(500),
            MockBehavior::MalformedResponse,
        ];

        for behavior in failures {
            let api = MockWaitlistApi::new(behavior.clone());
            let mut controller = acme_controller();
            let before = controller.draft().clone();

            let status = controller.submit(&api).await;

            assert_eq!(status, SubmissionStatus::Error, "{behavior:?}");
            assert_eq!(controller.draft(), &before, "{behavior:?}");
            assert!(!controller.is_in_flight(), "{behavior:?}");
            assert_eq!(api.call_count(), 1);
        }
    }

    #[tokio::test]
    async fn test_error_message_follows_status() {
        let api = MockWaitlistApi::new(MockBehavior::Reject("Invalid email format".into()));
        let mut controller = acme_controller();

        controller.submit(&api).await;
        assert_eq!(controller.error_message(), Some(GENERIC_SUBMIT_ERROR));

        let _pending = controller.begin_submit();
        assert!(controller.error_message().is_none());

        api.set_behavior(MockBehavior::Accept);
        controller.submit(&api).await;
        assert!(controller.error_message().is_none());
    }

    #[test]
    fn test_config_failure_gets_config_message() {
        let mut controller = acme_controller();
        let _pending = controller.begin_submit();

        controller.finish_submit(Err(WaitlistError::Config("invalid backend URL".into())));

        let message = controller.error_message().unwrap();
        assert_ne!(message, GENERIC_SUBMIT_ERROR);
        assert_eq!(controller.status(), SubmissionStatus::Error);
    }

    #[tokio::test]
    async fn test_empty_draft_is_still_sent() {
        let api = MockWaitlistApi::default();
        let mut controller = FormController::new();

        controller.submit(&api).await;

        assert_eq!(api.call_count(), 1);
        assert!(api.received()[0].is_empty());
    }

    #[test]
    fn test_in_flight_between_begin_and_finish() {
        let mut controller = acme_controller();

        let pending = controller.begin_submit();
        assert!(controller.is_in_flight());
        assert_eq!(controller.status(), SubmissionStatus::Idle);
        assert_eq!(pending.draft(), controller.draft());

        controller.finish_submit(Err(WaitlistError::Timeout));
        assert!(!controller.is_in_flight());
    }

    #[tokio::test]
    async fn test_edits_while_in_flight_do_not_reach_request() {
        let api = MockWaitlistApi::new(MockBehavior::Unreachable);
        let mut controller = acme_controller();

        let pending = controller.begin_submit();
        controller.update_field(Field::Email, "new@acme.com");
        let outcome = api.submit(pending.draft()).await;
        controller.finish_submit(outcome);

        assert_eq!(api.received()[0].email, "a@acme.com");
        assert_eq!(controller.draft().email, "new@acme.com");
    }

    #[tokio::test]
    async fn test_edits_after_submit_do_not_alter_sent_body() {
        let api = MockWaitlistApi::new(MockBehavior::Accept);
        let mut controller = acme_controller();

        controller.submit(&api).await;
        controller.update_field(Field::CompanyName, "Globex");

        assert_eq!(api.received()[0].company_name, "Acme");
    }

    #[tokio::test]
    async fn test_status_is_overwritten_by_next_submit() {
        let api = MockWaitlistApi::new(MockBehavior::HttpStatus(503));
        let mut controller = acme_controller();

        assert_eq!(controller.submit(&api).await, SubmissionStatus::Error);

        api.set_behavior(MockBehavior::Accept);
        assert_eq!(controller.submit(&api).await, SubmissionStatus::Success);

        api.set_behavior(MockBehavior::Unreachable);
        controller.update_field(Field::Email, "b@acme.com");
        assert_eq!(controller.submit(&api).await, SubmissionStatus::Error);
        assert_eq!(controller.draft().email, "b@acme.com");
    }

    #[tokio::test]
    async fn test_begin_resets_previous_status() {
        let api = MockWaitlistApi::new(MockBehavior::Unreachable);
        let mut controller = acme_controller();
        controller.submit(&api).await;

        let _pending = controller.begin_submit();
        assert_eq!(controller.status(), SubmissionStatus::Idle);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod over_http {
        use serde_json::json;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        use super::*;
        use crate::config::ApiConfig;
        use crate::http::HttpWaitlistClient;

        #[tokio::test]
        async fn test_acme_submission_succeeds() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/api/submit"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
                .expect(1)
                .mount(&server)
                .await;

            let client = HttpWaitlistClient::new(&ApiConfig::new(server.uri())).unwrap();
            let mut controller = acme_controller();

            assert_eq!(controller.submit(&client).await, SubmissionStatus::Success);
            assert!(controller.draft().is_empty());
            assert!(!controller.is_in_flight());
        }

        #[tokio::test]
        async fn test_submit_is_the_only_backend_request() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/api/submit"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
                .mount(&server)
                .await;

            let client = HttpWaitlistClient::new(&ApiConfig::new(server.uri())).unwrap();
            let mut controller = acme_controller();
            controller.submit(&client).await;

            let requests = server.received_requests().await.unwrap();
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].method.as_str(), "POST");
            assert_eq!(requests[0].url.path(), "/api/submit");
        }

        #[tokio::test]
        async fn test_acme_submission_network_error() {
            let client = HttpWaitlistClient::new(&ApiConfig::new("http://127.0.0.1:1")).unwrap();
            let mut controller = acme_controller();
            let before = controller.draft().clone();

            assert_eq!(controller.submit(&client).await, SubmissionStatus::Error);
            assert_eq!(controller.draft(), &before);
            assert!(!controller.is_in_flight());
        }
    }
}
