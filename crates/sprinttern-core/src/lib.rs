//! # sprinttern-core
//!
//! Waitlist form state and the one outbound call the landing page makes.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     FormController                        │
//! │  ┌─────────────────┐   snapshot   ┌────────────────────┐  │
//! │  │ SubmissionDraft │─────────────▶│    WaitlistApi     │  │
//! │  │ + status flags  │◀─────────────│    (Strategy)      │  │
//! │  └─────────────────┘   outcome    └────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! `WaitlistApi` is implemented by [`HttpWaitlistClient`] for the real
//! backend and by [`MockWaitlistApi`] for tests.

pub mod api;
pub mod config;
pub mod controller;
pub mod draft;
pub mod error;
pub mod http;
pub mod mock;

pub use api::{SubmitReceipt, SubmitResponse, WaitlistApi};
pub use config::ApiConfig;
pub use controller::{FormController, PendingSubmission, SubmissionStatus};
pub use draft::{Budget, Field, SubmissionDraft, Timeline};
pub use error::{Result, WaitlistError};
pub use http::HttpWaitlistClient;
pub use mock::{MockBehavior, MockWaitlistApi};
