//! Error Types

use thiserror::Error;

/// Result type alias for waitlist operations
pub type Result<T> = std::result::Result<T, WaitlistError>;

/// The inline message shown for every failed submission.
pub const GENERIC_SUBMIT_ERROR: &str =
    "There was an error submitting your form. Please try again or contact us directly.";

/// Waitlist error types
#[derive(Error, Debug)]
pub enum WaitlistError {
    /// Backend unreachable or the connection failed mid-request
    #[error("Transport error: {0}")]
    Transport(String),

    /// No response within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Backend answered with a non-2xx status
    #[error("HTTP {code}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { code: u16, message: Option<String> },

    /// Response body was not the expected JSON object
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Backend parsed the request but reported `success: false`
    #[error("Submission rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WaitlistError {
    /// User-facing text. Submission failures all collapse to one message.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Config(_) => "The form is not configured correctly. Please contact us directly.",
            _ => GENERIC_SUBMIT_ERROR,
        }
    }
}

impl From<reqwest::Error> for WaitlistError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        if err.is_decode() {
            return Self::MalformedResponse(err.to_string());
        }
        if err.is_builder() {
            return Self::Config(err.to_string());
        }
        Self::Transport(err.to_string())
    }
}

impl From<url::ParseError> for WaitlistError {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("invalid backend URL: {err}"))
    }
}

impl From<serde_json::Error> for WaitlistError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
