//! Login error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure branch of a login or logout call maps to one `LoginError`
//! variant. The form never shows `Display` output directly; it shows
//! [`LoginError::user_message`], so no branch leaves the user without feedback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const NO_RESPONSE_MESSAGE: &str = "Could not reach the server. Please try again.";
pub const REQUEST_FAILED_MESSAGE: &str = "Login request could not be sent.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from the server.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The server answered with a non-2xx status.
    #[error("login rejected: status {status}")]
    Rejected { status: u16, message: String },

    /// The request went out but no response came back.
    #[error("no response from server: {0}")]
    NoResponse(String),

    /// The request could not be built or handed to the browser.
    #[error("request could not be sent: {0}")]
    Request(String),

    /// The server accepted the login but the payload lacked identity fields.
    #[error("unexpected login response: {0}")]
    Decode(String),
}

impl LoginError {
    /// Text shown to the user for this failure.
    ///
    /// Server payloads are passed through unchanged; bad credentials and
    /// server faults render the same way.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } if !message.is_empty() => message.clone(),
            Self::Rejected { status, .. } => format!("Login failed (status {status})."),
            Self::NoResponse(_) => NO_RESPONSE_MESSAGE.to_owned(),
            Self::Request(_) => REQUEST_FAILED_MESSAGE.to_owned(),
            Self::Decode(_) => UNEXPECTED_RESPONSE_MESSAGE.to_owned(),
        }
    }
}
