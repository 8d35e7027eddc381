//! Client-side credential validation.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use validator::ValidateEmail;

use crate::net::types::Credentials;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Inline error per field; `None` means the field is fine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// The value is checked as typed; surrounding whitespace makes it invalid.
pub fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !email.validate_email() {
        Some(INVALID_EMAIL)
    } else {
        None
    }
}

pub fn password_error(raw: &str) -> Option<&'static str> {
    raw.is_empty().then_some(PASSWORD_REQUIRED)
}

/// Validate both fields; on success both are returned unchanged.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let errors = FieldErrors { email: email_error(email), password: password_error(password) };
    if errors.is_empty() {
        Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}
