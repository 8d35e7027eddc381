//! Render state and submission state machine for the login form.
//!
//! DESIGN
//! ======
//! Idle -> Submitting -> {Authenticated, Failed}; `reset` returns a failed or
//! idle form to Idle with empty fields. The failure message survives the
//! reset and is only cleared by the next submit that passes validation.
//!
//! The submit button stays busy from `begin_submit` until `reset`, even once
//! the outcome is recorded, so a fast answer still holds the form.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use crate::net::types::Credentials;
use crate::util::validation::{FieldErrors, validate_credentials};

pub const SUBMIT_LABEL: &str = "Login";
pub const SUBMITTING_LABEL: &str = "Loading";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Authenticated,
    Failed,
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Authenticated,
    Failed(String),
    /// The form went away before the response arrived; nothing was applied.
    Abandoned,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub failure: Option<String>,
    pub phase: SubmitPhase,
    attempted: bool,
    busy: bool,
}

impl LoginFormState {
    pub fn is_submitting(&self) -> bool {
        self.busy
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.revalidate();
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.revalidate();
    }

    /// Inline errors appear after the first submit attempt and then track
    /// edits.
    fn revalidate(&mut self) {
        if self.attempted {
            self.errors = validate_credentials(&self.email, &self.password).err().unwrap_or_default();
        }
    }

    /// Validate and enter Submitting. Returns `None` when a submission is
    /// already in flight or a field is invalid.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }
        self.attempted = true;
        match validate_credentials(&self.email, &self.password) {
            Ok(credentials) => {
                self.errors = FieldErrors::default();
                self.failure = None;
                self.phase = SubmitPhase::Submitting;
                self.busy = true;
                Some(credentials)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn record_outcome(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Authenticated => self.phase = SubmitPhase::Authenticated,
            SubmitOutcome::Failed(message) => {
                self.failure = Some(message.clone());
                self.phase = SubmitPhase::Failed;
            }
            SubmitOutcome::Abandoned => {}
        }
    }

    /// Clear both fields and re-enable submit.
    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.errors = FieldErrors::default();
        self.attempted = false;
        self.busy = false;
        if self.phase != SubmitPhase::Authenticated {
            self.phase = SubmitPhase::Idle;
        }
    }
}
