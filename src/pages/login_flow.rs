//! Login submission orchestration, independent of the DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` builds a `LoginFlow` from browser collaborators and runs
//! `run_submission` inside `spawn_local`; tests run the same sequence against
//! in-memory fakes.
//!
//! The session is only written once the server has accepted the login, and
//! nothing is applied when the form unmounted while the request was in
//! flight.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use std::future::Future;

use crate::config::PROFILE_ROUTE;
use crate::error::LoginError;
use crate::net::api::AuthApi;
use crate::net::types::{Credentials, RequestHeaders};
use crate::state::login_form::{LoginFormState, SubmitOutcome};
use crate::state::session::{SessionInfo, SessionSink};
use crate::util::mount_guard::MountGuard;
use crate::util::session_storage::SnapshotStore;

pub struct LoginFlow<'a, A: ?Sized, S: ?Sized, P: ?Sized, N: ?Sized> {
    pub api: &'a A,
    pub session: &'a S,
    pub storage: &'a P,
    pub navigate: &'a N,
    pub storage_key: &'a str,
    pub guard: &'a MountGuard,
}

impl<A, S, P, N> LoginFlow<'_, A, S, P, N>
where
    A: AuthApi + ?Sized,
    S: SessionSink + ?Sized,
    P: SnapshotStore + ?Sized,
    N: Fn(&str) + ?Sized,
{
    /// Issue exactly one login request and apply its result.
    pub async fn submit(&self, credentials: &Credentials, headers: &RequestHeaders) -> SubmitOutcome {
        let result = self.api.login(credentials, headers).await;
        if !self.guard.is_alive() {
            leptos::logging::log!("login settled after the form unmounted; ignoring result");
            return SubmitOutcome::Abandoned;
        }

        match result {
            Ok(response) => {
                self.session.set_session(SessionInfo::authenticated(&response));
                if let Err(e) = self.storage.save(self.storage_key, &response.snapshot()) {
                    leptos::logging::warn!("could not persist login snapshot: {e}");
                }
                (self.navigate)(PROFILE_ROUTE);
                SubmitOutcome::Authenticated
            }
            Err(err) => {
                log_failure(&err);
                SubmitOutcome::Failed(err.user_message())
            }
        }
    }

    /// Submit, record the outcome on the form, wait for `hold`, then reset
    /// the form. `update_form` is only called while the guard is alive.
    pub async fn run_submission<H, U>(
        &self,
        credentials: &Credentials,
        headers: &RequestHeaders,
        hold: H,
        update_form: U,
    ) -> SubmitOutcome
    where
        H: Future<Output = ()>,
        U: Fn(&dyn Fn(&mut LoginFormState)),
    {
        let settle = async {
            let outcome = self.submit(credentials, headers).await;
            if self.guard.is_alive() {
                update_form(&|form: &mut LoginFormState| form.record_outcome(&outcome));
            }
            outcome
        };
        let outcome = hold_until_settled(settle, hold).await;
        if self.guard.is_alive() {
            update_form(&LoginFormState::reset);
        }
        outcome
    }
}

fn log_failure(err: &LoginError) {
    match err {
        LoginError::Rejected { status, message } => {
            leptos::logging::warn!("login rejected: status={status} body={message}");
        }
        LoginError::NoResponse(_) | LoginError::Request(_) | LoginError::Decode(_) => {
            leptos::logging::error!("login failed: {err}");
        }
    }
}

/// Run `flow` alongside the minimum `hold` and yield the flow's output once
/// both have finished.
pub async fn hold_until_settled<F, H>(flow: F, hold: H) -> F::Output
where
    F: Future,
    H: Future<Output = ()>,
{
    let (output, ()) = futures::join!(flow, hold);
    output
}
