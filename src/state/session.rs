//! Session record for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `SessionStore` and hands it to every page that reads or
//! writes the signed-in identity. Writes happen only after the server has
//! accepted a login, or confirmed that a persisted snapshot still matches the
//! session cookie.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::error::LoginError;
use crate::net::api::AuthApi;
use crate::net::types::{LoginResponse, RequestHeaders};
use crate::util::session_storage::SnapshotStore;

/// Who is signed in, as seen by the rest of the application.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionInfo {
    pub is_authenticated: bool,
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl SessionInfo {
    pub fn authenticated(response: &LoginResponse) -> Self {
        Self {
            is_authenticated: true,
            id: Some(response.id),
            first_name: response.first_name.clone(),
            last_name: response.last_name.clone(),
            email: response.email.clone(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Write access to the shared session record.
pub trait SessionSink {
    fn set_session(&self, info: SessionInfo);
    fn session(&self) -> SessionInfo;
}

/// Reactive session store shared by the pages.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    info: RwSignal<SessionInfo>,
    restoring: RwSignal<bool>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { info: RwSignal::new(SessionInfo::default()), restoring: RwSignal::new(false) }
    }

    /// Tracked read for use inside views and effects.
    pub fn info(&self) -> SessionInfo {
        self.info.get()
    }

    /// Tracked; true while a saved session is being checked with the server.
    pub fn is_restoring(&self) -> bool {
        self.restoring.get()
    }

    pub fn set_restoring(&self, restoring: bool) {
        self.restoring.set(restoring);
    }

    pub fn clear(&self) {
        self.info.set(SessionInfo::default());
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSink for SessionStore {
    fn set_session(&self, info: SessionInfo) {
        self.info.set(info);
    }

    fn session(&self) -> SessionInfo {
        self.info.get_untracked()
    }
}

/// Restore a session from the snapshot saved by a previous login.
///
/// The snapshot is trusted only after the server confirms the session cookie
/// still belongs to the same user. A snapshot that no longer decodes, or that
/// the server rejects, is removed. Without an answer from the server the
/// snapshot is kept and the user stays signed out. Returns whether a session
/// was restored.
pub async fn restore_session<A, S, P>(
    api: &A,
    storage: &P,
    session: &S,
    key: &str,
    headers: &RequestHeaders,
) -> bool
where
    A: AuthApi + ?Sized,
    S: SessionSink + ?Sized,
    P: SnapshotStore + ?Sized,
{
    let Some(raw) = storage.load(key) else {
        return false;
    };
    let decoded = serde_json::from_str::<serde_json::Value>(&raw)
        .map_err(|e| e.to_string())
        .and_then(|payload| LoginResponse::from_payload(payload).map_err(|e| e.to_string()));
    let response = match decoded {
        Ok(response) => response,
        Err(e) => {
            leptos::logging::warn!("discarding unreadable session snapshot: {e}");
            discard_snapshot(storage, key);
            return false;
        }
    };

    match api.validate_session(response.id, headers).await {
        Ok(()) => {
            session.set_session(SessionInfo::authenticated(&response));
            leptos::logging::log!("restored session for user {}", response.id);
            true
        }
        Err(LoginError::Rejected { status, .. }) => {
            leptos::logging::log!("saved session for user {} expired (status {status})", response.id);
            discard_snapshot(storage, key);
            false
        }
        Err(e) => {
            leptos::logging::warn!("could not check saved session: {e}");
            false
        }
    }
}

fn discard_snapshot<P: SnapshotStore + ?Sized>(storage: &P, key: &str) {
    if let Err(e) = storage.remove(key) {
        leptos::logging::warn!("failed to remove session snapshot: {e}");
    }
}
