//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_ROUTE;
use crate::state::session::{SessionInfo, SessionStore};

pub fn should_redirect_unauth(info: &SessionInfo, restoring: bool) -> bool {
    !restoring && !info.is_authenticated
}

/// Redirect to `/login` whenever no user is signed in and no saved session is
/// still being checked.
pub fn install_unauth_redirect<F>(session: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.info(), session.is_restoring()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
