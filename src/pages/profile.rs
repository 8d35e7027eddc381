//! Profile page showing the signed-in identity, with sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the route the login form lands on. Visitors without a session are
//! sent back to `/login` by the page's redirect effect, which also handles
//! the navigation after sign-out.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::AuthApi;
use crate::net::types::RequestHeaders;
use crate::state::session::{SessionInfo, SessionSink, SessionStore};
use crate::util::auth::install_unauth_redirect;
use crate::util::session_storage::SnapshotStore;

/// Tell the server to end the session, then drop local session state.
///
/// Local state is cleared even when the server call fails so the browser
/// never keeps showing a session the user asked to end. Navigation is left to
/// whoever watches the session.
pub async fn sign_out<A, S, P>(api: &A, session: &S, storage: &P, storage_key: &str, headers: &RequestHeaders)
where
    A: AuthApi + ?Sized,
    S: SessionSink + ?Sized,
    P: SnapshotStore + ?Sized,
{
    if let Err(e) = api.logout(headers).await {
        leptos::logging::warn!("logout request failed: {e}");
    }
    session.set_session(SessionInfo::default());
    if let Err(e) = storage.remove(storage_key) {
        leptos::logging::warn!("could not remove session snapshot: {e}");
    }
}

#[component]
pub fn ProfilePage(
    session: SessionStore,
    #[prop(into)] headers: Signal<RequestHeaders>,
    config: ClientConfig,
) -> impl IntoView {
    install_unauth_redirect(session, use_navigate());

    let busy = RwSignal::new(false);
    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let headers_value = headers.get_untracked();

        #[cfg(feature = "csr")]
        {
            use crate::net::api::HttpAuthApi;
            use crate::util::session_storage::BrowserSessionStorage;

            let api = HttpAuthApi::new(&config);
            let storage_key = config.session_storage_key.clone();
            leptos::task::spawn_local(async move {
                sign_out(&api, &session, &BrowserSessionStorage, &storage_key, &headers_value).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (headers_value, &config);
        }
    };

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <h1>{move || format!("Welcome, {}", session.info().display_name())}</h1>
                <p class="profile-email">{move || session.info().email}</p>
                <button class="login-button" on:click=on_logout disabled=move || busy.get()>
                    "Logout"
                </button>
            </div>
        </div>
    }
}
