//! Root application component with routing and shared state.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::{ClientConfig, LOGIN_ROUTE};
use crate::net::types::RequestHeaders;
use crate::pages::{login::LoginPage, profile::ProfilePage};
use crate::state::session::SessionStore;

/// Root application component.
///
/// Owns the session store and the request header set, restores a session
/// saved by an earlier login in this tab once the server confirms it, and
/// passes both to the pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env_or_default();
    let session = SessionStore::new();
    let headers = RwSignal::new(RequestHeaders::new());

    #[cfg(feature = "csr")]
    {
        use crate::net::api::HttpAuthApi;
        use crate::state::session::restore_session;
        use crate::util::session_storage::BrowserSessionStorage;

        let api = HttpAuthApi::new(&config);
        let storage_key = config.session_storage_key.clone();
        let headers_value = headers.get_untracked();
        session.set_restoring(true);
        leptos::task::spawn_local(async move {
            restore_session(&api, &BrowserSessionStorage, &session, &storage_key, &headers_value).await;
            session.set_restoring(false);
        });
    }

    let login_config = config.clone();
    let profile_config = config;

    view! {
        <Title text="CouchCat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_ROUTE/> }/>
                <Route
                    path=StaticSegment("login")
                    view=move || view! { <LoginPage session=session headers=headers config=login_config.clone()/> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=move || view! { <ProfilePage session=session headers=headers config=profile_config.clone()/> }
                />
            </Routes>
        </Router>
    }
}
