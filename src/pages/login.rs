//! Login page: email + password form against the CouchCat user API.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::types::RequestHeaders;
use crate::state::login_form::LoginFormState;
use crate::state::session::SessionStore;
use crate::util::mount_guard::MountGuard;

/// Login form.
///
/// `headers` belongs to the parent that manages cross-request session
/// headers; they are attached verbatim to the login request.
#[component]
pub fn LoginPage(
    session: SessionStore,
    #[prop(into)] headers: Signal<RequestHeaders>,
    config: ClientConfig,
) -> impl IntoView {
    let form = RwSignal::new(LoginFormState::default());
    let navigate = use_navigate();

    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginFormState::begin_submit).flatten() else {
            return;
        };
        let headers_value = headers.get_untracked();

        #[cfg(feature = "csr")]
        {
            use leptos_router::NavigateOptions;

            use crate::net::api::HttpAuthApi;
            use crate::pages::login_flow::LoginFlow;
            use crate::util::session_storage::BrowserSessionStorage;

            let api = HttpAuthApi::new(&config);
            let storage_key = config.session_storage_key.clone();
            let hold = config.submit_hold;
            let guard = guard.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let navigate_to = move |path: &str| navigate(path, NavigateOptions::default());
                let flow = LoginFlow {
                    api: &api,
                    session: &session,
                    storage: &BrowserSessionStorage,
                    navigate: &navigate_to,
                    storage_key: &storage_key,
                    guard: &guard,
                };
                flow.run_submission(
                    &credentials,
                    &headers_value,
                    gloo_timers::future::sleep(hold),
                    |apply: &dyn Fn(&mut LoginFormState)| form.update(|f| apply(f)),
                )
                .await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, headers_value, &config, &guard, &navigate, session);
        }
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit novalidate=true>
                <h1>"Login!"</h1>
                <Show when=move || form.with(|f| f.failure.is_some())>
                    <p class="login-message">{move || form.with(|f| f.failure.clone().unwrap_or_default())}</p>
                </Show>
                <input
                    class="login-input"
                    type="email"
                    name="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                />
                <span class="login-field-error">{move || form.with(|f| f.errors.email.unwrap_or_default())}</span>
                <input
                    class="login-input"
                    type="password"
                    name="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                />
                <span class="login-field-error">{move || form.with(|f| f.errors.password.unwrap_or_default())}</span>
                <button class="login-button" type="submit" disabled=move || form.with(LoginFormState::is_submitting)>
                    {move || form.with(LoginFormState::submit_label)}
                </button>
            </form>
        </div>
    }
}
