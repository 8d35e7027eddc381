//! # couchcat-client
//!
//! Leptos + WASM login frontend for CouchCat.
//!
//! The crate renders the login form, validates credentials, talks to the
//! CouchCat user API and keeps the shared session record that the rest of the
//! application reads. Browser-only glue (fetch, `sessionStorage`, timers) is
//! compiled under the `csr` feature; everything else builds on the host so the
//! submission flow can be unit tested without a browser.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: install logging + panic hook and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
