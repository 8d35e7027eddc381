//! Client configuration resolved from build-time environment variables.
//!
//! WASM bundles have no process environment at runtime, so values are baked
//! in with `option_env!` when the crate is compiled:
//!
//! - `COUCHCAT_API_BASE_URL`: user API origin (default `http://localhost:8081`)
//! - `COUCHCAT_SUBMIT_HOLD_MS`: minimum time the form stays busy after a
//!   submit (default `2000`)
//! - `COUCHCAT_SESSION_KEY`: `sessionStorage` key for the login snapshot
//!   (default `user`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";
pub const DEFAULT_SUBMIT_HOLD_MS: u64 = 2000;
pub const DEFAULT_SESSION_STORAGE_KEY: &str = "user";

pub const LOGIN_ROUTE: &str = "/login";
pub const PROFILE_ROUTE: &str = "/profile";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("api base url must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("submit hold must be a whole number of milliseconds, got {0:?}")]
    InvalidSubmitHold(String),

    #[error("session storage key must not be empty")]
    EmptyStorageKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the user API, without a trailing slash.
    pub api_base_url: String,
    /// Shortest time the form stays in the submitting state.
    pub submit_hold: Duration,
    /// `sessionStorage` key holding the raw login payload.
    pub session_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            submit_hold: Duration::from_millis(DEFAULT_SUBMIT_HOLD_MS),
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("COUCHCAT_API_BASE_URL"),
            option_env!("COUCHCAT_SUBMIT_HOLD_MS"),
            option_env!("COUCHCAT_SESSION_KEY"),
        )
    }

    /// Like [`ClientConfig::from_build_env`], but logs and falls back to
    /// defaults instead of failing.
    pub fn from_build_env_or_default() -> Self {
        Self::from_build_env().unwrap_or_else(|e| {
            leptos::logging::warn!("invalid client config, using defaults: {e}");
            Self::default()
        })
    }

    /// Build config from optional raw values; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a non-HTTP base URL, a non-numeric hold or
    /// a blank storage key.
    pub fn from_values(
        base_url: Option<&str>,
        submit_hold_ms: Option<&str>,
        storage_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = match base_url.map(str::trim) {
            None | Some("") => DEFAULT_API_BASE_URL.to_owned(),
            Some(raw) => parse_base_url(raw)?,
        };
        let submit_hold = match submit_hold_ms.map(str::trim) {
            None | Some("") => Duration::from_millis(DEFAULT_SUBMIT_HOLD_MS),
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidSubmitHold(raw.to_owned()))?,
        };
        let session_storage_key = match storage_key {
            None => DEFAULT_SESSION_STORAGE_KEY.to_owned(),
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyStorageKey),
            Some(raw) => raw.trim().to_owned(),
        };
        Ok(Self { api_base_url, submit_hold, session_storage_key })
    }

    pub fn login_url(&self) -> String {
        format!("{}/user/login", self.api_base_url)
    }

    pub fn logout_url(&self) -> String {
        format!("{}/user/logout", self.api_base_url)
    }

    /// Endpoint that answers 2xx only while the session cookie belongs to `id`.
    pub fn secure_url(&self, id: i64) -> String {
        format!("{}/user/secure/{id}", self.api_base_url)
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_owned())),
    }
}
