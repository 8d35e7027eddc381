//! REST helpers for the CouchCat user API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net` with credentialed
//! cookies. Host builds: requests fail with `LoginError::Request` since
//! there is no browser fetch to hand them to.
//!
//! Request building and response decoding are plain functions so the exact
//! wire behavior is covered by host tests; only the fetch itself is
//! browser-gated.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Credentials, LoginResponse, RequestHeaders};
use crate::config::ClientConfig;
use crate::error::LoginError;

/// Remote authentication endpoints used by the login and profile pages.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /user/login` with the credentials as JSON body.
    async fn login(&self, credentials: &Credentials, headers: &RequestHeaders) -> Result<LoginResponse, LoginError>;

    /// `POST /user/logout`; the session cookie identifies the user.
    async fn logout(&self, headers: &RequestHeaders) -> Result<(), LoginError>;

    /// `GET /user/secure/{id}`; succeeds only while the session cookie
    /// still belongs to user `id`.
    async fn validate_session(&self, id: i64, headers: &RequestHeaders) -> Result<(), LoginError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request ready to hand to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Build the login request: JSON body, JSON content type, then the parent's
/// headers verbatim so they win on a name collision.
///
/// # Errors
///
/// Returns `LoginError::Request` if a header cannot be sent by a browser.
pub fn prepare_login_request(
    login_url: &str,
    credentials: &Credentials,
    headers: &RequestHeaders,
) -> Result<PreparedRequest, LoginError> {
    let body = serde_json::to_string(credentials).map_err(|e| LoginError::Request(e.to_string()))?;
    let mut all = vec![("Content-Type".to_owned(), "application/json".to_owned())];
    append_headers(&mut all, headers)?;
    Ok(PreparedRequest { method: Method::Post, url: login_url.to_owned(), headers: all, body: Some(body) })
}

pub fn prepare_logout_request(logout_url: &str, headers: &RequestHeaders) -> Result<PreparedRequest, LoginError> {
    let mut all = Vec::new();
    append_headers(&mut all, headers)?;
    Ok(PreparedRequest { method: Method::Post, url: logout_url.to_owned(), headers: all, body: None })
}

pub fn prepare_session_check_request(secure_url: &str, headers: &RequestHeaders) -> Result<PreparedRequest, LoginError> {
    let mut all = Vec::new();
    append_headers(&mut all, headers)?;
    Ok(PreparedRequest { method: Method::Get, url: secure_url.to_owned(), headers: all, body: None })
}

fn append_headers(out: &mut Vec<(String, String)>, headers: &RequestHeaders) -> Result<(), LoginError> {
    for (name, value) in headers.iter() {
        if !is_header_name(name) {
            return Err(LoginError::Request(format!("invalid header name {name:?}")));
        }
        if value.chars().any(|c| matches!(c, '\r' | '\n' | '\0')) {
            return Err(LoginError::Request(format!("invalid value for header {name}")));
        }
        out.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        out.push((name.to_owned(), value.to_owned()));
    }
    Ok(())
}

/// RFC 7230 `token`.
fn is_header_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

/// Interpret a login response by status and body text.
///
/// # Errors
///
/// Non-2xx statuses become `LoginError::Rejected` carrying the payload;
/// a 2xx body without the identity fields becomes `LoginError::Decode`.
pub fn decode_login_response(status: u16, body: &str) -> Result<LoginResponse, LoginError> {
    if !(200..300).contains(&status) {
        return Err(LoginError::Rejected { status, message: failure_payload_message(body) });
    }
    let payload: serde_json::Value = serde_json::from_str(body).map_err(|e| LoginError::Decode(e.to_string()))?;
    LoginResponse::from_payload(payload).map_err(|e| LoginError::Decode(e.to_string()))
}

/// Accept any 2xx status and discard the body.
///
/// # Errors
///
/// Non-2xx statuses become `LoginError::Rejected` carrying the payload.
pub fn expect_success(status: u16, body: &str) -> Result<(), LoginError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoginError::Rejected { status, message: failure_payload_message(body) })
    }
}

/// Render a failure payload for display: JSON strings unquoted, other JSON
/// compacted, anything else as trimmed text.
pub fn failure_payload_message(body: &str) -> String {
    let trimmed = body.trim();
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(serde_json::Value::Null) => String::new(),
        Ok(other) => other.to_string(),
        Err(_) => trimmed.to_owned(),
    }
}

/// `AuthApi` backed by browser fetch.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: ClientConfig,
}

impl HttpAuthApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { config: config.clone() }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials, headers: &RequestHeaders) -> Result<LoginResponse, LoginError> {
        let request = prepare_login_request(&self.config.login_url(), credentials, headers)?;
        let (status, body) = send(request).await?;
        decode_login_response(status, &body)
    }

    async fn logout(&self, headers: &RequestHeaders) -> Result<(), LoginError> {
        let request = prepare_logout_request(&self.config.logout_url(), headers)?;
        let (status, body) = send(request).await?;
        expect_success(status, &body)
    }

    async fn validate_session(&self, id: i64, headers: &RequestHeaders) -> Result<(), LoginError> {
        let request = prepare_session_check_request(&self.config.secure_url(id), headers)?;
        let (status, body) = send(request).await?;
        expect_success(status, &body)
    }
}

/// Send with credentialed cookies and return `(status, body text)`.
async fn send(request: PreparedRequest) -> Result<(u16, String), LoginError> {
    #[cfg(feature = "csr")]
    {
        let builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url),
            Method::Post => gloo_net::http::Request::post(&request.url),
        };
        let mut builder = builder.credentials(web_sys::RequestCredentials::Include);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| LoginError::Request(e.to_string()))?;
        let resp = built.send().await.map_err(|e| LoginError::NoResponse(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| LoginError::NoResponse(e.to_string()))?;
        Ok((status, body))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(LoginError::Request(format!("no browser fetch available for {}", request.url)))
    }
}
