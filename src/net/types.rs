//! Wire DTOs for the CouchCat user API.
//!
//! DESIGN
//! ======
//! `LoginResponse` keeps the decoded identity next to the untouched JSON
//! payload: the identity feeds the session record while the payload is what
//! gets snapshotted into browser storage.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Email/password pair sent as the login request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Headers the owning parent wants attached to outgoing auth requests.
///
/// Kept in insertion order; a later entry with the same name replaces the
/// earlier one when the browser builds the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestHeaders(Vec<(String, String)>);

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header, replacing any existing entry with the same name
    /// (case-insensitive).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.0.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.0.push((name, value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for RequestHeaders {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// Identity fields the login endpoint must return.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Identity {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Full response body as sent by the server, including fields this
    /// client does not model.
    pub payload: serde_json::Value,
}

impl LoginResponse {
    /// Decode identity fields out of a raw payload, keeping the payload.
    pub fn from_payload(payload: serde_json::Value) -> Result<Self, serde_json::Error> {
        let identity = Identity::deserialize(&payload)?;
        Ok(Self {
            id: identity.id,
            first_name: identity.first_name,
            last_name: identity.last_name,
            email: identity.email,
            payload,
        })
    }

    /// Compact JSON rendering of the payload for browser storage.
    pub fn snapshot(&self) -> String {
        self.payload.to_string()
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom(format!("expected integer id, got {number}")))
        }
        other => Err(D::Error::custom(format!("expected integer id, got {other}"))),
    }
}
