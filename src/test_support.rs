//! In-memory stand-ins for the browser collaborators used by flow tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::LoginError;
use crate::net::api::AuthApi;
use crate::net::types::{Credentials, LoginResponse, RequestHeaders};
use crate::state::session::{SessionInfo, SessionSink};
use crate::util::session_storage::{SnapshotStore, StorageError};

/// `AuthApi` returning scripted results and recording what it was sent.
#[derive(Default)]
pub struct FakeAuthApi {
    pub login_result: RefCell<Option<Result<LoginResponse, LoginError>>>,
    pub logout_result: RefCell<Option<Result<(), LoginError>>>,
    pub login_calls: RefCell<Vec<(Credentials, RequestHeaders)>>,
    pub logout_calls: Cell<usize>,
    pub validate_result: RefCell<Option<Result<(), LoginError>>>,
    pub validate_calls: RefCell<Vec<i64>>,
}

impl FakeAuthApi {
    pub fn answering(result: Result<LoginResponse, LoginError>) -> Self {
        let api = Self::default();
        *api.login_result.borrow_mut() = Some(result);
        api
    }

    pub fn validating(result: Result<(), LoginError>) -> Self {
        let api = Self::default();
        *api.validate_result.borrow_mut() = Some(result);
        api
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn login(&self, credentials: &Credentials, headers: &RequestHeaders) -> Result<LoginResponse, LoginError> {
        self.login_calls.borrow_mut().push((credentials.clone(), headers.clone()));
        self.login_result
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(LoginError::NoResponse("no scripted response".to_owned())))
    }

    async fn logout(&self, _headers: &RequestHeaders) -> Result<(), LoginError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout_result.borrow_mut().take().unwrap_or(Ok(()))
    }

    async fn validate_session(&self, id: i64, _headers: &RequestHeaders) -> Result<(), LoginError> {
        self.validate_calls.borrow_mut().push(id);
        self.validate_result
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(LoginError::NoResponse("no scripted response".to_owned())))
    }
}

/// Session sink counting writes.
#[derive(Default)]
pub struct RecordingSession {
    pub info: RefCell<SessionInfo>,
    pub writes: Cell<usize>,
}

impl SessionSink for RecordingSession {
    fn set_session(&self, info: SessionInfo) {
        *self.info.borrow_mut() = info;
        self.writes.set(self.writes.get() + 1);
    }

    fn session(&self) -> SessionInfo {
        self.info.borrow().clone()
    }
}

/// `SnapshotStore` over a map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl SnapshotStore for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), raw.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Navigation target log.
#[derive(Default)]
pub struct NavLog(pub RefCell<Vec<String>>);

impl NavLog {
    pub fn push(&self, path: &str) {
        self.0.borrow_mut().push(path.to_owned());
    }

    pub fn paths(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

pub fn sample_response() -> LoginResponse {
    LoginResponse::from_payload(serde_json::json!({
        "id": 1,
        "firstName": "A",
        "lastName": "B",
        "email": "a@b.com"
    }))
    .unwrap()
}

pub fn sample_credentials() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() }
}
