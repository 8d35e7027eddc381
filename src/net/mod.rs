//! Networking modules for the user API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls behind the `AuthApi` seam and `types` defines
//! the request/response schema.

pub mod api;
pub mod types;
