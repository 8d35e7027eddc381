//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; `login_flow` holds the
//! submission logic so it can run without a DOM.

pub mod login;
pub mod login_flow;
pub mod profile;
