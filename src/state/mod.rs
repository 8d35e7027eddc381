//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is application-wide and injected into pages; `login_form` is
//! local to one mounted login form.

pub mod login_form;
pub mod session;
