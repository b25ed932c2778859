//! Authentication middleware extractors.
//!
//! - [`guard::CurrentUser`] -- resolves the session cookie to a user and
//!   rejects the request with 401 when it cannot.

pub mod guard;
