//! Auth feature: login, registration, email verification, logout and the
//! page guard. These calls are the means of obtaining a credential, so none of
//! them require one. Passwords and tokens must never be logged.
//!
//! Flow overview: registration posts the account and leaves it pending until
//! the emailed link is followed; verification consumes the link's `token`
//! query parameter; login trades username and password for a bearer token
//! that lands in the token store.

pub mod client;
pub mod flows;
pub mod guards;
pub mod types;

pub use guards::{is_protected, require_auth};
