//! Client for the casefile detective case-management backend.
//!
//! The crate is split the same way the request path flows:
//!
//! - [`token_store`] keeps the single bearer credential between runs.
//! - [`api`] wraps `reqwest` with the bearer header, URL building and error
//!   normalization every workflow relies on.
//! - [`features`] holds the per-resource endpoint clients and the workflows
//!   (validation, confirmation gates, logging, transitions) built on them.
//! - [`routes`] names the client views and [`views`] maps fetched records
//!   into display-ready view models.
//! - [`cli`] is the command line front end.

pub mod api;
pub mod cli;
pub mod features;
pub mod flow;
pub mod routes;
pub mod token_store;
pub mod views;

pub use api::{ApiClient, AppConfig, AppError};
pub use flow::{Confirm, FlowError, Outcome};
pub use routes::Route;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TokenStoreError};
