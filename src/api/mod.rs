//! Shared API access: configuration, the bearer-authenticated HTTP client and
//! its error type.
//!
//! Every feature client goes through [`ApiClient`] so the `Authorization`
//! header, URL building and status handling stay identical across resources.
//! The client reads the credential from the token store right before each
//! authenticated request and never logs it.

pub mod config;
pub mod errors;
pub mod http;

pub use config::AppConfig;
pub use errors::AppError;
pub use http::ApiClient;
pub use reqwest::Method;
