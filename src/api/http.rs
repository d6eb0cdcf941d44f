//! HTTP helpers for the casefile JSON API. Feature clients use these helpers
//! to avoid duplicating request setup: building URLs from the configured base,
//! attaching the bearer credential, and turning non-success statuses into
//! [`AppError::Http`] with a sanitized body.

use super::{config::AppConfig, errors::AppError};
use crate::token_store::TokenStore;
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info_span, Instrument};

/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the casefile backend.
///
/// Cloning is cheap: the connection pool and the token store are shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(APP_USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            tokens,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    /// Fetches JSON with the bearer credential.
    ///
    /// # Errors
    /// Fails without sending anything when no credential is stored, and with
    /// [`AppError::Http`] on a non-success status.
    pub async fn authenticated_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let token = self.credential()?;
        let url = build_url(&self.base_url, path);
        let request = self
            .http
            .get(&url)
            .bearer_auth(token.expose_secret());

        let response = send(request, &Method::GET, &url).await?;
        handle_json_response(response).await
    }

    /// Sends a request with the bearer credential and an optional JSON body.
    ///
    /// A success response with an empty or non-JSON body yields `None`.
    ///
    /// # Errors
    /// Fails without sending anything when no credential is stored, and with
    /// [`AppError::Http`] carrying the status and response text on a
    /// non-success status.
    pub async fn authenticated_send<B, T>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<Option<T>, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.credential()?;
        let url = build_url(&self.base_url, path);
        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(token.expose_secret());

        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(encode(body)?);
        }

        let response = send(request, &method, &url).await?;
        handle_optional_json_response(response).await
    }

    /// Deletes with the bearer credential, discarding any response body.
    ///
    /// # Errors
    /// Same conditions as [`ApiClient::authenticated_send`].
    pub async fn authenticated_delete(&self, path: &str) -> Result<(), AppError> {
        self.authenticated_send::<Value, Value>(path, Method::DELETE, None)
            .await
            .map(|_| ())
    }

    /// Fetches JSON without credentials, used by the email verification link.
    ///
    /// # Errors
    /// Returns [`AppError::Http`] on a non-success status.
    pub async fn public_get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, AppError> {
        let url = build_url(&self.base_url, path);
        let request = self.http.get(&url);

        let response = send(request, &Method::GET, &url).await?;
        handle_optional_json_response(response).await
    }

    /// Posts JSON without credentials, used by login and registration.
    ///
    /// # Errors
    /// Returns [`AppError::Http`] on a non-success status.
    pub async fn public_post<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = build_url(&self.base_url, path);
        let request = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(encode(body)?);

        let response = send(request, &Method::POST, &url).await?;
        handle_optional_json_response(response).await
    }

    fn credential(&self) -> Result<SecretString, AppError> {
        self.tokens.get()?.ok_or(AppError::Unauthenticated)
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, AppError> {
    serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

async fn send(request: RequestBuilder, method: &Method, url: &str) -> Result<Response, AppError> {
    let span = info_span!(
        "casefile.request",
        http.method = %method,
        url = %without_query(url)
    );
    debug!(parent: &span, "dispatching request");

    request
        .send()
        .instrument(span)
        .await
        .map_err(map_request_error)
}

/// Query strings can carry verification tokens; keep them out of logs.
fn without_query(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

/// Maps transport errors into `AppError` variants with timeout detection.
///
/// The URL is stripped from the error so tokens in query strings never reach
/// messages or logs.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!(
            "Unable to reach the server: {}",
            err.without_url()
        ))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Parses optional JSON responses; empty or non-JSON success bodies are `None`.
async fn handle_optional_json_response<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, AppError> {
    if !response.status().is_success() {
        return Err(http_error(response).await);
    }

    let body = response.text().await.map_err(map_request_error)?;
    if body.trim().is_empty() {
        return Ok(None);
    }

    match serde_json::from_str::<T>(&body) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            debug!("ignoring undecodable success body: {err}");
            Ok(None)
        }
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    AppError::Http {
        status,
        server_message: server_message(&body),
        message: sanitize_body(&body),
    }
}

/// Extracts the `message` field of a JSON error body.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(|message| message.chars().take(MAX_ERROR_CHARS).collect())
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
