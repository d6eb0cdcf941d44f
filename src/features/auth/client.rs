//! Client wrappers for the auth endpoints. These are the only calls made
//! without a bearer credential.

use crate::{
    api::{ApiClient, AppError},
    features::auth::types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest},
};
use url::form_urlencoded;

/// Exchanges username and password for a bearer token.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, AppError> {
    let response: Option<LoginResponse> = api.public_post("/auth/login", request).await?;
    Ok(response.unwrap_or_default())
}

/// Registers an account; it stays inactive until the email is verified.
pub async fn register(
    api: &ApiClient,
    request: &RegisterRequest,
) -> Result<MessageResponse, AppError> {
    let response: Option<MessageResponse> = api.public_post("/auth/register", request).await?;
    Ok(response.unwrap_or_default())
}

/// Activates an account with the token from the verification link.
pub async fn verify_email(api: &ApiClient, token: &str) -> Result<MessageResponse, AppError> {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("token", token)
        .finish();
    let response: Option<MessageResponse> =
        api.public_get(&format!("/auth/verify-email?{query}")).await?;
    Ok(response.unwrap_or_default())
}
