//! Login, registration, verification and logout workflows. Each flow checks
//! its required input before any request and reports the next route.

use crate::{
    api::{ApiClient, AppError},
    features::auth::{
        client,
        types::{LoginRequest, RegisterRequest},
    },
    flow::{FlowError, Outcome},
    routes::{query_param, Route},
};
use tracing::{error, info};

const LOGIN_FAILED: &str = "Login failed. Check your credentials.";

/// Signs in and stores the returned bearer token.
///
/// The token store is only written when the server returned a token; every
/// failure leaves it untouched.
///
/// # Errors
/// [`FlowError::Validation`] when a field is blank (nothing is sent),
/// otherwise the server's message or a generic fallback.
pub async fn login(api: &ApiClient, username: &str, password: &str) -> Result<Outcome, FlowError> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(FlowError::validation(
            "Please enter both username and password.",
        ));
    }

    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response = client::login(api, &request)
        .await
        .map_err(|err| FlowError::report("auth.login", LOGIN_FAILED, err))?;

    let Some(token) = response.token.filter(|token| !token.trim().is_empty()) else {
        let message = response
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| LOGIN_FAILED.to_string());
        error!(operation = "auth.login", "login response carried no token");
        return Err(FlowError::Failed {
            message,
            source: AppError::Parse("login response carried no token".to_string()),
        });
    };

    api.tokens()
        .save(&token)
        .map_err(|err| FlowError::report("auth.login", "Unable to store credentials.", err.into()))?;

    info!(username, "signed in");

    Ok(Outcome::navigate_silently(Route::Dashboard))
}

/// Registers an account and moves to the pending-verification view.
///
/// # Errors
/// [`FlowError::Validation`] when a field is blank, otherwise the server's
/// message or a generic fallback.
pub async fn register(
    api: &ApiClient,
    email: &str,
    username: &str,
    password: &str,
) -> Result<Outcome, FlowError> {
    let email = email.trim();
    let username = username.trim();
    if email.is_empty() || username.is_empty() || password.trim().is_empty() {
        return Err(FlowError::validation("Please fill in all fields."));
    }

    let request = RegisterRequest {
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
    };
    client::register(api, &request)
        .await
        .map_err(|err| FlowError::report("auth.register", "Registration failed.", err))?;

    info!(username, "registered, pending verification");

    Ok(Outcome::navigate(
        Route::Verify,
        "Registration successful! Please check your email to verify your account.",
    ))
}

/// Verifies an email address with the `token` parameter of `location`.
///
/// `location` is the verification link (or just its query string).
///
/// # Errors
/// [`FlowError::Validation`] when the link has no token, otherwise the
/// server's message or a generic fallback.
pub async fn verify_email(api: &ApiClient, location: &str) -> Result<Outcome, FlowError> {
    let location = if location.contains('?') {
        location.to_string()
    } else {
        format!("?{}", location.trim_start_matches('?'))
    };

    let Some(token) = query_param(&location, "token") else {
        return Err(FlowError::validation("No verification token found."));
    };

    client::verify_email(api, &token)
        .await
        .map_err(|err| FlowError::report("auth.verify_email", "Verification failed.", err))?;

    Ok(Outcome::navigate(
        Route::Landing,
        "Email verified successfully! You can now log in.",
    ))
}

/// Forgets the stored credential and returns to the landing view.
///
/// # Errors
/// Fails only when the token store cannot be written.
pub fn logout(api: &ApiClient) -> Result<Outcome, FlowError> {
    api.tokens()
        .clear()
        .map_err(|err| FlowError::report("auth.logout", "Unable to sign out.", err.into()))?;

    info!("signed out");

    Ok(Outcome::navigate_silently(Route::Landing))
}
