//! Workflow results shared by every feature.
//!
//! A workflow either asks the presentation layer to move to another route
//! (optionally with a notice), reports that the user declined a confirmation,
//! or fails with a [`FlowError`] whose `Display` is the user-facing message.

use crate::{api::AppError, routes::Route};
use thiserror::Error;
use tracing::error;

/// Message shown for any transport failure.
pub const UNREACHABLE_MESSAGE: &str = "Unable to connect to server.";
/// Message shown when an authenticated call finds no stored credential.
pub const SIGNED_OUT_MESSAGE: &str = "Please log in to continue.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Navigate { to: Route, notice: Option<String> },
    /// The confirmation gate said no; nothing was sent.
    Declined,
}

impl Outcome {
    pub(crate) fn navigate(to: Route, notice: &str) -> Self {
        Self::Navigate {
            to,
            notice: Some(notice.to_string()),
        }
    }

    pub(crate) fn navigate_silently(to: Route) -> Self {
        Self::Navigate { to, notice: None }
    }

    /// Route to show next, if any.
    #[must_use]
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Navigate { to, .. } => Some(to),
            Self::Declined => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum FlowError {
    /// A required field was missing; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// A precondition sends the user elsewhere instead of issuing the call.
    #[error("{message}")]
    Redirect { to: Route, message: String },
    #[error("Unable to connect to server.")]
    Unreachable(#[source] AppError),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        source: AppError,
    },
}

impl FlowError {
    pub(crate) fn validation(message: &str) -> Self {
        Self::Validation(message.to_string())
    }

    pub(crate) fn redirect(to: Route, message: &str) -> Self {
        Self::Redirect {
            to,
            message: message.to_string(),
        }
    }

    /// Logs `err` for diagnostics and converts it into the user-facing error.
    ///
    /// The server's own message wins over `fallback` when the body carried one.
    pub(crate) fn report(operation: &str, fallback: &str, err: AppError) -> Self {
        error!(operation, status = err.status(), "{err}");

        match err {
            AppError::Unauthenticated => Self::redirect(Route::Landing, SIGNED_OUT_MESSAGE),
            err if err.is_unreachable() => Self::Unreachable(err),
            AppError::Http {
                status,
                server_message,
                ..
            } => Self::Rejected {
                status,
                message: server_message.unwrap_or_else(|| fallback.to_string()),
            },
            source => Self::Failed {
                message: fallback.to_string(),
                source,
            },
        }
    }

    /// Route the user should be sent to, for redirecting failures.
    #[must_use]
    pub fn redirect_to(&self) -> Option<&Route> {
        match self {
            Self::Redirect { to, .. } => Some(to),
            _ => None,
        }
    }

    /// HTTP status of a server rejection.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Synchronous yes/no gate in front of irreversible operations.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Trims an optional text field; blank input counts as absent.
pub(crate) fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
