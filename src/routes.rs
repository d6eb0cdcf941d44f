//! Client views and their page paths.
//!
//! Workflows never navigate themselves; they return the [`Route`] the
//! presentation layer should show next. Page paths keep the names the web
//! client used so links and the page guard stay compatible.

use serde::Serialize;
use std::fmt;
use url::form_urlencoded;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    Landing,
    Register,
    Verify,
    Dashboard,
    Cases,
    Case { id: String },
    AddCase,
    Suspects,
    Suspect { id: String },
    AddSuspect,
}

impl Route {
    /// Page name without query string.
    #[must_use]
    pub fn page(&self) -> &'static str {
        match self {
            Self::Landing => "index.html",
            Self::Register => "register.html",
            Self::Verify => "verify.html",
            Self::Dashboard => "dashboard.html",
            Self::Cases => "cases.html",
            Self::Case { .. } => "case.html",
            Self::AddCase => "add-case.html",
            Self::Suspects => "suspects.html",
            Self::Suspect { .. } => "suspect.html",
            Self::AddSuspect => "add-suspect.html",
        }
    }

    /// Page path including the `id` query parameter for detail views.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Case { id } | Self::Suspect { id } => {
                let query: String = form_urlencoded::Serializer::new(String::new())
                    .append_pair("id", id)
                    .finish();
                format!("{}?{query}", self.page())
            }
            _ => self.page().to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.path())
    }
}

/// Reads a non-blank query parameter from a location such as
/// `verify.html?token=abc` or a full URL.
#[must_use]
pub fn query_param(location: &str, key: &str) -> Option<String> {
    let (_, query) = split_location(location);
    form_urlencoded::parse(query?.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Splits a location into its path and query, dropping any fragment.
pub(crate) fn split_location(location: &str) -> (&str, Option<&str>) {
    let location = location.trim();
    let location = location.split('#').next().unwrap_or(location);
    match location.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (location, None),
    }
}
