//! Pure data-to-view-model mapping. These functions decide what a view shows
//! (fallback texts, empty states, status colors, links) without knowing how it
//! is rendered, so every front end renders the same thing.

pub mod cases;
pub mod dashboard;
pub mod suspects;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A list that knows what to say when it has nothing in it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Section<T> {
    pub items: Vec<T>,
    /// Set only when `items` is empty.
    pub empty_message: Option<String>,
}

impl<T> Section<T> {
    pub(crate) fn new(items: Vec<T>, empty_message: &str) -> Self {
        let empty_message = items.is_empty().then(|| empty_message.to_string());
        Self {
            items,
            empty_message,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Uses `fallback` for missing or blank text.
pub(crate) fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

pub(crate) fn format_date(date: Option<&DateTime<Utc>>) -> String {
    date.map_or_else(
        || "Unknown date".to_string(),
        |date| date.format("%Y-%m-%d").to_string(),
    )
}
