use super::{or_fallback, Section};
use crate::{features::suspects::types::Suspect, routes::Route};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SuspectRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub alibi: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SuspectDetailView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub alibi: String,
    pub last_known_location: String,
}

#[must_use]
pub fn list_view(suspects: &[Suspect]) -> Section<SuspectRow> {
    let rows = suspects
        .iter()
        .map(|suspect| SuspectRow {
            id: suspect.id.clone(),
            name: suspect.name.clone(),
            description: or_fallback(suspect.description.as_deref(), "No description"),
            alibi: or_fallback(suspect.alibi.as_deref(), "No alibi recorded"),
            link: Route::Suspect {
                id: suspect.id.clone(),
            }
            .path(),
        })
        .collect();

    Section::new(rows, "No suspects registered. Add a new suspect to begin.")
}

#[must_use]
pub fn detail_view(suspect: &Suspect) -> SuspectDetailView {
    SuspectDetailView {
        id: suspect.id.clone(),
        name: suspect.name.clone(),
        description: or_fallback(suspect.description.as_deref(), "No description"),
        alibi: or_fallback(suspect.alibi.as_deref(), "No alibi recorded"),
        last_known_location: or_fallback(suspect.last_known_location.as_deref(), "Unknown"),
    }
}
