//! Suspect workflows behind the suspects list, suspect detail and
//! add-suspect views.

use crate::{
    api::ApiClient,
    features::suspects::{
        client,
        types::{NewSuspect, Suspect},
    },
    flow::{present, Confirm, FlowError, Outcome},
    routes::Route,
};
use tracing::info;

/// Lists suspects. An empty list is a valid result, not an error.
///
/// # Errors
/// Server or transport failures, or a redirect when signed out.
pub async fn list_suspects(api: &ApiClient) -> Result<Vec<Suspect>, FlowError> {
    client::list_suspects(api)
        .await
        .map_err(|err| FlowError::report("suspects.list", "Failed to load suspects.", err))
}

/// Loads the suspect named by `id`.
///
/// # Errors
/// A redirect to the suspects list when `id` is missing (nothing is sent).
pub async fn load_suspect(api: &ApiClient, id: Option<&str>) -> Result<Suspect, FlowError> {
    let Some(id) = present(id) else {
        return Err(FlowError::redirect(Route::Suspects, "No suspect ID provided."));
    };

    client::get_suspect(api, &id).await.map_err(|err| {
        FlowError::report("suspects.get", "Failed to load suspect details.", err)
    })
}

/// Registers a suspect and returns to the suspects list.
///
/// # Errors
/// [`FlowError::Validation`] without a name.
pub async fn add_suspect(
    api: &ApiClient,
    name: &str,
    description: Option<&str>,
    alibi: Option<&str>,
    last_known_location: Option<&str>,
) -> Result<Outcome, FlowError> {
    let Some(name) = present(Some(name)) else {
        return Err(FlowError::validation("Please enter a suspect name."));
    };

    let request = NewSuspect {
        name,
        description: present(description),
        alibi: present(alibi),
        last_known_location: present(last_known_location),
    };
    let created = client::create_suspect(api, &request)
        .await
        .map_err(|err| FlowError::report("suspects.create", "Failed to register suspect.", err))?;

    if let Some(suspect) = created {
        info!(suspect_id = %suspect.id, "suspect registered");
    }

    Ok(Outcome::navigate(
        Route::Suspects,
        "Suspect registered successfully!",
    ))
}

/// Deletes a suspect after the confirmation gate approves it.
///
/// # Errors
/// [`FlowError::Validation`] without an id.
pub async fn delete_suspect(
    api: &ApiClient,
    suspect_id: &str,
    confirm: &impl Confirm,
) -> Result<Outcome, FlowError> {
    let suspect_id = suspect_id.trim();
    if suspect_id.is_empty() {
        return Err(FlowError::validation("No suspect selected."));
    }

    if !confirm
        .confirm("Are you sure you want to delete this suspect? This action cannot be undone.")
    {
        return Ok(Outcome::Declined);
    }

    client::delete_suspect(api, suspect_id)
        .await
        .map_err(|err| FlowError::report("suspects.delete", "Failed to delete suspect.", err))?;

    info!(suspect_id, "suspect deleted");

    Ok(Outcome::navigate(
        Route::Suspects,
        "Suspect deleted successfully.",
    ))
}
