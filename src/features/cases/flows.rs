//! Case workflows: the operations behind the cases list, case detail and
//! add-case views. The case id is always an explicit argument.

use crate::{
    api::ApiClient,
    features::cases::{
        client,
        types::{Case, CaseStatus, NewCase, NewEvidence, NewWitnessStatement},
    },
    flow::{present, Confirm, FlowError, Outcome},
    routes::Route,
};
use tracing::info;

/// Lists cases. An empty list is a valid result, not an error.
///
/// # Errors
/// Server or transport failures, or a redirect when signed out.
pub async fn list_cases(api: &ApiClient) -> Result<Vec<Case>, FlowError> {
    client::list_cases(api)
        .await
        .map_err(|err| FlowError::report("cases.list", "Failed to load cases.", err))
}

/// Loads the case named by `id`, usually the `id` query parameter of the
/// detail page.
///
/// # Errors
/// A redirect to the cases list when `id` is missing (nothing is sent).
pub async fn load_case(api: &ApiClient, id: Option<&str>) -> Result<Case, FlowError> {
    let Some(id) = present(id) else {
        return Err(FlowError::redirect(Route::Cases, "No case ID provided."));
    };

    client::get_case(api, &id)
        .await
        .map_err(|err| FlowError::report("cases.get", "Failed to load case details.", err))
}

/// Opens a new case and returns to the cases list.
///
/// # Errors
/// [`FlowError::Validation`] without a title.
pub async fn add_case(
    api: &ApiClient,
    title: &str,
    description: Option<&str>,
    status: Option<CaseStatus>,
) -> Result<Outcome, FlowError> {
    let Some(title) = present(Some(title)) else {
        return Err(FlowError::validation("Please enter a case title."));
    };

    let request = NewCase {
        title,
        description: present(description),
        status: status.filter(|status| *status != CaseStatus::Unknown),
    };
    let created = client::create_case(api, &request)
        .await
        .map_err(|err| FlowError::report("cases.create", "Failed to create case.", err))?;

    if let Some(case) = created {
        info!(case_id = %case.id, "case opened");
    }

    Ok(Outcome::navigate(Route::Cases, "Case created successfully!"))
}

/// Changes the status of a loaded case and reloads its detail view.
///
/// # Errors
/// [`FlowError::Validation`] when the id or status is missing.
pub async fn update_case_status(
    api: &ApiClient,
    case_id: &str,
    status: Option<CaseStatus>,
) -> Result<Outcome, FlowError> {
    let case_id = case_id.trim();
    let status = status.filter(|status| *status != CaseStatus::Unknown);
    let Some(status) = status.filter(|_| !case_id.is_empty()) else {
        return Err(FlowError::validation("Invalid status update."));
    };

    client::update_case_status(api, case_id, status)
        .await
        .map_err(|err| {
            FlowError::report("cases.update_status", "Failed to update case status.", err)
        })?;

    info!(case_id, %status, "case status updated");

    Ok(Outcome::navigate(case_route(case_id), "Case status updated!"))
}

/// Deletes a case after the confirmation gate approves it.
///
/// # Errors
/// [`FlowError::Validation`] without an id.
pub async fn delete_case(
    api: &ApiClient,
    case_id: &str,
    confirm: &impl Confirm,
) -> Result<Outcome, FlowError> {
    let case_id = case_id.trim();
    if case_id.is_empty() {
        return Err(FlowError::validation("No case selected."));
    }

    if !confirm.confirm("Are you sure you want to delete this case? This action cannot be undone.") {
        return Ok(Outcome::Declined);
    }

    client::delete_case(api, case_id)
        .await
        .map_err(|err| FlowError::report("cases.delete", "Failed to delete case.", err))?;

    info!(case_id, "case deleted");

    Ok(Outcome::navigate(Route::Cases, "Case deleted successfully."))
}

/// Records a piece of evidence on a case.
///
/// # Errors
/// [`FlowError::Validation`] when the id or description is missing.
pub async fn add_evidence(
    api: &ApiClient,
    case_id: &str,
    description: &str,
) -> Result<Outcome, FlowError> {
    let case_id = case_id.trim();
    let Some(description) = present(Some(description)).filter(|_| !case_id.is_empty()) else {
        return Err(FlowError::validation("Please enter evidence description."));
    };

    client::add_evidence(api, case_id, &NewEvidence { description })
        .await
        .map_err(|err| FlowError::report("cases.add_evidence", "Failed to add evidence.", err))?;

    Ok(Outcome::navigate(case_route(case_id), "Evidence added!"))
}

/// Removes one piece of evidence after confirmation.
///
/// # Errors
/// [`FlowError::Validation`] when either id is missing.
pub async fn delete_evidence(
    api: &ApiClient,
    case_id: &str,
    evidence_id: &str,
    confirm: &impl Confirm,
) -> Result<Outcome, FlowError> {
    let (case_id, evidence_id) = (case_id.trim(), evidence_id.trim());
    if case_id.is_empty() || evidence_id.is_empty() {
        return Err(FlowError::validation("No evidence selected."));
    }

    if !confirm.confirm("Delete this evidence?") {
        return Ok(Outcome::Declined);
    }

    client::delete_evidence(api, case_id, evidence_id)
        .await
        .map_err(|err| {
            FlowError::report("cases.delete_evidence", "Failed to delete evidence.", err)
        })?;

    Ok(Outcome::navigate_silently(case_route(case_id)))
}

/// Records a witness statement on a case.
///
/// # Errors
/// [`FlowError::Validation`] when the id, name or statement is missing.
pub async fn add_witness(
    api: &ApiClient,
    case_id: &str,
    name: &str,
    statement: &str,
) -> Result<Outcome, FlowError> {
    let case_id = case_id.trim();
    let (Some(name), Some(statement)) = (present(Some(name)), present(Some(statement))) else {
        return Err(FlowError::validation("Please fill in all witness fields."));
    };
    if case_id.is_empty() {
        return Err(FlowError::validation("Please fill in all witness fields."));
    }

    client::add_witness(api, case_id, &NewWitnessStatement { name, statement })
        .await
        .map_err(|err| {
            FlowError::report("cases.add_witness", "Failed to add witness statement.", err)
        })?;

    Ok(Outcome::navigate(
        case_route(case_id),
        "Witness statement added!",
    ))
}

/// Removes one witness statement after confirmation.
///
/// # Errors
/// [`FlowError::Validation`] when either id is missing.
pub async fn delete_witness(
    api: &ApiClient,
    case_id: &str,
    witness_id: &str,
    confirm: &impl Confirm,
) -> Result<Outcome, FlowError> {
    let (case_id, witness_id) = (case_id.trim(), witness_id.trim());
    if case_id.is_empty() || witness_id.is_empty() {
        return Err(FlowError::validation("No witness statement selected."));
    }

    if !confirm.confirm("Delete this witness statement?") {
        return Ok(Outcome::Declined);
    }

    client::delete_witness(api, case_id, witness_id)
        .await
        .map_err(|err| {
            FlowError::report(
                "cases.delete_witness",
                "Failed to delete witness statement.",
                err,
            )
        })?;

    Ok(Outcome::navigate_silently(case_route(case_id)))
}

fn case_route(case_id: &str) -> Route {
    Route::Case {
        id: case_id.to_string(),
    }
}
