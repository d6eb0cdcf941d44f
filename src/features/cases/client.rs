//! Client helpers for case endpoints, including the nested evidence and
//! witness routes. All of them need a stored credential; authorization is the
//! backend's job.

use crate::{
    api::{ApiClient, AppError, Method},
    features::cases::types::{
        Case, CaseStatus, CaseStatusUpdate, NewCase, NewEvidence, NewWitnessStatement,
    },
};
use serde_json::Value;

/// Fetches every case visible to the signed-in user.
pub async fn list_cases(api: &ApiClient) -> Result<Vec<Case>, AppError> {
    api.authenticated_get("/cases").await
}

/// Fetches one case with its suspects, evidence and witness statements.
pub async fn get_case(api: &ApiClient, id: &str) -> Result<Case, AppError> {
    let id = required_id(id, "Case id")?;
    api.authenticated_get(&format!("/cases/{id}")).await
}

/// Opens a case. Returns the created record when the server echoes it.
pub async fn create_case(api: &ApiClient, request: &NewCase) -> Result<Option<Case>, AppError> {
    api.authenticated_send("/cases", Method::POST, Some(request))
        .await
}

/// Changes only the status of a case.
pub async fn update_case_status(
    api: &ApiClient,
    id: &str,
    status: CaseStatus,
) -> Result<Option<Case>, AppError> {
    let id = required_id(id, "Case id")?;
    let body = CaseStatusUpdate { status };
    api.authenticated_send(&format!("/cases/{id}"), Method::PUT, Some(&body))
        .await
}

/// Deletes a case; the server removes its evidence and statements with it.
pub async fn delete_case(api: &ApiClient, id: &str) -> Result<(), AppError> {
    let id = required_id(id, "Case id")?;
    api.authenticated_delete(&format!("/cases/{id}")).await
}

pub async fn add_evidence(
    api: &ApiClient,
    case_id: &str,
    request: &NewEvidence,
) -> Result<(), AppError> {
    let case_id = required_id(case_id, "Case id")?;
    api.authenticated_send::<_, Value>(
        &format!("/cases/{case_id}/evidence"),
        Method::POST,
        Some(request),
    )
    .await
    .map(|_| ())
}

pub async fn delete_evidence(
    api: &ApiClient,
    case_id: &str,
    evidence_id: &str,
) -> Result<(), AppError> {
    let case_id = required_id(case_id, "Case id")?;
    let evidence_id = required_id(evidence_id, "Evidence id")?;
    api.authenticated_delete(&format!("/cases/{case_id}/evidence/{evidence_id}"))
        .await
}

pub async fn add_witness(
    api: &ApiClient,
    case_id: &str,
    request: &NewWitnessStatement,
) -> Result<(), AppError> {
    let case_id = required_id(case_id, "Case id")?;
    api.authenticated_send::<_, Value>(
        &format!("/cases/{case_id}/witness"),
        Method::POST,
        Some(request),
    )
    .await
    .map(|_| ())
}

pub async fn delete_witness(
    api: &ApiClient,
    case_id: &str,
    witness_id: &str,
) -> Result<(), AppError> {
    let case_id = required_id(case_id, "Case id")?;
    let witness_id = required_id(witness_id, "Witness id")?;
    api.authenticated_delete(&format!("/cases/{case_id}/witness/{witness_id}"))
        .await
}

/// Trims an id and rejects blank values before they reach a URL.
pub(crate) fn required_id<'a>(id: &'a str, label: &str) -> Result<&'a str, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config(format!("{label} is required.")));
    }
    if trimmed.contains(['/', '?', '#']) {
        return Err(AppError::Config(format!("{label} is malformed.")));
    }
    Ok(trimmed)
}
