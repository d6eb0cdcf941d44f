//! Client helpers for suspect endpoints. These functions keep endpoint paths
//! centralized and assume the backend enforces authorization.

use crate::{
    api::{ApiClient, AppError, Method},
    features::{
        cases::client::required_id,
        suspects::types::{NewSuspect, Suspect},
    },
};

pub async fn list_suspects(api: &ApiClient) -> Result<Vec<Suspect>, AppError> {
    api.authenticated_get("/suspects").await
}

pub async fn get_suspect(api: &ApiClient, id: &str) -> Result<Suspect, AppError> {
    let id = required_id(id, "Suspect id")?;
    api.authenticated_get(&format!("/suspects/{id}")).await
}

/// Registers a suspect. Not idempotent: repeating the call creates another.
pub async fn create_suspect(
    api: &ApiClient,
    request: &NewSuspect,
) -> Result<Option<Suspect>, AppError> {
    api.authenticated_send("/suspects", Method::POST, Some(request))
        .await
}

pub async fn delete_suspect(api: &ApiClient, id: &str) -> Result<(), AppError> {
    let id = required_id(id, "Suspect id")?;
    api.authenticated_delete(&format!("/suspects/{id}")).await
}
