use crate::error::{ServerError, ServerResult};
use crate::state::ProviderState;
use address::AddressRecord;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

/// List every stored address
pub async fn list_addresses(
    State(state): State<Arc<ProviderState>>,
) -> ServerResult<Json<Vec<AddressRecord>>> {
    let repo = state.read()?;
    Ok(Json(repo.fetch_all().to_vec()))
}

/// List addresses with a postal code
pub async fn list_available(
    State(state): State<Arc<ProviderState>>,
) -> ServerResult<Json<Vec<AddressRecord>>> {
    let repo = state.read()?;
    Ok(Json(repo.available()))
}

/// Fetch one address by id.
///
/// An id that is not a number cannot exist, so it is a 404 like any other miss.
pub async fn get_address(
    State(state): State<Arc<ProviderState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<AddressRecord>> {
    let id: u64 = id.parse().map_err(|_| ServerError::NotFound)?;
    let record = state.read()?.get_by_id(id).cloned();
    record.map(Json).ok_or(ServerError::NotFound)
}

/// Store a new address.
///
/// The body must carry a non-empty `cep`, the same rule that makes a record
/// available. Any `id` in the body is ignored; the record gets the current
/// record count. Answers 200 with no body.
pub async fn create_address(
    State(state): State<Arc<ProviderState>>,
    payload: Result<Json<AddressRecord>, JsonRejection>,
) -> ServerResult<StatusCode> {
    let Json(mut record) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    if !record.is_available() {
        return Err(ServerError::BadRequest("cep is required".to_string()));
    }

    let mut repo = state.write()?;
    record.id = repo.next_id();
    tracing::info!(id = record.id, cep = %record.cep, "address created");
    repo.insert(record);

    Ok(StatusCode::OK)
}
