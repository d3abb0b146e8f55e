use crate::error::{ServerError, ServerResult};
use crate::state::ConsumerState;
use axum::extract::{Path, State};
use axum::Json;
use matcher::{Lookup, Suggestions};
use std::sync::Arc;

/// Scored suggestions for the address with the given id.
///
/// - 400 if the id is not a number
/// - 404 if the provider does not know the address
/// - 500 if the provider cannot be reached or errors
pub async fn get_suggestions(
    State(state): State<Arc<ConsumerState>>,
    Path(address_id): Path<String>,
) -> ServerResult<Json<Suggestions>> {
    let id: u64 = address_id
        .trim()
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid address id '{address_id}'")))?;

    let target = match state.matcher.lookup(id).await {
        Lookup::Found(record) => record,
        Lookup::NotFound => return Err(ServerError::NotFound),
        Lookup::Failed(err) => return Err(ServerError::Upstream(err)),
    };

    let suggestions = state.matcher.suggestions(&target).await?;
    Ok(Json(suggestions))
}

/// `/suggestions` without an id
pub async fn missing_address_id() -> ServerError {
    ServerError::BadRequest("address id is required".to_string())
}
