use crate::error::ServerResult;
use crate::state::{ConsumerState, ProviderState};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Provider liveness, with the current record count
pub async fn provider_health(
    State(state): State<Arc<ProviderState>>,
) -> ServerResult<impl IntoResponse> {
    let records = state.read()?.len();

    Ok(Json(json!({
        "status": "healthy",
        "service": "cep-provider",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "records": records,
    })))
}

/// Consumer liveness. Does not probe the provider.
pub async fn consumer_health(State(state): State<Arc<ConsumerState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "cep-consumer",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "provider_url": state.config.provider_url,
    }))
}
