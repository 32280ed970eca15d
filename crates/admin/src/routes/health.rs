//! Health check handlers.

use axum::extract::State;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::store_api::EntityApi;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the REST service reports itself healthy.
#[instrument(skip(state))]
pub async fn readiness(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.api().health().await?;
    Ok("ok")
}
