use axum::extract::State;
use blockdb_core::domain::loader::{LoaderService, SyncStatus};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/status/sync",
    tag = "loader",
    summary = "Sync status",
    responses(
        (status = 200, body = SyncStatus)
    ),
)]
pub async fn get_sync_status(
    State(state): State<AppState>,
) -> Result<Response<SyncStatus>, ApiError> {
    let status = state
        .service
        .loader
        .sync_status()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
