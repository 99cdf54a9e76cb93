use axum::extract::State;
use blockdb_core::domain::loader::{LoaderService, LoaderStatus};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/status",
    tag = "loader",
    summary = "Loader status",
    description = "Whether the stored chain has caught up with the current forging slot.",
    responses(
        (status = 200, body = LoaderStatus)
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> Result<Response<LoaderStatus>, ApiError> {
    let status = state.service.loader.status().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
