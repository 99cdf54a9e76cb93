use axum::extract::{Path, State};
use blockdb_core::domain::block::{BlockRepository, LastForgedBlock};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/{public_key}/last-block",
    tag = "delegate",
    summary = "Get a delegate's last forged block",
    description = "Returns the id and timestamp of the block most recently stored for the generator.",
    params(
        ("public_key" = String, Path, description = "Generator public key"),
    ),
    responses(
        (status = 200, body = LastForgedBlock),
        (status = 404, description = "The delegate has not forged any stored block")
    ),
)]
pub async fn get_last_block(
    Path(public_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<LastForgedBlock>, ApiError> {
    let last = state
        .service
        .block_repository
        .find_last_by_public_key(&public_key)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            ApiError::NotFound(format!("No block forged by '{}'", public_key))
        })?;

    Ok(Response::OK(last))
}
