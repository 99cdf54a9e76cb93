use axum::extract::{Path, State};
use blockdb_core::domain::block::{Block, BlockRepository};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "block",
    summary = "Get block",
    params(
        ("id" = String, Path, description = "Block ID"),
    ),
    responses(
        (status = 200, body = Block),
        (status = 404, description = "Block not found")
    ),
)]
pub async fn get_block(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Block>, ApiError> {
    let block = state
        .service
        .block_repository
        .find_by_id(&id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Block '{}' not found", id)))?;

    Ok(Response::OK(block))
}
