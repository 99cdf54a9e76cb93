use axum::extract::State;
use blockdb_core::domain::block::BlockRepository;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CountBlocksResponse {
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "/count",
    tag = "block",
    summary = "Count blocks",
    responses(
        (status = 200, body = CountBlocksResponse)
    ),
)]
pub async fn count_blocks(
    State(state): State<AppState>,
) -> Result<Response<CountBlocksResponse>, ApiError> {
    let count = state
        .service
        .block_repository
        .count()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CountBlocksResponse { count }))
}
