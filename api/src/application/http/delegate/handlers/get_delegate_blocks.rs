use axum::extract::{Path, State};
use blockdb_core::domain::block::{Block, BlockRepository, ResultPage};

use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::query_params::PageQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/{public_key}/blocks",
    tag = "delegate",
    summary = "List blocks forged by a delegate",
    params(
        ("public_key" = String, Path, description = "Generator public key"),
        PageQuery
    ),
    responses(
        (status = 200, body = ResultPage<Block>),
        (status = 400, description = "Unknown filter field or invalid pagination")
    ),
)]
pub async fn get_delegate_blocks(
    Path(public_key): Path<String>,
    State(state): State<AppState>,
    QueryParamsExtractor(params): QueryParamsExtractor,
) -> Result<Response<ResultPage<Block>>, ApiError> {
    let page = state
        .service
        .block_repository
        .find_all_by_generator(&public_key, params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
