use axum::extract::State;
use blockdb_core::domain::block::{Block, BlockRepository, ResultPage};

use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::query_params::PageQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "",
    tag = "block",
    summary = "List blocks",
    description = "Lists blocks matching exact filters on any block column. `count` is the number of rows returned, not the number of matches.",
    params(PageQuery),
    responses(
        (status = 200, body = ResultPage<Block>),
        (status = 400, description = "Unknown filter field or invalid pagination")
    ),
)]
pub async fn get_blocks(
    State(state): State<AppState>,
    QueryParamsExtractor(params): QueryParamsExtractor,
) -> Result<Response<ResultPage<Block>>, ApiError> {
    let page = state
        .service
        .block_repository
        .find_all(params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
