use axum::extract::State;
use blockdb_core::domain::block::{Block, BlockRepository, ResultPage};

use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::query_params::PageQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/search",
    tag = "block",
    summary = "Search blocks",
    description = "Searches blocks with exact filters on identifier columns and inclusive `field[from]` / `field[to]` ranges on numeric columns. `count` is the total number of matches.",
    params(PageQuery),
    responses(
        (status = 200, body = ResultPage<Block>),
        (status = 400, description = "Unknown filter field, malformed range or invalid pagination")
    ),
)]
pub async fn search_blocks(
    State(state): State<AppState>,
    QueryParamsExtractor(params): QueryParamsExtractor,
) -> Result<Response<ResultPage<Block>>, ApiError> {
    let page = state
        .service
        .block_repository
        .search(params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
