use super::handlers::count_blocks::{__path_count_blocks, count_blocks};
use super::handlers::get_block::{__path_get_block, get_block};
use super::handlers::get_blocks::{__path_get_blocks, get_blocks};
use super::handlers::search_blocks::{__path_search_blocks, search_blocks};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_blocks, search_blocks, count_blocks, get_block))]
pub struct BlockApiDoc;

pub fn block_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/blocks", state.args.server.root_path),
            get(get_blocks),
        )
        .route(
            &format!("{}/blocks/search", state.args.server.root_path),
            get(search_blocks),
        )
        .route(
            &format!("{}/blocks/count", state.args.server.root_path),
            get(count_blocks),
        )
        .route(
            &format!("{}/blocks/{{id}}", state.args.server.root_path),
            get(get_block),
        )
}
