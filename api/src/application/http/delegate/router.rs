use super::handlers::get_delegate_blocks::{__path_get_delegate_blocks, get_delegate_blocks};
use super::handlers::get_last_block::{__path_get_last_block, get_last_block};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_delegate_blocks, get_last_block))]
pub struct DelegateApiDoc;

pub fn delegate_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/delegates/{{public_key}}/blocks",
                state.args.server.root_path
            ),
            get(get_delegate_blocks),
        )
        .route(
            &format!(
                "{}/delegates/{{public_key}}/last-block",
                state.args.server.root_path
            ),
            get(get_last_block),
        )
}
