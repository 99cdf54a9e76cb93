use super::handlers::get_autoconfigure::{__path_get_autoconfigure, get_autoconfigure};
use super::handlers::get_status::{__path_get_status, get_status};
use super::handlers::get_sync_status::{__path_get_sync_status, get_sync_status};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_status, get_sync_status, get_autoconfigure))]
pub struct LoaderApiDoc;

pub fn loader_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/loader/status", state.args.server.root_path),
            get(get_status),
        )
        .route(
            &format!("{}/loader/status/sync", state.args.server.root_path),
            get(get_sync_status),
        )
        .route(
            &format!("{}/loader/autoconfigure", state.args.server.root_path),
            get(get_autoconfigure),
        )
}
