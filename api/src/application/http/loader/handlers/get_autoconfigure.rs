use axum::extract::State;
use blockdb_core::domain::loader::{Autoconfigure, LoaderService};

use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/autoconfigure",
    tag = "loader",
    summary = "Network parameters",
    responses(
        (status = 200, body = Autoconfigure)
    ),
)]
pub async fn get_autoconfigure(State(state): State<AppState>) -> Response<Autoconfigure> {
    Response::OK(state.service.loader.autoconfigure())
}
