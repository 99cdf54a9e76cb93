use std::collections::HashMap;

use axum::{extract::FromRequestParts, http::request::Parts};
use blockdb_core::domain::query::QueryParams;

use super::query_params::from_query_map;
use crate::application::http::server::api_entities::api_error::ApiError;

/// Extractor for block query strings: filters, ranges, ordering and pagination.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     QueryParamsExtractor(params): QueryParamsExtractor,
/// ) -> Result<Response<ResultPage<Block>>, ApiError> {
///     // hand `params` to the block repository
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryParams);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("Malformed query string: {}", e)))?;

        let query_params =
            from_query_map(&query_map).map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(QueryParamsExtractor(query_params))
    }
}
