use std::collections::HashMap;
use std::str::FromStr;

use blockdb_core::domain::query::{FilterValue, QueryParams, ScalarValue};
use thiserror::Error;
use utoipa::IntoParams;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error)]
pub enum QueryParamsError {
    #[error("`{field}` must be a non-negative integer, got `{value}`")]
    InvalidNumber { field: String, value: String },

    #[error("`{field}[{bound}]` is not a range bound, expected `from` or `to`")]
    UnknownBound { field: String, bound: String },

    #[error("`{0}` is given both as a value and as a range")]
    Conflicting(String),

    #[error("invalid pagination: {0}")]
    Pagination(#[from] ValidationErrors),
}

/// Range bound in `field[from]=v` / `field[to]=v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    From,
    To,
}

impl FromStr for RangeBound {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "from" => Ok(RangeBound::From),
            "to" => Ok(RangeBound::To),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Reserved query fields, for the OpenAPI document. Filters and ranges are parsed by
/// [`from_query_map`].
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PageQuery {
    /// Page size, 1 to 100.
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    /// `column:ASC` or `column:DESC`, defaults to `height:DESC`.
    pub order_by: Option<String>,
}

/// Splits `height[from]` into `("height", Some("from"))`.
fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once('[') {
        Some((field, rest)) if rest.ends_with(']') => (field, Some(&rest[..rest.len() - 1])),
        _ => (key, None),
    }
}

fn parse_number(field: &str, value: &str) -> Result<u64, QueryParamsError> {
    value
        .parse::<u64>()
        .map_err(|_| QueryParamsError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Parses a query string map into repository parameters.
///
/// Filter values are passed on as text; the repository casts them per column.
///
/// Handles:
/// - `limit`, `offset` (validated) and `orderBy`
/// - `field=value`
/// - `field[from]=value`, `field[to]=value`
pub fn from_query_map(query_map: &HashMap<String, String>) -> Result<QueryParams, QueryParamsError> {
    let mut pagination = PaginationParams::default();
    let mut params = QueryParams::new();

    for (key, value) in query_map {
        match split_key(key) {
            ("limit", None) => pagination.limit = Some(parse_number(key, value)?),
            ("offset", None) => pagination.offset = Some(parse_number(key, value)?),
            ("orderBy" | "order_by", None) => params.order_by = Some(value.clone()),
            (field, None) => {
                if params.filters.contains_key(field) {
                    return Err(QueryParamsError::Conflicting(field.to_string()));
                }
                params
                    .filters
                    .insert(field.to_string(), ScalarValue::from(value.as_str()).into());
            }
            (field, Some(bound)) => {
                let bound = bound
                    .parse::<RangeBound>()
                    .map_err(|_| QueryParamsError::UnknownBound {
                        field: field.to_string(),
                        bound: bound.to_string(),
                    })?;

                let entry = params
                    .filters
                    .entry(field.to_string())
                    .or_insert_with(|| FilterValue::range(None, None));
                let FilterValue::Range { from, to } = entry else {
                    return Err(QueryParamsError::Conflicting(field.to_string()));
                };

                match bound {
                    RangeBound::From => *from = Some(ScalarValue::from(value.as_str())),
                    RangeBound::To => *to = Some(ScalarValue::from(value.as_str())),
                }
            }
        }
    }

    pagination.validate()?;
    params.limit = pagination.limit;
    params.offset = pagination.offset;

    Ok(params)
}
