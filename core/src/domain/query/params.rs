use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::condition::FilterValue;
use crate::domain::common::entities::app_errors::CoreError;

/// Fields consumed by pagination and ordering; they never become filter conditions.
pub const RESERVED_FIELDS: &[&str] = &["limit", "offset", "orderBy", "order_by"];

pub fn is_reserved(field: &str) -> bool {
    RESERVED_FIELDS.contains(&field)
}

/// Converts `generatorPublicKey` to `generator_public_key`. Snake case input is returned as is.
pub fn normalize_field(field: &str) -> String {
    let mut column = String::with_capacity(field.len() + 4);
    for (index, ch) in field.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if index > 0 {
                column.push('_');
            }
            column.push(ch.to_ascii_lowercase());
        } else {
            column.push(ch);
        }
    }
    column
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("ASC"),
            SortDirection::Desc => f.write_str("DESC"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Desc)
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Asc)
    }
}

impl FromStr for OrderBy {
    type Err = CoreError;

    /// Parses `"column:direction"`. A bare `"column"` sorts ascending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ':');
        let column = parts.next().map(str::trim).unwrap_or_default();
        if column.is_empty() {
            return Err(CoreError::InvalidOrderBy(format!("missing column in `{s}`")));
        }

        let direction = match parts.next().map(str::trim) {
            None | Some("") => SortDirection::Asc,
            Some(direction) => direction.parse().map_err(|_| {
                CoreError::InvalidOrderBy(format!(
                    "direction must be ASC or DESC, got `{direction}`"
                ))
            })?,
        };

        Ok(OrderBy::new(normalize_field(column), direction))
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.direction)
    }
}

/// Order, limit and offset applied to a select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSpec {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub order_by: Option<OrderBy>,
}

impl PageSpec {
    pub fn first(order_by: Option<OrderBy>) -> Self {
        Self {
            limit: Some(1),
            offset: None,
            order_by,
        }
    }
}

/// Loosely-typed repository input: filter fields plus the reserved pagination fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(flatten)]
    pub filters: BTreeMap<String, FilterValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    /// Resolves `orderBy`, falling back to `default` when absent.
    pub fn order(&self, default: OrderBy) -> Result<OrderBy, CoreError> {
        match self.order_by.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(default),
        }
    }

    pub fn page(&self, default_order: OrderBy) -> Result<PageSpec, CoreError> {
        Ok(PageSpec {
            limit: self.limit,
            offset: self.offset,
            order_by: Some(self.order(default_order)?),
        })
    }
}
