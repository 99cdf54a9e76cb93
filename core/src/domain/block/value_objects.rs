use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::BLOCK_COLUMNS;
use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{Condition, FilterClassification, OrderBy, ScalarValue},
};

/// Classification used by `search`.
pub const SEARCH_CLASSIFICATION: FilterClassification = FilterClassification::new(
    &[
        "id",
        "version",
        "previous_block",
        "payload_hash",
        "generator_public_key",
        "block_signature",
    ],
    &[
        "timestamp",
        "height",
        "number_of_transactions",
        "total_amount",
        "total_fee",
        "reward",
        "payload_length",
    ],
);

/// Classification used by `find_all`: plain equality on any block column.
pub const LIST_CLASSIFICATION: FilterClassification =
    FilterClassification::exact_only(&BLOCK_COLUMNS);

/// Block columns plus `created_at`, which is stored but never projected.
pub const ORDERABLE_COLUMNS: [&str; 14] = [
    "id",
    "version",
    "timestamp",
    "previous_block",
    "height",
    "number_of_transactions",
    "total_amount",
    "total_fee",
    "reward",
    "payload_length",
    "payload_hash",
    "generator_public_key",
    "block_signature",
    "created_at",
];

pub fn default_order() -> OrderBy {
    OrderBy::desc("height")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
}

pub fn column_kind(column: &str) -> Option<ColumnKind> {
    match column {
        "version" | "timestamp" | "height" | "number_of_transactions" | "total_amount"
        | "total_fee" | "reward" | "payload_length" => Some(ColumnKind::Integer),
        "id" | "previous_block" | "payload_hash" | "generator_public_key" | "block_signature" => {
            Some(ColumnKind::Text)
        }
        _ => None,
    }
}

/// Casts a condition's value to the storage type of its column.
pub fn coerce_condition(condition: Condition) -> Result<Condition, CoreError> {
    let Condition {
        column,
        operator,
        value,
    } = condition;

    let value = match (column_kind(&column), value) {
        (Some(ColumnKind::Integer), ScalarValue::Text(text)) => match text.trim().parse::<i64>() {
            Ok(parsed) => ScalarValue::Integer(parsed),
            Err(_) => {
                return Err(CoreError::InvalidFilterValue {
                    field: column,
                    reason: format!("expected an integer, got `{text}`"),
                });
            }
        },
        (Some(ColumnKind::Text), ScalarValue::Integer(number)) => {
            ScalarValue::Text(number.to_string())
        }
        (_, value) => value,
    };

    Ok(Condition {
        column,
        operator,
        value,
    })
}

pub fn validate_order(order: &OrderBy) -> Result<(), CoreError> {
    if ORDERABLE_COLUMNS.contains(&order.column.as_str()) {
        Ok(())
    } else {
        Err(CoreError::InvalidOrderBy(format!(
            "unknown column `{}`",
            order.column
        )))
    }
}

/// A page of rows with a count whose meaning depends on the producing method:
/// the page size for `find_all`, the total number of matches for `search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResultPage<T> {
    pub rows: Vec<T>,
    pub count: u64,
}

impl<T> ResultPage<T> {
    pub fn sized(rows: Vec<T>) -> Self {
        let count = rows.len() as u64;
        Self { rows, count }
    }

    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::filter::{build_filter_query, scalar_filters};

    #[test]
    fn classifications_cover_every_block_column() {
        for column in BLOCK_COLUMNS {
            assert!(SEARCH_CLASSIFICATION.contains(column), "{column}");
            assert!(LIST_CLASSIFICATION.is_exact(column), "{column}");
            assert!(column_kind(column).is_some(), "{column}");
        }
        assert_eq!(
            SEARCH_CLASSIFICATION.exact.len() + SEARCH_CLASSIFICATION.between.len(),
            BLOCK_COLUMNS.len()
        );
    }

    #[test]
    fn coerce_parses_integer_text() {
        let condition = coerce_condition(Condition::gte("height", "12")).unwrap();
        assert_eq!(condition, Condition::gte("height", 12_i64));
    }

    #[test]
    fn coerce_stringifies_text_columns() {
        let condition = coerce_condition(Condition::eq("id", 1234_i64)).unwrap();
        assert_eq!(condition, Condition::eq("id", "1234"));
    }

    #[test]
    fn text_columns_keep_numeric_looking_text() {
        let raw = scalar_filters([("id", "007"), ("payloadHash", "+12"), ("height", "007")]);

        let conditions: Vec<Condition> = build_filter_query(&raw, &SEARCH_CLASSIFICATION)
            .unwrap()
            .into_iter()
            .map(|condition| coerce_condition(condition).unwrap())
            .collect();

        assert_eq!(
            conditions,
            vec![
                Condition::eq("id", "007"),
                Condition::eq("payload_hash", "+12"),
                Condition::gte("height", 7_i64),
            ]
        );
    }

    #[test]
    fn coerce_rejects_non_numeric_text() {
        let err = coerce_condition(Condition::eq("height", "tall")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFilterValue { field, .. } if field == "height"));
    }

    #[test]
    fn order_must_name_a_column() {
        assert!(validate_order(&OrderBy::desc("created_at")).is_ok());
        assert!(validate_order(&default_order()).is_ok());
        assert!(matches!(
            validate_order(&OrderBy::asc("nonce")),
            Err(CoreError::InvalidOrderBy(_))
        ));
    }

    #[test]
    fn sized_page_counts_rows() {
        let page = ResultPage::sized(vec![1, 2, 3]);
        assert_eq!(page.count, 3);
        assert_eq!(ResultPage::<u8>::empty().count, 0);
    }
}
