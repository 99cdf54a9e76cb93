//! Translation of raw filter parameters into ordered SQL conditions.
//!
//! Each column is classified once, up front, as either an exact-match column
//! (`=`) or a between column (`>=` / `<=`). The operator never depends on the
//! shape of the supplied value, and the emitted conditions follow the
//! classification order so the generated SQL is deterministic.

use std::collections::BTreeMap;

use tracing::warn;

use super::condition::{Condition, FilterValue, ScalarValue};
use super::params::{is_reserved, normalize_field};
use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterClassification {
    pub exact: &'static [&'static str],
    pub between: &'static [&'static str],
}

impl FilterClassification {
    pub const fn new(exact: &'static [&'static str], between: &'static [&'static str]) -> Self {
        Self { exact, between }
    }

    pub const fn exact_only(exact: &'static [&'static str]) -> Self {
        Self { exact, between: &[] }
    }

    pub fn is_exact(&self, column: &str) -> bool {
        self.exact.contains(&column)
    }

    pub fn is_between(&self, column: &str) -> bool {
        self.between.contains(&column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.is_exact(column) || self.is_between(column)
    }
}

/// Strips reserved fields and maps every key to its snake_case column name.
///
/// Two keys naming the same column (`generatorPublicKey` and
/// `generator_public_key`) are rejected.
pub fn format_conditions(
    raw: &BTreeMap<String, FilterValue>,
) -> Result<BTreeMap<String, FilterValue>, CoreError> {
    let mut fields = BTreeMap::new();

    for (field, value) in raw.iter().filter(|(field, _)| !is_reserved(field)) {
        let column = normalize_field(field);
        if fields.contains_key(&column) {
            return Err(CoreError::InvalidFilterValue {
                field: column,
                reason: "given more than once".to_string(),
            });
        }
        fields.insert(column, value.clone());
    }

    Ok(fields)
}

/// Builds the ordered condition list for `raw` under `classification`.
///
/// Fields matching neither list are rejected with [`CoreError::UnknownFilterField`].
pub fn build_filter_query(
    raw: &BTreeMap<String, FilterValue>,
    classification: &FilterClassification,
) -> Result<Vec<Condition>, CoreError> {
    let fields = format_conditions(raw)?;

    if let Some(unknown) = fields.keys().find(|column| !classification.contains(column)) {
        warn!("Rejected unknown filter field: {}", unknown);
        return Err(CoreError::UnknownFilterField(unknown.clone()));
    }

    let mut conditions = Vec::with_capacity(fields.len() * 2);

    for column in classification.exact {
        let Some(value) = fields.get(*column) else {
            continue;
        };

        match value {
            FilterValue::Scalar(value) => conditions.push(Condition::eq(*column, value.clone())),
            FilterValue::Range { .. } => {
                return Err(CoreError::InvalidFilterValue {
                    field: column.to_string(),
                    reason: "exact-match fields do not accept ranges".to_string(),
                });
            }
        }
    }

    for column in classification.between {
        let Some(value) = fields.get(*column) else {
            continue;
        };

        match value {
            FilterValue::Scalar(value) => conditions.push(Condition::gte(*column, value.clone())),
            FilterValue::Range { from: None, to: None } => {
                return Err(CoreError::MalformedRange(column.to_string()));
            }
            FilterValue::Range { from, to } => {
                if let Some(from) = from {
                    conditions.push(Condition::gte(*column, from.clone()));
                }
                if let Some(to) = to {
                    conditions.push(Condition::lte(*column, to.clone()));
                }
            }
        }
    }

    Ok(conditions)
}

/// Shorthand used by tests and callers holding plain scalars.
pub fn scalar_filters<I, K, V>(pairs: I) -> BTreeMap<String, FilterValue>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<ScalarValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), FilterValue::Scalar(v.into())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::condition::Operator;

    const CLASSIFICATION: FilterClassification = FilterClassification::new(
        &["id", "version", "generator_public_key"],
        &["timestamp", "height"],
    );

    #[test]
    fn exact_fields_follow_classification_order() {
        let raw = scalar_filters([
            ("generator_public_key", ScalarValue::from("03aa")),
            ("id", ScalarValue::from("1234")),
            ("version", ScalarValue::from(0_i64)),
        ]);

        let conditions = build_filter_query(&raw, &CLASSIFICATION).unwrap();

        assert_eq!(
            conditions,
            vec![
                Condition::eq("id", "1234"),
                Condition::eq("version", 0_i64),
                Condition::eq("generator_public_key", "03aa"),
            ]
        );
        assert!(conditions.iter().all(|c| c.operator == Operator::Eq));
    }

    #[test]
    fn range_produces_both_bounds() {
        let mut raw = BTreeMap::new();
        raw.insert(
            "timestamp".to_string(),
            FilterValue::range(Some(100_i64.into()), Some(200_i64.into())),
        );

        let conditions = build_filter_query(&raw, &CLASSIFICATION).unwrap();

        assert_eq!(
            conditions,
            vec![
                Condition::gte("timestamp", 100_i64),
                Condition::lte("timestamp", 200_i64),
            ]
        );
    }

    #[test]
    fn scalar_between_is_lower_bound() {
        let raw = scalar_filters([("height", 42_i64)]);

        let conditions = build_filter_query(&raw, &CLASSIFICATION).unwrap();

        assert_eq!(conditions, vec![Condition::gte("height", 42_i64)]);
    }

    #[test]
    fn half_open_range_omits_missing_bound() {
        let mut raw = BTreeMap::new();
        raw.insert(
            "height".to_string(),
            FilterValue::range(None, Some(10_i64.into())),
        );

        let conditions = build_filter_query(&raw, &CLASSIFICATION).unwrap();

        assert_eq!(conditions, vec![Condition::lte("height", 10_i64)]);
    }

    #[test]
    fn empty_range_is_malformed() {
        let mut raw = BTreeMap::new();
        raw.insert("height".to_string(), FilterValue::range(None, None));

        let err = build_filter_query(&raw, &CLASSIFICATION).unwrap_err();

        assert!(matches!(err, CoreError::MalformedRange(field) if field == "height"));
    }

    #[test]
    fn reserved_fields_are_skipped() {
        let raw = scalar_filters([
            ("limit", ScalarValue::from(10_i64)),
            ("offset", ScalarValue::from(5_i64)),
            ("orderBy", ScalarValue::from("height:ASC")),
        ]);

        let conditions = build_filter_query(&raw, &CLASSIFICATION).unwrap();

        assert!(conditions.is_empty());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let raw = scalar_filters([("nonce", 1_i64)]);

        let err = build_filter_query(&raw, &CLASSIFICATION).unwrap_err();

        assert!(matches!(err, CoreError::UnknownFilterField(field) if field == "nonce"));
    }

    #[test]
    fn camel_case_keys_are_normalized() {
        let raw = scalar_filters([("generatorPublicKey", "03aa")]);

        let conditions = build_filter_query(&raw, &CLASSIFICATION).unwrap();

        assert_eq!(
            conditions,
            vec![Condition::eq("generator_public_key", "03aa")]
        );
    }

    #[test]
    fn same_column_under_two_spellings_is_invalid() {
        let raw = scalar_filters([
            ("generatorPublicKey", "03aa"),
            ("generator_public_key", "02bb"),
        ]);

        let err = build_filter_query(&raw, &CLASSIFICATION).unwrap_err();

        assert!(matches!(
            err,
            CoreError::InvalidFilterValue { field, .. } if field == "generator_public_key"
        ));
    }

    #[test]
    fn range_on_exact_field_is_invalid() {
        let mut raw = BTreeMap::new();
        raw.insert(
            "id".to_string(),
            FilterValue::range(Some("a".into()), None),
        );

        let err = build_filter_query(&raw, &CLASSIFICATION).unwrap_err();

        assert!(matches!(err, CoreError::InvalidFilterValue { field, .. } if field == "id"));
    }
}
