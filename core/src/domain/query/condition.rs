use std::fmt;

use serde::{Deserialize, Serialize};

/// A single filter value as supplied by the caller.
///
/// Query-string values stay `Text` until the column type is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Integer(value)
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Integer(value) => write!(f, "{value}"),
            ScalarValue::Text(value) => f.write_str(value),
        }
    }
}

/// Raw filter value: either a bare scalar or an inclusive range with optional bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<ScalarValue>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<ScalarValue>,
    },
    Scalar(ScalarValue),
}

impl FilterValue {
    pub fn range(from: Option<ScalarValue>, to: Option<ScalarValue>) -> Self {
        FilterValue::Range { from, to }
    }
}

impl From<ScalarValue> for FilterValue {
    fn from(value: ScalarValue) -> Self {
        FilterValue::Scalar(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Scalar(value.into())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Scalar(value.into())
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Scalar(value.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Gte,
    Lte,
}

impl Operator {
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub operator: Operator,
    pub value: ScalarValue,
}

impl Condition {
    pub fn new(column: impl Into<String>, operator: Operator, value: impl Into<ScalarValue>) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn eq(column: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        Self::new(column, Operator::Eq, value)
    }

    pub fn gte(column: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        Self::new(column, Operator::Gte, value)
    }

    pub fn lte(column: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        Self::new(column, Operator::Lte, value)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.operator, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_value_from_json() {
        let scalar: FilterValue = serde_json::from_value(serde_json::json!(7)).unwrap();
        assert_eq!(scalar, FilterValue::Scalar(ScalarValue::Integer(7)));

        let text: FilterValue = serde_json::from_value(serde_json::json!("abc")).unwrap();
        assert_eq!(text, FilterValue::Scalar(ScalarValue::Text("abc".to_string())));

        let range: FilterValue =
            serde_json::from_value(serde_json::json!({ "from": 100, "to": 200 })).unwrap();
        assert_eq!(
            range,
            FilterValue::range(Some(100_i64.into()), Some(200_i64.into()))
        );

        let half: FilterValue = serde_json::from_value(serde_json::json!({ "to": 5 })).unwrap();
        assert_eq!(half, FilterValue::range(None, Some(5_i64.into())));
    }

    #[test]
    fn condition_display() {
        assert_eq!(Condition::gte("height", 10_i64).to_string(), "height >= 10");
        assert_eq!(Condition::eq("id", "abc").to_string(), "id = abc");
    }
}
