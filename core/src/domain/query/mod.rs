pub mod condition;
pub mod filter;
pub mod params;
pub mod select;

pub use condition::{Condition, FilterValue, Operator, ScalarValue};
pub use filter::{FilterClassification, build_filter_query, format_conditions};
pub use params::{OrderBy, PageSpec, QueryParams, SortDirection};
pub use select::{SelectQuery, Table};
