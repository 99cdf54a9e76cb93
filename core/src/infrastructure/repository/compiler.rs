//! Compiles [`SelectQuery`] values into backend-specific parameterized statements.

use sea_orm::{
    DatabaseBackend, Statement, Value,
    sea_query::{Alias, Expr, Func, Order, Query, SelectStatement, SimpleExpr},
};

use crate::domain::query::{
    Condition, Operator, PageSpec, ScalarValue, SelectQuery, SortDirection, Table,
};

const COUNT_ALIAS: &str = "count";

impl From<ScalarValue> for Value {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Integer(value) => value.into(),
            ScalarValue::Text(value) => value.into(),
        }
    }
}

fn condition_expr(condition: &Condition) -> SimpleExpr {
    let column = Expr::col(Alias::new(condition.column.as_str()));
    let value = Value::from(condition.value.clone());

    match condition.operator {
        Operator::Eq => column.eq(value),
        Operator::Gte => column.gte(value),
        Operator::Lte => column.lte(value),
    }
}

fn apply_conditions(select: &mut SelectStatement, conditions: &[Condition]) {
    for condition in conditions {
        select.and_where(condition_expr(condition));
    }
}

fn order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

/// `SELECT <columns> FROM <table> WHERE ... ORDER BY ... LIMIT ... OFFSET ...`
pub fn compile_select(backend: DatabaseBackend, query: &SelectQuery, page: &PageSpec) -> Statement {
    let mut select = Query::select();
    select
        .columns(query.columns().iter().map(|column| Alias::new(column.as_str())))
        .from(Alias::new(query.table().name));

    apply_conditions(&mut select, query.conditions());

    if let Some(order_by) = &page.order_by {
        select.order_by(Alias::new(order_by.column.as_str()), order(order_by.direction));
    }
    if let Some(limit) = page.limit {
        select.limit(limit);
    }
    if let Some(offset) = page.offset {
        select.offset(offset);
    }

    backend.build(&select)
}

/// `SELECT COUNT(DISTINCT <primary key>) AS count FROM <table> WHERE ...`
pub fn compile_count(backend: DatabaseBackend, table: Table, conditions: &[Condition]) -> Statement {
    let mut select = Query::select();
    select
        .expr_as(
            Func::count_distinct(Expr::col(Alias::new(table.primary_key))),
            Alias::new(COUNT_ALIAS),
        )
        .from(Alias::new(table.name));

    apply_conditions(&mut select, conditions);

    backend.build(&select)
}

pub fn count_alias() -> &'static str {
    COUNT_ALIAS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::OrderBy;

    const BLOCKS: Table = Table::new("blocks", "id");

    #[test]
    fn select_orders_before_paginating() {
        let query = SelectQuery::new(BLOCKS)
            .select(["id", "height"])
            .filter(Condition::gte("height", 10_i64))
            .filter(Condition::lte("height", 20_i64));
        let page = PageSpec {
            limit: Some(2),
            offset: Some(4),
            order_by: Some(OrderBy::desc("height")),
        };

        let statement = compile_select(DatabaseBackend::Postgres, &query, &page);

        assert!(statement.sql.starts_with(
            r#"SELECT "id", "height" FROM "blocks" WHERE "height" >= $1 AND "height" <= $2"#
        ));
        let order_at = statement.sql.find("ORDER BY \"height\" DESC").unwrap();
        let limit_at = statement.sql.find("LIMIT").unwrap();
        let offset_at = statement.sql.find("OFFSET").unwrap();
        assert!(order_at < limit_at && limit_at < offset_at);

        let values = statement.values.unwrap().0;
        assert_eq!(values[0], Value::from(10_i64));
        assert_eq!(values[1], Value::from(20_i64));
    }

    #[test]
    fn select_without_page_has_no_tail() {
        let query = SelectQuery::new(BLOCKS)
            .select(["id"])
            .filter(Condition::eq("id", "abc"));

        let statement = compile_select(DatabaseBackend::Sqlite, &query, &PageSpec::default());

        assert_eq!(
            statement.sql,
            r#"SELECT "id" FROM "blocks" WHERE "id" = ?"#
        );
        assert_eq!(
            statement.values.unwrap().0,
            vec![Value::from("abc".to_string())]
        );
    }

    #[test]
    fn count_is_distinct_on_primary_key() {
        let statement = compile_count(
            DatabaseBackend::Postgres,
            BLOCKS,
            &[Condition::eq("generator_public_key", "03aa")],
        );

        assert_eq!(
            statement.sql,
            r#"SELECT COUNT(DISTINCT "id") AS "count" FROM "blocks" WHERE "generator_public_key" = $1"#
        );
    }

    #[test]
    fn count_without_conditions() {
        let statement = compile_count(DatabaseBackend::Postgres, BLOCKS, &[]);

        assert_eq!(
            statement.sql,
            r#"SELECT COUNT(DISTINCT "id") AS "count" FROM "blocks""#
        );
        assert_eq!(count_alias(), "count");
    }
}
