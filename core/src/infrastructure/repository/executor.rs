use std::future::Future;

use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult};
use tracing::{debug, error};

use super::compiler::{compile_count, compile_select, count_alias};
use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{Condition, PageSpec, SelectQuery, Table},
};

/// Query capability shared by the domain repositories.
///
/// Implementations are read-only and issue exactly one round trip per call.
pub trait QueryExecutor: Send + Sync {
    /// Number of distinct primary keys in `table` matching `conditions`.
    fn count(
        &self,
        table: Table,
        conditions: &[Condition],
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Runs `query` with ordering applied before limit and offset.
    fn run_query<T>(
        &self,
        query: &SelectQuery,
        page: &PageSpec,
    ) -> impl Future<Output = Result<Vec<T>, CoreError>> + Send
    where
        T: FromQueryResult + Send + Sync;
}

#[derive(Debug, Clone)]
pub struct SqlRepository {
    pub db: DatabaseConnection,
}

impl SqlRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl QueryExecutor for SqlRepository {
    async fn count(&self, table: Table, conditions: &[Condition]) -> Result<u64, CoreError> {
        let statement = compile_count(self.db.get_database_backend(), table, conditions);
        debug!(sql = %statement.sql, "count");

        let row = self.db.query_one(statement).await.map_err(|e| {
            error!("Failed to count {}: {}", table.name, e);
            CoreError::Connection(e)
        })?;

        let count = match row {
            Some(row) => row.try_get::<i64>("", count_alias()).map_err(|e| {
                error!("Failed to read count of {}: {}", table.name, e);
                CoreError::Connection(e)
            })?,
            None => 0,
        };

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn run_query<T>(&self, query: &SelectQuery, page: &PageSpec) -> Result<Vec<T>, CoreError>
    where
        T: FromQueryResult + Send + Sync,
    {
        let statement = compile_select(self.db.get_database_backend(), query, page);
        debug!(sql = %statement.sql, "select");

        T::find_by_statement(statement)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to query {}: {}", query.table().name, e);
                CoreError::Connection(e)
            })
    }
}
