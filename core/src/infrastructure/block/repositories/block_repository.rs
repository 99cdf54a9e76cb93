use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::{
    domain::{
        block::{
            entities::{BLOCK_COLUMNS, BLOCKS_TABLE, Block, LastForgedBlock},
            ports::BlockRepository,
            value_objects::{
                LIST_CLASSIFICATION, ResultPage, SEARCH_CLASSIFICATION, coerce_condition,
                default_order, validate_order,
            },
        },
        common::entities::app_errors::CoreError,
        query::{
            Condition, FilterClassification, OrderBy, PageSpec, QueryParams, SelectQuery,
            build_filter_query,
        },
    },
    infrastructure::{
        block::mappers::{BlockRow, LastForgedBlockRow},
        repository::{QueryExecutor, SqlRepository},
    },
};

#[derive(Debug, Clone)]
pub struct SqlBlockRepository<E = SqlRepository> {
    executor: E,
}

impl SqlBlockRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            executor: SqlRepository::new(db),
        }
    }
}

impl<E> SqlBlockRepository<E>
where
    E: QueryExecutor,
{
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn select_blocks() -> SelectQuery {
        SelectQuery::new(BLOCKS_TABLE).select(BLOCK_COLUMNS)
    }

    fn conditions(
        params: &QueryParams,
        classification: &FilterClassification,
    ) -> Result<Vec<Condition>, CoreError> {
        build_filter_query(&params.filters, classification)?
            .into_iter()
            .map(coerce_condition)
            .collect()
    }

    fn page(params: &QueryParams) -> Result<PageSpec, CoreError> {
        let page = params.page(default_order())?;
        if let Some(order_by) = &page.order_by {
            validate_order(order_by)?;
        }
        Ok(page)
    }

    async fn fetch_blocks(
        &self,
        conditions: Vec<Condition>,
        page: &PageSpec,
    ) -> Result<Vec<Block>, CoreError> {
        let query = Self::select_blocks().filters(conditions);
        let rows: Vec<BlockRow> = self.executor.run_query(&query, page).await?;

        Ok(rows.into_iter().map(Block::from).collect())
    }
}

impl<E> BlockRepository for SqlBlockRepository<E>
where
    E: QueryExecutor,
{
    async fn find_all(&self, params: QueryParams) -> Result<ResultPage<Block>, CoreError> {
        let conditions = Self::conditions(&params, &LIST_CLASSIFICATION)?;
        let page = Self::page(&params)?;

        // No count query: `count` is the page size.
        let rows = self.fetch_blocks(conditions, &page).await?;

        Ok(ResultPage::sized(rows))
    }

    async fn find_all_by_generator(
        &self,
        generator_public_key: &str,
        page: QueryParams,
    ) -> Result<ResultPage<Block>, CoreError> {
        self.find_all(page.with_filter("generatorPublicKey", generator_public_key))
            .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Block>, CoreError> {
        let rows = self
            .fetch_blocks(vec![Condition::eq("id", id)], &PageSpec::first(None))
            .await?;

        Ok(rows.into_iter().next())
    }

    async fn find_last_by_public_key(
        &self,
        generator_public_key: &str,
    ) -> Result<Option<LastForgedBlock>, CoreError> {
        let query = SelectQuery::new(BLOCKS_TABLE)
            .select(["id", "timestamp"])
            .filter(Condition::eq("generator_public_key", generator_public_key));
        let page = PageSpec::first(Some(OrderBy::desc("created_at")));

        let rows: Vec<LastForgedBlockRow> = self.executor.run_query(&query, &page).await?;

        Ok(rows.into_iter().next().map(LastForgedBlock::from))
    }

    async fn search(&self, params: QueryParams) -> Result<ResultPage<Block>, CoreError> {
        let conditions = Self::conditions(&params, &SEARCH_CLASSIFICATION)?;
        let page = Self::page(&params)?;

        let count = self.executor.count(BLOCKS_TABLE, &conditions).await?;
        if count == 0 {
            debug!("search matched no blocks, skipping row fetch");
            return Ok(ResultPage::empty());
        }

        let rows = self.fetch_blocks(conditions, &page).await?;

        Ok(ResultPage { rows, count })
    }

    async fn count(&self) -> Result<u64, CoreError> {
        self.executor.count(BLOCKS_TABLE, &[]).await
    }
}
