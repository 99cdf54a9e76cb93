use crate::{
    domain::{common::BlockdbConfig, loader::Loader},
    infrastructure::{block::SqlBlockRepository, db::SqlDatabase},
};

pub type BlockdbLoader = Loader<SqlBlockRepository>;

/// Repositories and services wired against one connection pool.
#[derive(Debug, Clone)]
pub struct BlockdbService {
    pub block_repository: SqlBlockRepository,
    pub loader: BlockdbLoader,
}

pub async fn create_service(config: BlockdbConfig) -> Result<BlockdbService, anyhow::Error> {
    let database = SqlDatabase::new(&config.database).await?;
    let block_repository = SqlBlockRepository::new(database.get_db());
    let loader = Loader::new(block_repository.clone(), config.network);

    Ok(BlockdbService {
        block_repository,
        loader,
    })
}
