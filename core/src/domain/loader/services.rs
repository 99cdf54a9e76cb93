use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{
    block::ports::BlockRepository,
    common::{NetworkConfig, entities::app_errors::CoreError},
    loader::{
        entities::{Autoconfigure, ChainState, LoaderStatus, SyncStatus},
        ports::LoaderService,
    },
    query::QueryParams,
};

#[derive(Debug, Clone)]
pub struct Loader<B> {
    block_repository: B,
    network: NetworkConfig,
}

impl<B> Loader<B>
where
    B: BlockRepository,
{
    pub fn new(block_repository: B, network: NetworkConfig) -> Self {
        Self {
            block_repository,
            network,
        }
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub async fn chain_state_at(&self, now: DateTime<Utc>) -> Result<ChainState, CoreError> {
        let last = self
            .block_repository
            .find_all(QueryParams::new().with_limit(1))
            .await?
            .rows
            .into_iter()
            .next();

        let state = ChainState::compute(last.as_ref(), &self.network, now);
        debug!(
            height = state.height,
            remaining = state.remaining,
            synced = state.synced,
            "computed chain state"
        );

        Ok(state)
    }

    pub async fn status_at(&self, now: DateTime<Utc>) -> Result<LoaderStatus, CoreError> {
        let state = self.chain_state_at(now).await?;
        Ok(LoaderStatus::from(&state))
    }

    pub async fn sync_status_at(&self, now: DateTime<Utc>) -> Result<SyncStatus, CoreError> {
        let state = self.chain_state_at(now).await?;
        Ok(SyncStatus::from(state))
    }
}

impl<B> LoaderService for Loader<B>
where
    B: BlockRepository,
{
    async fn status(&self) -> Result<LoaderStatus, CoreError> {
        self.status_at(Utc::now()).await
    }

    async fn sync_status(&self) -> Result<SyncStatus, CoreError> {
        self.sync_status_at(Utc::now()).await
    }

    fn autoconfigure(&self) -> Autoconfigure {
        Autoconfigure::from(&self.network)
    }
}
