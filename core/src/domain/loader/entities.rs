use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{block::entities::Block, common::NetworkConfig};

/// Number of block slots a node may lag behind and still count as synced.
const SYNC_TOLERANCE_SLOTS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoaderStatus {
    pub loaded: bool,
    pub now: i64,
    pub blocks_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SyncStatus {
    pub syncing: bool,
    pub blocks: i64,
    pub height: i64,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NetworkDescriptor {
    pub nethash: String,
    pub token: String,
    pub symbol: String,
    pub explorer: String,
    pub version: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Autoconfigure {
    pub network: NetworkDescriptor,
}

impl From<&NetworkConfig> for Autoconfigure {
    fn from(network: &NetworkConfig) -> Self {
        Self {
            network: NetworkDescriptor {
                nethash: network.nethash.clone(),
                token: network.token.clone(),
                symbol: network.symbol.clone(),
                explorer: network.explorer.clone(),
                version: network.pub_key_hash,
            },
        }
    }
}

/// Position of the local chain relative to the current forging slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainState {
    pub height: i64,
    pub id: Option<String>,
    /// Whole slots elapsed since the last stored block.
    pub remaining: i64,
    pub synced: bool,
}

impl ChainState {
    pub fn compute(last: Option<&Block>, network: &NetworkConfig, now: DateTime<Utc>) -> Self {
        let slot_time = network.slot_time(now);
        let last_timestamp = last.map(|block| block.timestamp).unwrap_or(0);
        let blocktime = i64::from(network.blocktime.max(1));
        let lag = (slot_time - last_timestamp).max(0);

        Self {
            height: last.map(|block| block.height).unwrap_or(0),
            id: last.map(|block| block.id.clone()),
            remaining: lag / blocktime,
            synced: last.is_some() && lag < SYNC_TOLERANCE_SLOTS * blocktime,
        }
    }
}

impl From<&ChainState> for LoaderStatus {
    fn from(state: &ChainState) -> Self {
        Self {
            loaded: state.synced,
            now: state.height,
            blocks_count: state.remaining,
        }
    }
}

impl From<ChainState> for SyncStatus {
    fn from(state: ChainState) -> Self {
        Self {
            syncing: !state.synced,
            blocks: state.remaining,
            height: state.height,
            id: state.id,
        }
    }
}
