use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::query::Table;

pub const BLOCKS_TABLE: Table = Table::new("blocks", "id");

/// Columns of the block projection, in wire order. Block queries select exactly this set.
pub const BLOCK_COLUMNS: [&str; 13] = [
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
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Block {
    pub id: String,
    pub version: i32,
    /// Seconds since the network epoch.
    pub timestamp: i64,
    pub previous_block: Option<String>,
    pub height: i64,
    pub number_of_transactions: i32,
    pub total_amount: i64,
    pub total_fee: i64,
    pub reward: i64,
    pub payload_length: i32,
    pub payload_hash: String,
    pub generator_public_key: String,
    pub block_signature: String,
}

/// The `{id, timestamp}` pair returned for a generator's most recent block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LastForgedBlock {
    pub id: String,
    pub timestamp: i64,
}
