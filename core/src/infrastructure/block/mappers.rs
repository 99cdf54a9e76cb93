use sea_orm::FromQueryResult;

use crate::domain::block::entities::{Block, LastForgedBlock};
use crate::entity::blocks::Model as BlockModel;

/// Row shape of the block projection.
#[derive(Debug, Clone, FromQueryResult)]
pub struct BlockRow {
    pub id: String,
    pub version: i32,
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

#[derive(Debug, Clone, FromQueryResult)]
pub struct LastForgedBlockRow {
    pub id: String,
    pub timestamp: i64,
}

impl From<BlockRow> for Block {
    fn from(row: BlockRow) -> Self {
        Block {
            id: row.id,
            version: row.version,
            timestamp: row.timestamp,
            previous_block: row.previous_block,
            height: row.height,
            number_of_transactions: row.number_of_transactions,
            total_amount: row.total_amount,
            total_fee: row.total_fee,
            reward: row.reward,
            payload_length: row.payload_length,
            payload_hash: row.payload_hash,
            generator_public_key: row.generator_public_key,
            block_signature: row.block_signature,
        }
    }
}

impl From<LastForgedBlockRow> for LastForgedBlock {
    fn from(row: LastForgedBlockRow) -> Self {
        LastForgedBlock {
            id: row.id,
            timestamp: row.timestamp,
        }
    }
}

impl From<BlockModel> for Block {
    fn from(model: BlockModel) -> Self {
        Block {
            id: model.id,
            version: model.version,
            timestamp: model.timestamp,
            previous_block: model.previous_block,
            height: model.height,
            number_of_transactions: model.number_of_transactions,
            total_amount: model.total_amount,
            total_fee: model.total_fee,
            reward: model.reward,
            payload_length: model.payload_length,
            payload_hash: model.payload_hash,
            generator_public_key: model.generator_public_key,
            block_signature: model.block_signature,
        }
    }
}
