//! SeaORM entity for the `blocks` table.
//!
//! The table itself is owned by the node's migration tooling; this definition
//! mirrors it for typed inserts and for creating throwaway schemas in tests.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blocks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub version: i32,
    pub timestamp: i64,
    pub previous_block: Option<String>,
    #[sea_orm(unique)]
    pub height: i64,
    pub number_of_transactions: i32,
    pub total_amount: i64,
    pub total_fee: i64,
    pub reward: i64,
    pub payload_length: i32,
    pub payload_hash: String,
    pub generator_public_key: String,
    #[sea_orm(unique)]
    pub block_signature: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
