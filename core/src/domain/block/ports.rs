use std::future::Future;

use crate::domain::{
    block::{
        entities::{Block, LastForgedBlock},
        value_objects::ResultPage,
    },
    common::entities::app_errors::CoreError,
    query::QueryParams,
};

/// Read access to the `blocks` store.
#[cfg_attr(test, mockall::automock)]
pub trait BlockRepository: Send + Sync {
    /// Equality filters on block columns, ordered and paginated.
    ///
    /// `count` is the size of the returned page, not the number of matches.
    /// Use [`BlockRepository::search`] for an exact total.
    fn find_all(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<ResultPage<Block>, CoreError>> + Send;

    fn find_all_by_generator(
        &self,
        generator_public_key: &str,
        page: QueryParams,
    ) -> impl Future<Output = Result<ResultPage<Block>, CoreError>> + Send;

    fn find_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Block>, CoreError>> + Send;

    /// Most recently stored block (by insertion time, not height) of a generator.
    fn find_last_by_public_key(
        &self,
        generator_public_key: &str,
    ) -> impl Future<Output = Result<Option<LastForgedBlock>, CoreError>> + Send;

    /// Exact and range filters with an authoritative total `count`.
    fn search(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<ResultPage<Block>, CoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
