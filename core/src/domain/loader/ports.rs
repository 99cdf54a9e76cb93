use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    loader::entities::{Autoconfigure, LoaderStatus, SyncStatus},
};

#[cfg_attr(test, mockall::automock)]
pub trait LoaderService: Send + Sync {
    fn status(&self) -> impl Future<Output = Result<LoaderStatus, CoreError>> + Send;

    fn sync_status(&self) -> impl Future<Output = Result<SyncStatus, CoreError>> + Send;

    fn autoconfigure(&self) -> Autoconfigure;
}
