use std::sync::Arc;

use blockdb_core::application::BlockdbService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BlockdbService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BlockdbService) -> Self {
        Self { args, service }
    }
}
