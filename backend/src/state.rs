use std::sync::Arc;

use crate::{
    config::Config, db::connection::DbPool, repositories::shift_session::ShiftSessionStore,
    services::shift_flow::ShiftFlow, storage::BlobStore,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Config,
    pub media: Arc<dyn BlobStore>,
    shifts: Arc<dyn ShiftSessionStore>,
}

impl AppState {
    pub fn new(
        pool: DbPool,
        config: Config,
        media: Arc<dyn BlobStore>,
        shifts: Arc<dyn ShiftSessionStore>,
    ) -> Self {
        Self {
            pool,
            config,
            media,
            shifts,
        }
    }

    /// Returns the shift lifecycle orchestrator over the configured store.
    pub fn shift_flow(&self) -> ShiftFlow {
        ShiftFlow::new(self.shifts.clone())
    }
}
