use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::Config;
use crate::services::StoreService;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub stores: Arc<StoreService>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        // Create the store service with its storage handle
        let stores = Arc::new(StoreService::new(db.clone()));

        Self {
            db,
            config: Arc::new(config),
            stores,
        }
    }
}
