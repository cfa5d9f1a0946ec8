use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::MovieStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MovieStore>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: MovieStore, config: AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}
