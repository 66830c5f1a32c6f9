use std::sync::Arc;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::services::OcrService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn DatabaseBackend>,
    pub ocr: OcrService,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn DatabaseBackend>) -> Self {
        let ocr = OcrService::new(db.clone(), config.ocr.clone());

        Self {
            config: Arc::new(config),
            db,
            ocr,
        }
    }
}
