use async_trait::async_trait;

use crate::db::connection::Database;
use crate::db::repository::{RecordRepository, SettingsRepository};
use crate::db::traits::{DatabaseBackend, RecordStore, SettingsStore};
use crate::error::Result;
use crate::models::{OcrRecord, SettingsUpdate, UserSettings};

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsStore for LibSqlBackend {
    async fn get_settings(&self, user_id: &str) -> Result<Option<UserSettings>> {
        let conn = self.db.connect()?;
        SettingsRepository::get(&conn, user_id).await
    }

    async fn upsert_settings(&self, user_id: &str, update: &SettingsUpdate) -> Result<()> {
        let conn = self.db.connect()?;
        SettingsRepository::upsert(&conn, user_id, update).await
    }
}

#[async_trait]
impl RecordStore for LibSqlBackend {
    async fn create_record(&self, record: &OcrRecord) -> Result<()> {
        let conn = self.db.connect()?;
        RecordRepository::create(&conn, record).await
    }

    async fn list_records(&self, user_id: &str, limit: u32) -> Result<Vec<OcrRecord>> {
        let conn = self.db.connect()?;
        RecordRepository::list_for_user(&conn, user_id, limit).await
    }

    async fn count_records(&self, user_id: &str) -> Result<u64> {
        let conn = self.db.connect()?;
        RecordRepository::count_for_user(&conn, user_id).await
    }
}

#[async_trait]
impl DatabaseBackend for LibSqlBackend {
    async fn sync(&self) -> Result<()> {
        self.db.sync().await
    }
}
