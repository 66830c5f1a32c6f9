use async_trait::async_trait;

use crate::error::Result;
use crate::models::{OcrRecord, SettingsUpdate, UserSettings};

/// Read/write operations for per-user OCR settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get_settings(&self, user_id: &str) -> Result<Option<UserSettings>>;

    /// Last-write-wins upsert. An absent `api_key` in the update retains the
    /// stored key; there is no optimistic concurrency check.
    async fn upsert_settings(&self, user_id: &str, update: &SettingsUpdate) -> Result<()>;
}

/// Append/query operations for persisted OCR results.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_record(&self, record: &OcrRecord) -> Result<()>;

    /// Records for one user, newest first, at most `limit` rows.
    async fn list_records(&self, user_id: &str, limit: u32) -> Result<Vec<OcrRecord>>;

    async fn count_records(&self, user_id: &str) -> Result<u64>;
}

/// Combined storage backend handed around as `Arc<dyn DatabaseBackend>`.
#[async_trait]
pub trait DatabaseBackend: SettingsStore + RecordStore {
    /// Sync with remote (e.g. Turso replication). No-op for local-only backends.
    async fn sync(&self) -> Result<()>;
}
