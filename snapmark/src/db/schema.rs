use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Per-user OCR provider settings
        CREATE TABLE IF NOT EXISTS user_settings (
            user_id TEXT PRIMARY KEY,
            provider TEXT NOT NULL DEFAULT 'together',
            api_key TEXT,
            model TEXT NOT NULL,
            custom_endpoint TEXT,
            use_own_keys INTEGER NOT NULL DEFAULT 0,
            prompt TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        -- Persisted OCR results
        CREATE TABLE IF NOT EXISTS ocr_records (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            image_url TEXT NOT NULL,
            markdown TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_ocr_records_user_created
            ON ocr_records(user_id, created_at);
        "#,
    )
    .await?;

    Ok(())
}
