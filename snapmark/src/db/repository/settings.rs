use chrono::{DateTime, Utc};
use libsql::{params, Connection, Row};

use crate::error::{Result, SnapmarkError};
use crate::models::{SettingsUpdate, UserSettings};
use crate::ocr::ProviderId;

pub struct SettingsRepository;

impl SettingsRepository {
    pub async fn get(conn: &Connection, user_id: &str) -> Result<Option<UserSettings>> {
        let mut rows = conn
            .query(
                "SELECT user_id, provider, api_key, model, custom_endpoint, use_own_keys,
                        prompt, created_at, updated_at
                 FROM user_settings WHERE user_id = ?1",
                params![user_id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_settings(&row)?))
        } else {
            Ok(None)
        }
    }

    /// Last-write-wins upsert. `update.api_key = None` leaves the stored key
    /// untouched (`COALESCE` keeps the existing value); `created_at` is only
    /// set on first insert.
    pub async fn upsert(conn: &Connection, user_id: &str, update: &SettingsUpdate) -> Result<()> {
        let now = Utc::now().to_rfc3339();

        conn.execute(
            r#"
            INSERT INTO user_settings (
                user_id, provider, api_key, model, custom_endpoint,
                use_own_keys, prompt, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
            ON CONFLICT(user_id) DO UPDATE SET
                provider = excluded.provider,
                api_key = COALESCE(excluded.api_key, user_settings.api_key),
                model = excluded.model,
                custom_endpoint = excluded.custom_endpoint,
                use_own_keys = excluded.use_own_keys,
                prompt = excluded.prompt,
                updated_at = excluded.updated_at
            "#,
            params![
                user_id,
                update.provider.to_string(),
                update.api_key.clone(),
                update.model.clone(),
                update.custom_endpoint.clone(),
                update.use_own_keys as i32,
                update.prompt.clone(),
                now,
            ],
        )
        .await?;

        Ok(())
    }

    fn row_to_settings(row: &Row) -> Result<UserSettings> {
        let provider_raw = row.get::<String>(1)?;
        let provider: ProviderId = provider_raw
            .parse()
            .map_err(|_| SnapmarkError::Internal(format!("Stored provider '{provider_raw}' is not recognized")))?;

        Ok(UserSettings {
            user_id: row.get::<String>(0)?,
            provider,
            api_key: row.get::<Option<String>>(2)?,
            model: row.get::<String>(3)?,
            custom_endpoint: row.get::<Option<String>>(4)?,
            use_own_keys: row.get::<i32>(5)? != 0,
            prompt: row.get::<String>(6)?,
            created_at: parse_timestamp(&row.get::<String>(7)?)?,
            updated_at: parse_timestamp(&row.get::<String>(8)?)?,
        })
    }
}

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| SnapmarkError::Internal(format!("Invalid stored timestamp '{value}': {e}")))
}
