use libsql::{params, Connection, Row};

use crate::error::Result;
use crate::models::OcrRecord;

use super::settings::parse_timestamp;

pub struct RecordRepository;

impl RecordRepository {
    pub async fn create(conn: &Connection, record: &OcrRecord) -> Result<()> {
        conn.execute(
            "INSERT INTO ocr_records (id, user_id, image_url, markdown, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.id.clone(),
                record.user_id.clone(),
                record.image_url.clone(),
                record.markdown.clone(),
                record.created_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn list_for_user(
        conn: &Connection,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<OcrRecord>> {
        let mut rows = conn
            .query(
                "SELECT id, user_id, image_url, markdown, created_at
                 FROM ocr_records
                 WHERE user_id = ?1
                 ORDER BY created_at DESC
                 LIMIT ?2",
                params![user_id, limit as i64],
            )
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(Self::row_to_record(&row)?);
        }
        Ok(records)
    }

    pub async fn count_for_user(conn: &Connection, user_id: &str) -> Result<u64> {
        let mut rows = conn
            .query(
                "SELECT COUNT(*) FROM ocr_records WHERE user_id = ?1",
                params![user_id],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(row.get::<i32>(0)? as u64),
            None => Ok(0),
        }
    }

    fn row_to_record(row: &Row) -> Result<OcrRecord> {
        Ok(OcrRecord {
            id: row.get::<String>(0)?,
            user_id: row.get::<String>(1)?,
            image_url: row.get::<String>(2)?,
            markdown: row.get::<String>(3)?,
            created_at: parse_timestamp(&row.get::<String>(4)?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::Database;
    use chrono::{Duration, Utc};

    async fn test_conn() -> Connection {
        let db = Database::new(&DatabaseConfig {
            url: ":memory:".to_string(),
            auth_token: None,
            local_path: None,
        })
        .await
        .unwrap();
        db.connect().unwrap()
    }

    fn record_at(user_id: &str, offset_secs: i64) -> OcrRecord {
        let mut record = OcrRecord::new(
            user_id.to_string(),
            format!("https://cdn.example.com/{offset_secs}.png"),
            format!("# Page {offset_secs}"),
        );
        record.created_at = Utc::now() + Duration::seconds(offset_secs);
        record
    }

    #[tokio::test]
    async fn create_and_list_round_trips() {
        let conn = test_conn().await;
        let record = record_at("user-1", 0);
        RecordRepository::create(&conn, &record).await.unwrap();

        let listed = RecordRepository::list_for_user(&conn, "user-1", 50).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, record.id);
        assert_eq!(listed[0].markdown, record.markdown);
    }

    #[tokio::test]
    async fn list_is_newest_first_and_capped() {
        let conn = test_conn().await;
        for offset in 0..5 {
            RecordRepository::create(&conn, &record_at("user-1", offset))
                .await
                .unwrap();
        }

        let listed = RecordRepository::list_for_user(&conn, "user-1", 3).await.unwrap();
        assert_eq!(listed.len(), 3);
        assert!(listed[0].created_at > listed[1].created_at);
        assert!(listed[1].created_at > listed[2].created_at);
    }

    #[tokio::test]
    async fn list_is_scoped_to_owner() {
        let conn = test_conn().await;
        RecordRepository::create(&conn, &record_at("alice", 0)).await.unwrap();
        RecordRepository::create(&conn, &record_at("bob", 1)).await.unwrap();

        let listed = RecordRepository::list_for_user(&conn, "alice", 50).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].user_id, "alice");
        assert_eq!(RecordRepository::count_for_user(&conn, "bob").await.unwrap(), 1);
    }
}
