use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::OcrRecord;

/// Request body for `POST /save`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecordRequest {
    pub image_url: String,
    pub markdown: String,
}

/// Response body for `POST /save`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SaveRecordResponse {
    pub id: String,
}

/// One entry in the `GET /history` listing.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub image_url: String,
    pub markdown: String,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl From<OcrRecord> for HistoryEntry {
    fn from(record: OcrRecord) -> Self {
        Self {
            id: record.id,
            image_url: record.image_url,
            markdown: record.markdown,
            created_at: record.created_at,
        }
    }
}
