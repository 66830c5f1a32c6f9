use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted OCR result. Immutable once created; owned by the creating
/// user and only ever read back through that user's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrRecord {
    pub id: String,
    pub user_id: String,
    pub image_url: String,
    pub markdown: String,
    pub created_at: DateTime<Utc>,
}

impl OcrRecord {
    pub fn new(user_id: String, image_url: String, markdown: String) -> Self {
        Self {
            id: nanoid::nanoid!(),
            user_id,
            image_url,
            markdown,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_gets_nanoid_and_timestamp() {
        let record = OcrRecord::new(
            "user-1".to_string(),
            "https://example.com/receipt.png".to_string(),
            "# Receipt".to_string(),
        );
        assert_eq!(record.id.len(), 21);
        assert_eq!(record.user_id, "user-1");
    }

    #[test]
    fn record_ids_are_unique() {
        let a = OcrRecord::new("u".into(), "https://a".into(), "m".into());
        let b = OcrRecord::new("u".into(), "https://a".into(), "m".into());
        assert_ne!(a.id, b.id);
    }
}
