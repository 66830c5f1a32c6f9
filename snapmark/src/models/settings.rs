use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ocr::ProviderId;

/// Stored per-user OCR settings, keyed by user id.
///
/// `api_key` holds the real secret. It never leaves the server unmasked;
/// masking happens at the settings-read boundary in the API layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub user_id: String,
    pub provider: ProviderId,
    pub api_key: Option<String>,
    pub model: String,
    pub custom_endpoint: Option<String>,
    pub use_own_keys: bool,
    pub prompt: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSettings {
    /// True when these settings carry a usable secret of their own.
    pub fn has_own_key(&self) -> bool {
        self.use_own_keys && self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// Upsert payload for a user's settings row.
///
/// `api_key: None` means "retain whatever key is already stored" — this is
/// how a masked-sentinel write round-trips without clobbering the secret.
#[derive(Debug, Clone)]
pub struct SettingsUpdate {
    pub provider: ProviderId,
    pub api_key: Option<String>,
    pub model: String,
    pub custom_endpoint: Option<String>,
    pub use_own_keys: bool,
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(use_own_keys: bool, api_key: Option<&str>) -> UserSettings {
        let now = Utc::now();
        UserSettings {
            user_id: "user-1".to_string(),
            provider: ProviderId::Groq,
            api_key: api_key.map(String::from),
            model: "llama-3.2-90b-vision-preview".to_string(),
            custom_endpoint: None,
            use_own_keys,
            prompt: "Extract the text.".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn has_own_key_requires_flag_and_key() {
        assert!(settings(true, Some("sk-123")).has_own_key());
        assert!(!settings(false, Some("sk-123")).has_own_key());
        assert!(!settings(true, None).has_own_key());
        assert!(!settings(true, Some("")).has_own_key());
    }
}
