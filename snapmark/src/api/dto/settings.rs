use serde::{Deserialize, Serialize};

use crate::config::OcrConfig;
use crate::error::Result;
use crate::models::UserSettings;
use crate::ocr::{EffectiveSettings, ProviderId};

/// Fixed placeholder returned in place of a stored API key. A write that
/// carries this exact string means "leave the stored key unchanged".
pub const MASK_SENTINEL: &str = "••••••••";

/// Response body for `GET /settings`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub provider: ProviderId,
    /// Masked: the sentinel when a key is stored, empty otherwise. The real
    /// key never leaves the server.
    pub api_key: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub use_own_keys: bool,
    pub prompt: String,
}

impl SettingsResponse {
    pub fn from_stored(settings: &UserSettings) -> Self {
        let api_key = if settings.api_key.as_deref().is_some_and(|k| !k.is_empty()) {
            MASK_SENTINEL.to_string()
        } else {
            String::new()
        };

        Self {
            provider: settings.provider,
            api_key,
            model: settings.model.clone(),
            endpoint: settings.custom_endpoint.clone(),
            use_own_keys: settings.use_own_keys,
            prompt: settings.prompt.clone(),
        }
    }

    /// The built-in defaults, shown when a caller has nothing stored. The
    /// service-wide key is out of band and never surfaced, masked or not.
    pub fn defaults(config: &OcrConfig) -> Result<Self> {
        let defaults = EffectiveSettings::defaults(config)?;

        Ok(Self {
            provider: defaults.provider,
            api_key: String::new(),
            model: defaults.model,
            endpoint: None,
            use_own_keys: false,
            prompt: defaults.prompt,
        })
    }
}

/// Request body for `POST /settings`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveSettingsRequest {
    pub provider: String,
    pub api_key: String,
    pub model: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    pub use_own_keys: bool,
    pub prompt: String,
}

impl SaveSettingsRequest {
    /// The key to store: `None` when the caller echoed the mask back,
    /// meaning the stored key must be retained.
    pub fn key_to_store(&self) -> Option<String> {
        if self.api_key == MASK_SENTINEL {
            None
        } else {
            Some(self.api_key.clone())
        }
    }
}

/// Response body for `POST /settings`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SaveSettingsResponse {
    pub success: bool,
}
