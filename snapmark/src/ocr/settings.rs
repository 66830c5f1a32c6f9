use crate::config::OcrConfig;
use crate::error::Result;
use crate::models::UserSettings;

use super::registry::ProviderId;
use super::request::DEFAULT_PROMPT;

/// The credentials, model, and prompt actually used for one invocation.
///
/// Resolution is deterministic and side-effect-free: the same inputs always
/// pick the same settings, and the mask sentinel never appears here — masking
/// is purely a presentation concern at the settings-read boundary.
#[derive(Debug, Clone)]
pub struct EffectiveSettings {
    pub provider: ProviderId,
    pub api_key: String,
    pub model: String,
    pub custom_endpoint: Option<String>,
    pub prompt: String,
}

impl EffectiveSettings {
    /// The service-wide defaults, used for anonymous callers and for callers
    /// without usable credentials of their own. The default provider's key
    /// is configured out of band; a missing key is sent as-is and rejected
    /// by the provider rather than short-circuited here.
    pub fn defaults(config: &OcrConfig) -> Result<Self> {
        let provider: ProviderId = config.provider.parse()?;

        Ok(Self {
            provider,
            api_key: config.api_key.clone().unwrap_or_default(),
            model: config.model.clone(),
            custom_endpoint: config.base_url.clone(),
            prompt: config.prompt.clone().unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
        })
    }

    /// Decide whose credentials one invocation uses.
    ///
    /// Stored settings win only when the caller opted in (`use_own_keys`)
    /// and actually has a key stored; in every other case — anonymous
    /// caller, no stored row, opted out, key missing or empty — the
    /// service defaults apply.
    pub fn resolve(config: &OcrConfig, stored: Option<&UserSettings>) -> Result<Self> {
        match stored {
            Some(settings) if settings.has_own_key() => Ok(Self {
                provider: settings.provider,
                // has_own_key() guarantees the key is present and non-empty
                api_key: settings.api_key.clone().unwrap_or_default(),
                model: settings.model.clone(),
                custom_endpoint: settings.custom_endpoint.clone(),
                prompt: settings.prompt.clone(),
            }),
            _ => Self::defaults(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn default_config() -> OcrConfig {
        OcrConfig {
            provider: "together".to_string(),
            model: "meta-llama/Llama-Vision-Free".to_string(),
            api_key: Some("service-key".to_string()),
            base_url: None,
            prompt: None,
        }
    }

    fn stored(use_own_keys: bool, api_key: Option<&str>) -> UserSettings {
        let now = Utc::now();
        UserSettings {
            user_id: "user-1".to_string(),
            provider: ProviderId::Groq,
            api_key: api_key.map(String::from),
            model: "llama-3.2-90b-vision-preview".to_string(),
            custom_endpoint: None,
            use_own_keys,
            prompt: "Custom prompt.".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn anonymous_caller_gets_defaults() {
        let resolved = EffectiveSettings::resolve(&default_config(), None).unwrap();
        assert_eq!(resolved.provider, ProviderId::Together);
        assert_eq!(resolved.api_key, "service-key");
        assert_eq!(resolved.model, "meta-llama/Llama-Vision-Free");
        assert_eq!(resolved.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn opted_out_caller_gets_defaults_even_with_key() {
        let settings = stored(false, Some("sk-own"));
        let resolved = EffectiveSettings::resolve(&default_config(), Some(&settings)).unwrap();
        assert_eq!(resolved.provider, ProviderId::Together);
        assert_eq!(resolved.api_key, "service-key");
    }

    #[test]
    fn missing_or_empty_key_falls_back_to_defaults() {
        for key in [None, Some("")] {
            let settings = stored(true, key);
            let resolved = EffectiveSettings::resolve(&default_config(), Some(&settings)).unwrap();
            assert_eq!(resolved.provider, ProviderId::Together);
            assert_eq!(resolved.api_key, "service-key");
        }
    }

    #[test]
    fn opted_in_caller_gets_stored_settings_verbatim() {
        let settings = stored(true, Some("sk-own"));
        let resolved = EffectiveSettings::resolve(&default_config(), Some(&settings)).unwrap();
        assert_eq!(resolved.provider, ProviderId::Groq);
        assert_eq!(resolved.api_key, "sk-own");
        assert_eq!(resolved.model, "llama-3.2-90b-vision-preview");
        assert_eq!(resolved.prompt, "Custom prompt.");
    }

    #[test]
    fn default_key_may_be_absent() {
        let mut config = default_config();
        config.api_key = None;
        let resolved = EffectiveSettings::defaults(&config).unwrap();
        assert_eq!(resolved.api_key, "");
    }

    #[test]
    fn misconfigured_default_provider_is_rejected() {
        let mut config = default_config();
        config.provider = "tesseract".to_string();
        assert!(EffectiveSettings::defaults(&config).is_err());
    }

    #[test]
    fn custom_default_provider_carries_configured_endpoint() {
        let mut config = default_config();
        config.provider = "custom".to_string();
        config.base_url = Some("http://ocr-gateway.internal/v1".to_string());
        let resolved = EffectiveSettings::defaults(&config).unwrap();
        assert_eq!(resolved.provider, ProviderId::Custom);
        assert_eq!(
            resolved.custom_endpoint.as_deref(),
            Some("http://ocr-gateway.internal/v1")
        );
    }
}
