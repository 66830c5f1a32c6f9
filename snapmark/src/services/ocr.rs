use std::sync::Arc;

use crate::config::OcrConfig;
use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::ocr::{extraction_request, probe_request, EffectiveSettings, OcrClient, ProviderId};

/// Orchestrates one OCR invocation: settings resolution, provider lookup,
/// request construction, and the provider call. Stateless between requests;
/// every call builds its own client from the resolved settings, so per-call
/// provider overrides need no shared mutable state.
#[derive(Clone)]
pub struct OcrService {
    db: Arc<dyn DatabaseBackend>,
    defaults: Arc<OcrConfig>,
}

impl OcrService {
    pub fn new(db: Arc<dyn DatabaseBackend>, defaults: OcrConfig) -> Self {
        Self {
            db,
            defaults: Arc::new(defaults),
        }
    }

    /// Extract Markdown from the image at `image_url` on behalf of `caller`
    /// (or anonymously).
    ///
    /// Exactly one settings read and one outbound provider call; nothing is
    /// persisted here.
    pub async fn extract_markdown(&self, image_url: &str, caller: Option<&str>) -> Result<String> {
        let stored = match caller {
            Some(user_id) => self.db.get_settings(user_id).await?,
            None => None,
        };

        let settings = EffectiveSettings::resolve(&self.defaults, stored.as_ref())?;
        let provider_config = settings.provider.resolve(settings.custom_endpoint.as_deref())?;

        tracing::debug!(
            provider = %provider_config.id,
            model = %settings.model,
            own_keys = stored.as_ref().is_some_and(|s| s.has_own_key()),
            "Dispatching OCR request"
        );

        let request = extraction_request(image_url, &settings);
        let client = OcrClient::new(&provider_config, &settings.api_key)?;
        let markdown = client.extract(&request).await?;

        tracing::debug!(markdown_len = markdown.len(), "OCR extraction completed");
        Ok(markdown)
    }

    /// One-shot diagnostic probe with caller-supplied credentials. Not part
    /// of the OCR path; reports the provider's raw response text.
    pub async fn test_connection(
        &self,
        provider: &str,
        api_key: &str,
        model: &str,
        endpoint: Option<&str>,
    ) -> Result<Option<String>> {
        let provider: ProviderId = provider.parse()?;
        let provider_config = provider.resolve(endpoint)?;

        let request = probe_request(model);
        let client = OcrClient::new(&provider_config, api_key)?;
        client.probe(&request).await
    }

    pub fn defaults(&self) -> &OcrConfig {
        &self.defaults
    }
}
