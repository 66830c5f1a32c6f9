use reqwest::Client;

use crate::error::{Result, SnapmarkError};

use super::registry::ProviderConfig;
use super::request::{ChatRequest, ChatResponse, NO_TEXT_FALLBACK};

/// Executes chat-completion requests against one resolved provider.
///
/// Deliberately minimal: a single attempt per call with the transport's
/// default timeout, no retry and no backoff. Failures map straight to
/// [`SnapmarkError::Provider`] so callers can tell "request failed" apart
/// from "nothing to read" (which is a success carrying the fallback text).
#[derive(Clone, Debug)]
pub struct OcrClient {
    client: Client,
    provider: String,
    api_key: String,
    base_url: String,
}

impl OcrClient {
    pub fn new(config: &ProviderConfig, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| SnapmarkError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            provider: config.id.to_string(),
            api_key: api_key.to_string(),
            base_url: config.base_url.clone(),
        })
    }

    /// Run an extraction request and return the transcribed Markdown.
    ///
    /// Zero choices or an empty message yield [`NO_TEXT_FALLBACK`], not an
    /// error — an unreadable image is a valid outcome.
    pub async fn extract(&self, request: &ChatRequest) -> Result<String> {
        let response = self.send(request).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Ok(NO_TEXT_FALLBACK.to_string());
        }

        Ok(content)
    }

    /// Run a connection-test probe and return the raw response text.
    ///
    /// Unlike [`extract`](Self::extract), an empty choice list here is a
    /// failure — the probe exists to show the caller what the provider
    /// actually said.
    pub async fn probe(&self, request: &ChatRequest) -> Result<Option<String>> {
        let response = self.send(request).await?;

        match response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => Err(self.provider_error("No response from API")),
        }
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.provider_error(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(self.provider_error(format!("API request failed: {status} - {body}")));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| self.provider_error(format!("Failed to parse response: {e}")))
    }

    fn provider_error(&self, message: impl Into<String>) -> SnapmarkError {
        SnapmarkError::Provider {
            provider: self.provider.clone(),
            message: message.into(),
        }
    }
}
