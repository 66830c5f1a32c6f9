use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapmarkError};

const TOGETHER_BASE_URL: &str = "https://api.together.xyz/v1";
const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// The closed set of supported OCR providers.
///
/// Everything speaks the OpenAI chat-completions dialect; only the host and
/// API key differ. Unknown identifiers are rejected at parse time rather
/// than defaulting anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Together,
    Groq,
    OpenAi,
    Custom,
}

impl ProviderId {
    /// `custom` has no built-in host and must be given an endpoint.
    pub fn requires_endpoint(&self) -> bool {
        matches!(self, ProviderId::Custom)
    }

    /// Resolve this provider to concrete connection parameters.
    ///
    /// For the built-in providers the endpoint argument is ignored and the
    /// fixed host is used (`openai` resolves to the provider's own default
    /// host). For `custom`, a non-empty endpoint is mandatory and is used
    /// verbatim; its absence fails before any network call is attempted.
    pub fn resolve(&self, custom_endpoint: Option<&str>) -> Result<ProviderConfig> {
        let base_url = match self {
            ProviderId::Together => TOGETHER_BASE_URL.to_string(),
            ProviderId::Groq => GROQ_BASE_URL.to_string(),
            ProviderId::OpenAi => OPENAI_BASE_URL.to_string(),
            ProviderId::Custom => match custom_endpoint {
                Some(endpoint) if !endpoint.trim().is_empty() => endpoint.to_string(),
                _ => return Err(SnapmarkError::MissingEndpoint),
            },
        };

        Ok(ProviderConfig {
            id: *self,
            base_url,
        })
    }
}

impl FromStr for ProviderId {
    type Err = SnapmarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "together" => Ok(ProviderId::Together),
            "groq" => Ok(ProviderId::Groq),
            "openai" => Ok(ProviderId::OpenAi),
            "custom" => Ok(ProviderId::Custom),
            other => Err(SnapmarkError::UnsupportedProvider(other.to_string())),
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::Together => write!(f, "together"),
            ProviderId::Groq => write!(f, "groq"),
            ProviderId::OpenAi => write!(f, "openai"),
            ProviderId::Custom => write!(f, "custom"),
        }
    }
}

/// Fully resolved connection parameters for one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub id: ProviderId,
    pub base_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_providers_resolve_to_fixed_hosts() {
        let together = ProviderId::Together.resolve(None).unwrap();
        assert_eq!(together.base_url, "https://api.together.xyz/v1");

        let groq = ProviderId::Groq.resolve(None).unwrap();
        assert_eq!(groq.base_url, "https://api.groq.com/openai/v1");

        let openai = ProviderId::OpenAi.resolve(None).unwrap();
        assert_eq!(openai.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn built_in_providers_ignore_custom_endpoint() {
        let config = ProviderId::Groq
            .resolve(Some("https://proxy.internal/v1"))
            .unwrap();
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn custom_without_endpoint_fails() {
        let result = ProviderId::Custom.resolve(None);
        assert!(matches!(result, Err(SnapmarkError::MissingEndpoint)));

        let result = ProviderId::Custom.resolve(Some("  "));
        assert!(matches!(result, Err(SnapmarkError::MissingEndpoint)));
    }

    #[test]
    fn custom_endpoint_is_used_verbatim() {
        let config = ProviderId::Custom
            .resolve(Some("http://localhost:8080/v1"))
            .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert!(config.id.requires_endpoint());
    }

    #[test]
    fn unknown_identifiers_never_default() {
        for bad in ["", "mistral", "TOGETHER", "open-ai", "anthropic"] {
            let result = bad.parse::<ProviderId>();
            assert!(
                matches!(result, Err(SnapmarkError::UnsupportedProvider(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn wire_form_round_trips() {
        for (id, wire) in [
            (ProviderId::Together, "\"together\""),
            (ProviderId::Groq, "\"groq\""),
            (ProviderId::OpenAi, "\"openai\""),
            (ProviderId::Custom, "\"custom\""),
        ] {
            assert_eq!(serde_json::to_string(&id).unwrap(), wire);
            let parsed: ProviderId = serde_json::from_str(wire).unwrap();
            assert_eq!(parsed, id);
            assert_eq!(format!("\"{id}\""), wire);
        }
    }
}
