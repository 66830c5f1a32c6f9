use serde::Deserialize;
use std::collections::HashMap;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Parse `SNAPMARK_AUTH_TOKENS` env var.
/// Format: comma-separated `token:user` pairs, e.g. `s3cr3t:alice,t0k3n:bob`
fn parse_auth_tokens() -> HashMap<String, String> {
    match env::var("SNAPMARK_AUTH_TOKENS") {
        Ok(val) if !val.is_empty() => val
            .split(',')
            .filter_map(|pair| {
                let mut parts = pair.splitn(2, ':');
                let token = parts.next()?.trim();
                let user = parts.next()?.trim();
                if token.is_empty() || user.is_empty() {
                    tracing::warn!(
                        "Invalid token pair '{}' in SNAPMARK_AUTH_TOKENS, skipping",
                        pair
                    );
                    None
                } else {
                    Some((token.to_string(), user.to_string()))
                }
            })
            .collect(),
        _ => HashMap::new(),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Bearer token -> user id. Empty map locks down authenticated routes.
    pub auth_tokens: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub auth_token: Option<String>,
    pub local_path: Option<String>,
}

/// Service-wide OCR defaults, used whenever a caller has no usable
/// credentials of their own.
#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub provider: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Endpoint for the `custom` provider; ignored for the built-in hosts.
    pub base_url: Option<String>,
    pub prompt: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("SNAPMARK_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("SNAPMARK_PORT", 3000),
                auth_tokens: parse_auth_tokens(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "file:snapmark.db".to_string()),
                auth_token: env::var("DATABASE_AUTH_TOKEN").ok(),
                local_path: env::var("DATABASE_LOCAL_PATH").ok(),
            },
            ocr: OcrConfig {
                provider: env::var("OCR_PROVIDER").unwrap_or_else(|_| "together".to_string()),
                model: env::var("OCR_MODEL")
                    .unwrap_or_else(|_| "meta-llama/Llama-Vision-Free".to_string()),
                api_key: env::var("OCR_API_KEY").ok(),
                base_url: env::var("OCR_BASE_URL").ok(),
                prompt: env::var("OCR_PROMPT").ok(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
