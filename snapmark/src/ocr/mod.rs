//! OCR via vision-capable chat-completion models.
//!
//! Everything needed to turn an image URL into Markdown text through an
//! OpenAI-compatible provider:
//!
//! - `registry` resolves a provider identifier to concrete connection
//!   parameters (fixed base URLs for the built-in hosts, caller-supplied
//!   endpoint for `custom`)
//! - `request` builds the chat-completion payload (pure construction)
//! - `api` sends it and extracts the transcription
//! - `settings` decides whose credentials a given invocation uses
//!
//! The provider table is compile-time constant; per-request state lives in
//! [`EffectiveSettings`], so concurrent extractions never share anything.

mod api;
mod registry;
mod request;
mod settings;

pub use api::OcrClient;
pub use registry::{ProviderConfig, ProviderId};
pub use request::{extraction_request, probe_request, ChatRequest, DEFAULT_PROMPT, NO_TEXT_FALLBACK};
pub use settings::EffectiveSettings;
