use serde::{Deserialize, Serialize};

use super::settings::EffectiveSettings;

/// Instruction used whenever the effective prompt is empty.
pub const DEFAULT_PROMPT: &str = "Extract all readable text from this image and format it as clean, well-structured Markdown. Preserve any formatting, headings, lists, or structure you can identify. If there are tables, format them as Markdown tables. Return only the extracted text in Markdown format.";

/// Returned in place of an error when the provider finds nothing to read.
pub const NO_TEXT_FALLBACK: &str = "No text could be extracted from the image.";

/// Output cap for extraction requests.
const MAX_OUTPUT_TOKENS: u32 = 4000;
/// Near-zero sampling favors literal transcription over rephrasing.
const EXTRACTION_TEMPERATURE: f64 = 0.1;

const PROBE_MESSAGE: &str =
    "Hello, this is a connection test. Please respond with \"Connection successful\".";
const PROBE_MAX_TOKENS: u32 = 10;
const PROBE_TEMPERATURE: f64 = 0.0;

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageResponse {
    #[serde(default)]
    pub content: Option<String>,
}

/// Build the extraction request: one user turn carrying the instruction
/// text followed by the image reference. No I/O happens here.
pub fn extraction_request(image_url: &str, settings: &EffectiveSettings) -> ChatRequest {
    let prompt = if settings.prompt.is_empty() {
        DEFAULT_PROMPT
    } else {
        settings.prompt.as_str()
    };

    ChatRequest {
        model: settings.model.clone(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: MessageContent::Parts(vec![
                ContentPart::Text {
                    text: prompt.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image_url.to_string(),
                    },
                },
            ]),
        }],
        max_tokens: MAX_OUTPUT_TOKENS,
        temperature: EXTRACTION_TEMPERATURE,
    }
}

/// Build the minimal connection-test probe.
pub fn probe_request(model: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: MessageContent::Text(PROBE_MESSAGE.to_string()),
        }],
        max_tokens: PROBE_MAX_TOKENS,
        temperature: PROBE_TEMPERATURE,
    }
}
