use serde::{Deserialize, Serialize};

/// Request body for `POST /ocr`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractTextRequest {
    /// Publicly fetchable URL of the image to transcribe.
    pub image_url: String,
}

/// Response body for `POST /ocr`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ExtractTextResponse {
    /// The extracted text as Markdown, or the fixed placeholder when the
    /// image contained no readable text.
    pub markdown: String,
}

/// Request body for `POST /test-connection`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestConnectionRequest {
    pub provider: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    /// Required when `provider` is `custom`.
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Response body for `POST /test-connection`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TestConnectionResponse {
    pub success: bool,
    pub message: String,
    /// The provider's raw reply to the probe message.
    pub response: Option<String>,
}
