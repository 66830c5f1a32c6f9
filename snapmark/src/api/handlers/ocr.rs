//! OCR extraction and connection-test handlers. Both are public: anonymous
//! callers get the service-wide default provider.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::api::dto::{
    ExtractTextRequest, ExtractTextResponse, TestConnectionRequest, TestConnectionResponse,
};
use crate::api::extractors::{AppJson, MaybeIdentity};
use crate::api::state::AppState;
use crate::error::{Result, SnapmarkError};

/// `POST /ocr`
#[utoipa::path(
    post,
    path = "/ocr",
    tag = "ocr",
    request_body = ExtractTextRequest,
    responses(
        (status = 200, description = "Extracted Markdown", body = ExtractTextResponse),
        (status = 400, description = "Missing image URL"),
        (status = 500, description = "Extraction failed"),
    )
)]
pub async fn extract_text(
    State(state): State<AppState>,
    MaybeIdentity(caller): MaybeIdentity,
    AppJson(req): AppJson<ExtractTextRequest>,
) -> Result<Json<ExtractTextResponse>> {
    if req.image_url.trim().is_empty() {
        return Err(SnapmarkError::Validation("Image URL is required".to_string()));
    }

    let markdown = state
        .ocr
        .extract_markdown(&req.image_url, caller.as_deref())
        .await?;

    Ok(Json(ExtractTextResponse { markdown }))
}

/// `POST /test-connection`
///
/// Provider failures surface as 400 here: the endpoint exists to show the
/// caller why their credentials do not work, not to signal a server fault.
#[utoipa::path(
    post,
    path = "/test-connection",
    tag = "ocr",
    request_body = TestConnectionRequest,
    responses(
        (status = 200, description = "Probe succeeded", body = TestConnectionResponse),
        (status = 400, description = "Invalid parameters or provider rejection"),
    )
)]
pub async fn test_connection(
    State(state): State<AppState>,
    AppJson(req): AppJson<TestConnectionRequest>,
) -> Result<Response> {
    let api_key = req.api_key.unwrap_or_default();
    if api_key.trim().is_empty() {
        return Err(SnapmarkError::Validation("API key is required".to_string()));
    }

    let probe = state
        .ocr
        .test_connection(&req.provider, &api_key, &req.model, req.endpoint.as_deref())
        .await;

    match probe {
        Ok(response) => Ok(Json(TestConnectionResponse {
            success: true,
            message: "Connection successful".to_string(),
            response,
        })
        .into_response()),
        Err(SnapmarkError::Provider { message, .. }) => Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("API Error: {message}") })),
        )
            .into_response()),
        Err(err) => Err(err),
    }
}
