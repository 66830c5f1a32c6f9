use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;

use crate::error::SnapmarkError;

use super::state::AppState;

/// JSON body extractor whose rejections surface as 400 validation errors in
/// the uniform `{"error": ...}` shape instead of axum's plain-text replies.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(SnapmarkError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for SnapmarkError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

fn map_json_rejection(rejection: JsonRejection) -> SnapmarkError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.to_string();
            if let Some(field) = extract_missing_field(&message) {
                SnapmarkError::Validation(format!("Missing required field: {field}"))
            } else {
                SnapmarkError::Validation(format!("Invalid JSON: {message}"))
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            SnapmarkError::Validation(format!("JSON syntax error: {err}"))
        }
        JsonRejection::MissingJsonContentType(_) => {
            SnapmarkError::Validation("Missing `Content-Type: application/json` header".to_string())
        }
        JsonRejection::BytesRejection(_) => {
            SnapmarkError::Internal("Failed to read request body".to_string())
        }
        _ => SnapmarkError::Validation(rejection.to_string()),
    }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}

/// The caller's identity, if the request carries a recognized bearer token.
///
/// The identity provider contract is "a caller identity or none": a missing,
/// malformed, or unknown token makes the request anonymous rather than
/// rejecting it. Routes that require a caller use [`Identity`] instead.
pub struct MaybeIdentity(pub Option<String>);

/// The caller's identity; rejects with 401 when the request is anonymous.
pub struct Identity(pub String);

fn resolve_identity(parts: &Parts, state: &AppState) -> Option<String> {
    let header = parts
        .headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())?;

    let token = header.strip_prefix("Bearer ")?;
    state.config.server.auth_tokens.get(token).cloned()
}

impl FromRequestParts<AppState> for MaybeIdentity {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeIdentity(resolve_identity(parts, state)))
    }
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = SnapmarkError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_identity(parts, state)
            .map(Identity)
            .ok_or(SnapmarkError::AuthRequired)
    }
}
