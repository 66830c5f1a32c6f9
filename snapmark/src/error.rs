use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapmarkError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    AuthRequired,

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Custom endpoint is required for custom provider")]
    MissingEndpoint,

    #[error("Failed to extract text from image using {provider}: {message}")]
    Provider { provider: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl SnapmarkError {
    /// Message shown to the client. Internal variants are not leaked.
    fn client_message(&self) -> String {
        match self {
            SnapmarkError::Validation(msg) => msg.clone(),
            SnapmarkError::AuthRequired => "Unauthorized".to_string(),
            SnapmarkError::UnsupportedProvider(provider) => {
                format!("Unsupported provider: {provider}")
            }
            SnapmarkError::MissingEndpoint => {
                "Custom endpoint is required for custom provider".to_string()
            }
            SnapmarkError::Provider { .. } => self.to_string(),
            SnapmarkError::Json(e) => format!("Invalid JSON: {e}"),
            SnapmarkError::Database(_) | SnapmarkError::Internal(_) => {
                tracing::error!(error = %self, "Internal error mapped to response");
                "An internal error occurred".to_string()
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            SnapmarkError::Validation(_)
            | SnapmarkError::UnsupportedProvider(_)
            | SnapmarkError::MissingEndpoint
            | SnapmarkError::Json(_) => StatusCode::BAD_REQUEST,
            SnapmarkError::AuthRequired => StatusCode::UNAUTHORIZED,
            SnapmarkError::Provider { .. }
            | SnapmarkError::Database(_)
            | SnapmarkError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SnapmarkError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.client_message() }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, SnapmarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = SnapmarkError::Validation("Image URL is required".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "Image URL is required");
    }

    #[test]
    fn auth_required_maps_to_unauthorized() {
        assert_eq!(SnapmarkError::AuthRequired.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn provider_error_embeds_provider_and_cause() {
        let err = SnapmarkError::Provider {
            provider: "groq".to_string(),
            message: "invalid api key".to_string(),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let message = err.client_message();
        assert!(message.contains("groq"));
        assert!(message.contains("invalid api key"));
    }

    #[test]
    fn internal_details_are_not_leaked() {
        let err = SnapmarkError::Internal("connection pool exhausted at 10.0.0.3".to_string());
        assert_eq!(err.client_message(), "An internal error occurred");
    }

    #[test]
    fn registry_errors_map_to_bad_request() {
        assert_eq!(
            SnapmarkError::UnsupportedProvider("mistral".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(SnapmarkError::MissingEndpoint.status(), StatusCode::BAD_REQUEST);
    }
}
