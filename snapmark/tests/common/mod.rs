use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use serde_json::json;

use snapmark::api::{create_router, AppState};
use snapmark::config::{Config, DatabaseConfig, OcrConfig, ServerConfig};
use snapmark::db::{Database, DatabaseBackend, LibSqlBackend};

/// Token the test app accepts for the user `user-alice`.
pub const ALICE_TOKEN: &str = "alice-token";
pub const ALICE: &str = "user-alice";

/// Build an app state whose default provider is `custom` pointed at
/// `default_endpoint` (normally a wiremock server).
pub async fn test_state(default_endpoint: &str) -> AppState {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            auth_tokens: HashMap::from([(ALICE_TOKEN.to_string(), ALICE.to_string())]),
        },
        database: DatabaseConfig {
            url: ":memory:".to_string(),
            auth_token: None,
            local_path: None,
        },
        ocr: OcrConfig {
            provider: "custom".to_string(),
            model: "test-vision".to_string(),
            api_key: Some("service-key".to_string()),
            base_url: Some(default_endpoint.to_string()),
            prompt: None,
        },
    };

    let raw_db = Database::new(&config.database).await.unwrap();
    let db: Arc<dyn DatabaseBackend> = Arc::new(LibSqlBackend::new(raw_db));

    AppState::new(config, db)
}

pub async fn test_app(default_endpoint: &str) -> (Router, AppState) {
    let state = test_state(default_endpoint).await;
    (create_router(state.clone()), state)
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A minimal OpenAI-style completion body with one choice.
pub fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1,
        "model": "test-vision",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }
        ],
        "usage": {
            "prompt_tokens": 1,
            "completion_tokens": 1,
            "total_tokens": 2
        }
    })
}

/// A completion body with an empty choice list.
pub fn empty_choices_body() -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1,
        "model": "test-vision",
        "choices": []
    })
}
