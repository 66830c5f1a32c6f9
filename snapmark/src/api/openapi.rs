use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Snapmark API",
        version = "1.0.0",
        description = "Image-to-Markdown OCR service backed by vision LLMs.",
    ),
    paths(
        handlers::health::health_check,
        handlers::ocr::extract_text,
        handlers::ocr::test_connection,
        handlers::records::save_record,
        handlers::records::history,
        handlers::settings::get_settings,
        handlers::settings::save_settings,
    ),
    components(schemas(
        // OCR
        dto::ocr::ExtractTextRequest,
        dto::ocr::ExtractTextResponse,
        dto::ocr::TestConnectionRequest,
        dto::ocr::TestConnectionResponse,
        // Records
        dto::records::SaveRecordRequest,
        dto::records::SaveRecordResponse,
        dto::records::HistoryEntry,
        // Settings
        dto::settings::SettingsResponse,
        dto::settings::SaveSettingsRequest,
        dto::settings::SaveSettingsResponse,
        // Health
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
        // Providers
        crate::ocr::ProviderId,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "ocr", description = "Text extraction and provider diagnostics"),
        (name = "records", description = "Persisted OCR results and history"),
        (name = "settings", description = "Per-user provider settings"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            utoipa::openapi::security::SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
