//! Per-user settings handlers. Reads mask the stored key; writes carrying
//! the mask sentinel retain it.

use axum::extract::State;
use axum::Json;

use crate::api::dto::{SaveSettingsRequest, SaveSettingsResponse, SettingsResponse};
use crate::api::extractors::{AppJson, Identity};
use crate::api::state::AppState;
use crate::error::Result;
use crate::models::SettingsUpdate;
use crate::ocr::ProviderId;

/// `GET /settings`
#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Stored settings (key masked) or defaults", body = SettingsResponse),
        (status = 401, description = "Authentication required"),
    )
)]
pub async fn get_settings(
    State(state): State<AppState>,
    Identity(user_id): Identity,
) -> Result<Json<SettingsResponse>> {
    let response = match state.db.get_settings(&user_id).await? {
        Some(stored) => SettingsResponse::from_stored(&stored),
        None => SettingsResponse::defaults(&state.config.ocr)?,
    };

    Ok(Json(response))
}

/// `POST /settings`
#[utoipa::path(
    post,
    path = "/settings",
    tag = "settings",
    request_body = SaveSettingsRequest,
    responses(
        (status = 200, description = "Settings saved", body = SaveSettingsResponse),
        (status = 400, description = "Unknown provider or missing endpoint"),
        (status = 401, description = "Authentication required"),
    )
)]
pub async fn save_settings(
    State(state): State<AppState>,
    Identity(user_id): Identity,
    AppJson(req): AppJson<SaveSettingsRequest>,
) -> Result<Json<SaveSettingsResponse>> {
    let provider: ProviderId = req.provider.parse()?;
    // Reject endpoint-less custom configs at write time, before they can
    // break a later extraction.
    provider.resolve(req.endpoint.as_deref()).map(|_| ())?;

    let update = SettingsUpdate {
        provider,
        api_key: req.key_to_store(),
        model: req.model.clone(),
        custom_endpoint: req.endpoint.clone(),
        use_own_keys: req.use_own_keys,
        prompt: req.prompt.clone(),
    };

    state.db.upsert_settings(&user_id, &update).await?;

    tracing::debug!(provider = %provider, "User settings saved");
    Ok(Json(SaveSettingsResponse { success: true }))
}
